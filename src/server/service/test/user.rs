use test_utils::builder::TestBuilder;

use crate::server::{
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::user::{RegisterUserParam, UpdateProfileParam},
    service::user::{hash_password, verify_password, UserService},
};

#[test]
fn hashes_verify_and_salts_differ() {
    let first = hash_password("correct horse");
    let second = hash_password("correct horse");

    assert!(verify_password(&first, "correct horse"));
    assert!(verify_password(&second, "correct horse"));
    assert!(!verify_password(&first, "wrong horse"));
    // Fresh salt per hash
    assert_ne!(first, second);
}

#[test]
fn rejects_unsalted_garbage() {
    assert!(!verify_password("notahash", "anything"));
}

/// Tests registration and the stored credential round trip.
#[tokio::test]
async fn registers_account() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .register(RegisterUserParam {
            email: "test@test.com".to_string(),
            password: "testpass".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.email, "test@test.com");
    assert!(!user.is_staff);

    let authenticated = service.authenticate("test@test.com", "testpass").await;
    assert!(authenticated.is_ok());
}

/// Tests the minimum credential-strength rule.
#[tokio::test]
async fn rejects_short_password() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .register(RegisterUserParam {
            email: "test@test.com".to_string(),
            password: "tst".to_string(),
        })
        .await;

    match result {
        Err(AppError::ValidationErr(ValidationError::Field { field, .. })) => {
            assert_eq!(field, "password");
        }
        other => panic!("expected password field error, got {:?}", other.err()),
    }

    // Nothing persisted
    let lookup = UserService::new(db).authenticate("test@test.com", "tst").await;
    assert!(matches!(
        lookup,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
}

/// Tests that a duplicate email is a conflict, not a validation failure.
#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service
        .register(RegisterUserParam {
            email: "test@test.com".to_string(),
            password: "testpass".to_string(),
        })
        .await
        .unwrap();

    let second = service
        .register(RegisterUserParam {
            email: "test@test.com".to_string(),
            password: "testpass".to_string(),
        })
        .await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
}

/// Tests that wrong passwords and unknown emails fail identically.
#[tokio::test]
async fn bad_credentials_fail_uniformly() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service
        .register(RegisterUserParam {
            email: "test@test.com".to_string(),
            password: "testpass".to_string(),
        })
        .await
        .unwrap();

    let wrong_password = service.authenticate("test@test.com", "wrongpass").await;
    let unknown_email = service.authenticate("nouser@test.com", "testpass").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
}

/// Tests self-service profile updates for email and password.
#[tokio::test]
async fn updates_profile() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .register(RegisterUserParam {
            email: "test@test.com".to_string(),
            password: "testpass".to_string(),
        })
        .await
        .unwrap();

    let updated = service
        .update_profile(
            user.id,
            UpdateProfileParam {
                email: Some("test_123@test.com".to_string()),
                password: Some("newpassword123".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.email, "test_123@test.com");
    assert!(service
        .authenticate("test_123@test.com", "newpassword123")
        .await
        .is_ok());
}

/// Tests that the update path enforces the same password rule.
#[tokio::test]
async fn update_rejects_short_password() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .register(RegisterUserParam {
            email: "test@test.com".to_string(),
            password: "testpass".to_string(),
        })
        .await
        .unwrap();

    let result = service
        .update_profile(
            user.id,
            UpdateProfileParam {
                email: None,
                password: Some("tst".to_string()),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::Field { .. }))
    ));
}

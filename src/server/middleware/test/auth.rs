use axum::http::{header, HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{issue_token, AuthGuard, Permission},
    state::AuthConfig,
};

fn auth_config() -> AuthConfig {
    AuthConfig {
        secret: "test-secret".to_string(),
        token_ttl_seconds: 3600,
    }
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// Tests that a request without credentials is rejected before any
/// permission is even considered.
#[tokio::test]
async fn rejects_missing_token() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = auth_config();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &auth, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests that garbage tokens are rejected as invalid.
#[tokio::test]
async fn rejects_malformed_token() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = auth_config();
    let headers = bearer_headers("not-a-jwt");

    let result = AuthGuard::new(db, &auth, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Tests that tokens signed with a different secret do not validate.
#[tokio::test]
async fn rejects_token_with_wrong_signature() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await.unwrap();

    let other = AuthConfig {
        secret: "other-secret".to_string(),
        token_ttl_seconds: 3600,
    };
    let forged = issue_token(user.id, &other).unwrap();

    let auth = auth_config();
    let headers = bearer_headers(&forged);

    let result = AuthGuard::new(db, &auth, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Tests a valid token with no extra permissions required.
#[tokio::test]
async fn accepts_authenticated_user() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await.unwrap();
    let auth = auth_config();
    let headers = bearer_headers(&issue_token(user.id, &auth).unwrap());

    let resolved = AuthGuard::new(db, &auth, &headers)
        .require(&[])
        .await
        .unwrap();

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.email, user.email);
}

/// Tests that the admin permission is denied for regular users and granted
/// for staff.
#[tokio::test]
async fn enforces_admin_permission() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = auth_config();

    let regular = UserFactory::new(db).build().await.unwrap();
    let regular_headers = bearer_headers(&issue_token(regular.id, &auth).unwrap());
    let denied = AuthGuard::new(db, &auth, &regular_headers)
        .require(&[Permission::Admin])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    let admin = UserFactory::new(db).is_staff(true).build().await.unwrap();
    let admin_headers = bearer_headers(&issue_token(admin.id, &auth).unwrap());
    let granted = AuthGuard::new(db, &auth, &admin_headers)
        .require(&[Permission::Admin])
        .await;
    assert!(granted.is_ok());
}

/// Tests that a token for a deleted account no longer authenticates.
#[tokio::test]
async fn rejects_token_for_missing_user() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = auth_config();
    let headers = bearer_headers(&issue_token(424_242, &auth).unwrap());

    let result = AuthGuard::new(db, &auth, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));
}

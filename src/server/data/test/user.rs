use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::server::data::user::UserRepository;

/// Tests creating an account and the two lookup paths.
#[tokio::test]
async fn creates_and_finds_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create("pilot@test.com".to_string(), "hash".to_string(), false)
        .await?;

    assert_eq!(
        repo.find_by_id(user.id).await?.as_ref(),
        Some(&user)
    );
    assert_eq!(
        repo.find_by_email("pilot@test.com").await?.as_ref(),
        Some(&user)
    );
    assert!(repo.find_by_email("nobody@test.com").await?.is_none());

    Ok(())
}

/// Tests the unique email index.
///
/// Expected: Err(DbErr) on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create("dup@test.com".to_string(), "hash".to_string(), false)
        .await?;

    let second = repo
        .create("dup@test.com".to_string(), "other".to_string(), false)
        .await;

    assert!(second.is_err());

    Ok(())
}

/// Tests partial profile updates: None leaves columns untouched.
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create("old@test.com".to_string(), "hash".to_string(), false)
        .await?;

    let updated = repo
        .update(user.id, Some("new@test.com".to_string()), None)
        .await?;

    assert_eq!(updated.email, "new@test.com");
    assert_eq!(updated.password_hash, "hash");

    Ok(())
}

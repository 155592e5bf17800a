//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts in
//! the database. It handles account creation, credential lookups, and
//! self-service profile updates. Password hashing happens in the service
//! layer; this repository only ever sees the finished hash.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// The email column carries a unique index; inserting a duplicate email
    /// fails with a unique constraint violation which the service layer maps
    /// to a conflict response.
    ///
    /// # Arguments
    /// - `email` - Account email, used as the login identifier
    /// - `password_hash` - Pre-hashed credential
    /// - `is_staff` - Whether the account has administrator rights
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including duplicate email
    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        is_staff: bool,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            is_staff: ActiveValue::Set(is_staff),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by email.
    ///
    /// Used during token exchange; the returned model includes the stored
    /// password hash for verification.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Updates a user's email and/or password hash.
    ///
    /// `None` arguments leave the corresponding column untouched.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that id
    /// - `Err(DbErr)` - Other database error, including duplicate email
    pub async fn update(
        &self,
        id: i32,
        email: Option<String>,
        password_hash: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();

        if let Some(email) = email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }

        active_model.update(self.db).await
    }
}

use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::user::{RegisterUserParam, UpdateProfileParam, User},
};

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 8;

/// Client-facing message for an email that is already registered.
pub const EMAIL_TAKEN_MESSAGE: &str = "A user with this email already exists.";

/// Hashes a password with a fresh random salt.
///
/// Stored form is `{salt_hex}${digest_hex}` where the digest is
/// SHA-256(salt || password).
pub fn hash_password(password: &str) -> String {
    let salt = hex::encode(rand::random::<[u8; 16]>());
    let digest = digest_password(&salt, password);
    format!("{}${}", salt, digest)
}

/// Verifies a password against its stored salted hash.
pub fn verify_password(stored: &str, password: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, digest)) => digest_password(salt, password) == digest,
        None => false,
    }
}

fn digest_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::ValidationErr)` - Malformed email or short password
    /// - `Err(AppError::Conflict)` - Email already registered; deliberately a
    ///   different status from validation failures
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        Self::validate_email(&param.email)?;
        Self::validate_password(&param.password)?;

        let user = UserRepository::new(self.db)
            .create(param.email, hash_password(&param.password), false)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, EMAIL_TAKEN_MESSAGE))?;

        Ok(User::from_entity(user))
    }

    /// Verifies credentials for token issuance.
    ///
    /// Unknown emails and wrong passwords fail identically so the endpoint
    /// does not reveal which accounts exist.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&user.password_hash, password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(User::from_entity(user))
    }

    /// Updates the caller's own profile.
    ///
    /// Only email and password can change, each validated by the same rules
    /// as registration. Omitted fields are left untouched.
    pub async fn update_profile(
        &self,
        user_id: i32,
        param: UpdateProfileParam,
    ) -> Result<User, AppError> {
        if let Some(email) = &param.email {
            Self::validate_email(email)?;
        }
        let password_hash = match &param.password {
            Some(password) => {
                Self::validate_password(password)?;
                Some(hash_password(password))
            }
            None => None,
        };

        let user = UserRepository::new(self.db)
            .update(user_id, param.email, password_hash)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, EMAIL_TAKEN_MESSAGE))?;

        Ok(User::from_entity(user))
    }

    fn validate_email(email: &str) -> Result<(), ValidationError> {
        // Minimal shape check; uniqueness is the database's business.
        let well_formed = email.contains('@') && !email.starts_with('@') && !email.ends_with('@');
        if !well_formed {
            return Err(ValidationError::field("email", "Enter a valid email address."));
        }

        Ok(())
    }

    fn validate_password(password: &str) -> Result<(), ValidationError> {
        if password.len() < MIN_PASSWORD_LEN {
            return Err(ValidationError::field(
                "password",
                format!(
                    "Ensure this field has at least {} characters.",
                    MIN_PASSWORD_LEN
                ),
            ));
        }

        Ok(())
    }
}

use axum::http::{header, HeaderMap};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    state::AuthConfig,
};

/// Roles a route can demand beyond plain authentication.
pub enum Permission {
    Admin,
}

/// JWT claims carried by issued bearer tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id, stringified.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

/// Signs a bearer token for the given user id.
pub fn issue_token(user_id: i32, auth: &AuthConfig) -> Result<String, AppError> {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (Utc::now() + Duration::seconds(auth.token_ttl_seconds)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth.secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Token encoding failed: {}", e)))
}

/// Request guard resolving the current principal from the `Authorization`
/// header and enforcing the permissions a handler requires.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    auth: &'a AuthConfig,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, auth: &'a AuthConfig, headers: &'a HeaderMap) -> Self {
        Self { db, auth, headers }
    }

    /// Authenticates the request and checks the required permissions.
    ///
    /// Resolves the bearer token to a user row, then verifies each requested
    /// permission against that user. An empty permission slice requires
    /// authentication only.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr)` - Missing/invalid token (401) or
    ///   insufficient role (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user_id = self.decode_user_id()?;

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_staff {
                        return Err(AuthError::AccessDenied(user_id).into());
                    }
                }
            }
        }

        Ok(User::from_entity(user))
    }

    /// Extracts and validates the bearer token, returning the user id it
    /// carries.
    fn decode_user_id(&self) -> Result<i32, AppError> {
        let auth_header = self
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.auth.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AuthError::InvalidToken)?;

        token_data
            .claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken.into())
    }
}

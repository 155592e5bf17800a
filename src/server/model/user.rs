//! User domain model and account operation parameters.

use crate::model::user::UserDto;

/// Authenticated principal as seen by the booking layer.
///
/// Deliberately excludes the stored credential hash; everything past the
/// repository boundary works with this shape.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_staff: bool,
}

impl User {
    /// Converts an entity model to the domain model at the repository
    /// boundary, dropping the credential hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            is_staff: entity.is_staff,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            is_staff: self.is_staff,
        }
    }
}

/// Parameters for creating a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub email: String,
    pub password: String,
}

/// Parameters for a self-service profile update. `None` fields are left
/// unchanged.
#[derive(Debug, Clone)]
pub struct UpdateProfileParam {
    pub email: Option<String>,
    pub password: Option<String>,
}

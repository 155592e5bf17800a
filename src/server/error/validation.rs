use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, ValidationErrorDto};

/// Validation failure raised before a write reaches the database.
///
/// `Field` failures are keyed by the offending field name so clients can
/// attach the message to the right input; `Object` failures concern the
/// record as a whole (e.g. booking on a departed flight).
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    Field { field: String, message: String },

    #[error("{0}")]
    Object(String),
}

impl ValidationError {
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Both shapes map to 400 Bad Request; field failures carry a field-keyed
/// body, object failures a plain error message.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        match self {
            Self::Field { field, message } => {
                let mut errors = HashMap::new();
                errors.insert(field, message);
                (StatusCode::BAD_REQUEST, Json(ValidationErrorDto { errors })).into_response()
            }
            Self::Object(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
        }
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Field-keyed validation failure body, e.g.
/// `{"errors": {"seat": "seat number must be in available range ..."}}`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub errors: HashMap<String, String>,
}

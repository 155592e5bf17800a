use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AirportDto {
    pub id: i32,
    pub name: String,
    pub closest_big_city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAirportDto {
    pub name: String,
    pub closest_big_city: String,
}

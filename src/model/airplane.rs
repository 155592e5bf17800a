use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AirplaneTypeDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAirplaneTypeDto {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AirplaneDto {
    pub id: i32,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type: AirplaneTypeDto,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAirplaneDto {
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type: i32,
}

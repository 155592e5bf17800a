use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{airplane::AirplaneDto, crew::CrewDto, route::RouteDto};

/// Minimal flight shape for listings; the route is referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FlightListDto {
    pub id: i32,
    pub route: i32,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

/// Full flight shape with route, airplane and crew expanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FlightDetailDto {
    pub id: i32,
    pub route: RouteDto,
    pub airplane: AirplaneDto,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub crew: Vec<CrewDto>,
}

/// Create/update shape; related objects by id. On update the crew set is
/// replaced wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFlightDto {
    pub route: i32,
    pub airplane: i32,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    #[serde(default)]
    pub crew: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AvailableSeatsDto {
    pub available_seats: i64,
}

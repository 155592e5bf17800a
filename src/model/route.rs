use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::airport::AirportDto;

/// Route with both airports expanded. Airports are read-only here; writes go
/// through `CreateRouteDto` which references them by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RouteDto {
    pub id: i32,
    pub source: AirportDto,
    pub destination: AirportDto,
    pub distance: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRouteDto {
    pub source: i32,
    pub destination: i32,
    pub distance: i32,
}

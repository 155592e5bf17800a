use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::flight::FlightDetailDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketListDto {
    pub id: i32,
    pub row: i32,
    pub seat: i32,
    pub flight: i32,
}

/// Detail shape nests the full flight; the owning order stays a plain id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketDetailDto {
    pub id: i32,
    pub row: i32,
    pub seat: i32,
    pub flight: FlightDetailDto,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTicketDto {
    pub row: i32,
    pub seat: i32,
    pub flight: i32,
    pub order: i32,
}

/// Ticket specification embedded in an order creation request. The order id
/// is implied by the surrounding request, the owner by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderTicketDto {
    pub row: i32,
    pub seat: i32,
    pub flight: i32,
}

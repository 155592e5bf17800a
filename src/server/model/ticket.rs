//! Ticket operation parameter types.

use crate::model::ticket::{CreateTicketDto, OrderTicketDto};

/// Parameters for creating or updating a ticket through the admin endpoint.
#[derive(Debug, Clone)]
pub struct CreateTicketParams {
    pub row: i32,
    pub seat: i32,
    pub flight_id: i32,
    pub order_id: i32,
}

impl CreateTicketParams {
    pub fn from_dto(dto: CreateTicketDto) -> Self {
        Self {
            row: dto.row,
            seat: dto.seat,
            flight_id: dto.flight,
            order_id: dto.order,
        }
    }
}

/// A seat requested as part of an order creation; the order id does not
/// exist yet when this is validated.
#[derive(Debug, Clone)]
pub struct TicketSpec {
    pub row: i32,
    pub seat: i32,
    pub flight_id: i32,
}

impl TicketSpec {
    pub fn from_dto(dto: OrderTicketDto) -> Self {
        Self {
            row: dto.row,
            seat: dto.seat,
            flight_id: dto.flight,
        }
    }
}

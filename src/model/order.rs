use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    ticket::{OrderTicketDto, TicketListDto},
    user::UserDto,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderListDto {
    pub id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailDto {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub user: UserDto,
    pub tickets: Vec<TicketListDto>,
}

/// Order creation body. The owning user always comes from the authenticated
/// request context, never from the payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderDto {
    pub tickets: Vec<OrderTicketDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedOrdersDto {
    pub orders: Vec<OrderListDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

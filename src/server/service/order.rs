use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, TransactionTrait};

use crate::{
    model::{
        order::{OrderDetailDto, OrderListDto, PaginatedOrdersDto},
        ticket::TicketListDto,
    },
    server::{
        data::{order::OrderRepository, ticket::TicketRepository},
        error::{validation::ValidationError, AppError},
        model::{ticket::TicketSpec, user::User},
        service::ticket::{validate_departure_in_future, validate_seat_bounds, SEAT_TAKEN_MESSAGE},
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an order with its embedded tickets, all-or-nothing.
    ///
    /// The order row and every ticket are written inside one transaction:
    /// any seat-validation failure or uniqueness conflict rolls the whole
    /// request back, leaving neither order nor tickets behind. The owning
    /// user comes from the authenticated context, never from client input.
    ///
    /// # Arguments
    /// - `user` - The authenticated caller who will own the order
    /// - `specs` - Requested seats, one per ticket
    ///
    /// # Returns
    /// - `Ok(OrderDetailDto)` - The created order with its tickets
    /// - `Err(AppError::ValidationErr)` - A ticket failed validation
    /// - `Err(AppError::Conflict)` - A requested seat is already booked,
    ///   including two tickets in the same request naming the same seat
    pub async fn create(
        &self,
        user: &User,
        specs: Vec<TicketSpec>,
    ) -> Result<OrderDetailDto, AppError> {
        let user_id = user.id;

        let order_id = self
            .db
            .transaction::<_, i32, AppError>(|txn| {
                Box::pin(async move {
                    let order = entity::order::ActiveModel {
                        created_at: ActiveValue::Set(Utc::now()),
                        user_id: ActiveValue::Set(user_id),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    for spec in specs {
                        let flight = entity::prelude::Flight::find_by_id(spec.flight_id)
                            .one(txn)
                            .await?
                            .ok_or_else(|| {
                                ValidationError::field("flight", "flight does not exist")
                            })?;

                        let airplane = entity::prelude::Airplane::find_by_id(flight.airplane_id)
                            .one(txn)
                            .await?
                            .ok_or_else(|| {
                                AppError::InternalError(format!(
                                    "Flight {} references missing airplane {}",
                                    flight.id, flight.airplane_id
                                ))
                            })?;

                        validate_seat_bounds(spec.row, spec.seat, &airplane)?;
                        validate_departure_in_future(&flight)?;

                        entity::ticket::ActiveModel {
                            row: ActiveValue::Set(spec.row),
                            seat: ActiveValue::Set(spec.seat),
                            flight_id: ActiveValue::Set(flight.id),
                            order_id: ActiveValue::Set(order.id),
                            ..Default::default()
                        }
                        .insert(txn)
                        .await
                        .map_err(|e| AppError::conflict_on_unique(e, SEAT_TAKEN_MESSAGE))?;
                    }

                    Ok(order.id)
                })
            })
            .await?;

        self.get_detail(order_id, user)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found after creation".to_string()))
    }

    /// Gets one page of the caller's orders.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated caller
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Page size, already clamped by the controller
    pub async fn list(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedOrdersDto, AppError> {
        let (orders, total) = OrderRepository::new(self.db)
            .get_paginated_by_user(user_id, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(PaginatedOrdersDto {
            orders: orders
                .into_iter()
                .map(|order| OrderListDto {
                    id: order.id,
                    created_at: order.created_at,
                })
                .collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets one of the caller's orders with owner and tickets expanded.
    ///
    /// Orders owned by other users resolve to `None`; the caller cannot tell
    /// them apart from orders that do not exist.
    pub async fn get_detail(
        &self,
        id: i32,
        user: &User,
    ) -> Result<Option<OrderDetailDto>, AppError> {
        let Some(order) = OrderRepository::new(self.db)
            .find_by_id_for_user(id, user.id)
            .await?
        else {
            return Ok(None);
        };

        let tickets = TicketRepository::new(self.db)
            .get_by_order(order.id)
            .await?
            .into_iter()
            .map(|ticket| TicketListDto {
                id: ticket.id,
                row: ticket.row,
                seat: ticket.seat,
                flight: ticket.flight_id,
            })
            .collect();

        Ok(Some(OrderDetailDto {
            id: order.id,
            created_at: order.created_at,
            user: user.clone().into_dto(),
            tickets,
        }))
    }

    /// Gets every ticket across all of the caller's orders, flat.
    pub async fn my_tickets(&self, user_id: i32) -> Result<Vec<TicketListDto>, AppError> {
        let tickets = TicketRepository::new(self.db).get_by_owner(user_id).await?;

        Ok(tickets
            .into_iter()
            .map(|ticket| TicketListDto {
                id: ticket.id,
                row: ticket.row,
                seat: ticket.seat,
                flight: ticket.flight_id,
            })
            .collect())
    }
}

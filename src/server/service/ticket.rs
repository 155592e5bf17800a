use sea_orm::{DatabaseConnection, EntityTrait};

use crate::{
    model::ticket::{TicketDetailDto, TicketListDto},
    server::{
        data::{airplane::AirplaneRepository, flight::FlightRepository, ticket::TicketRepository},
        error::{validation::ValidationError, AppError},
        model::ticket::CreateTicketParams,
        service::flight::FlightService,
    },
};

/// Client-facing message for a seat that is already taken.
pub const SEAT_TAKEN_MESSAGE: &str = "This seat is already booked for this flight.";

/// Checks that a requested seat lies within the airplane's seat grid.
///
/// Each bound is checked independently so the failure names the offending
/// field and its valid range, e.g.
/// `row number must be in available range: (1, rows): (1, 20)`.
pub fn validate_seat_bounds(
    row: i32,
    seat: i32,
    airplane: &entity::airplane::Model,
) -> Result<(), ValidationError> {
    if !(1..=airplane.rows).contains(&row) {
        return Err(ValidationError::field(
            "row",
            format!(
                "row number must be in available range: (1, rows): (1, {})",
                airplane.rows
            ),
        ));
    }
    if !(1..=airplane.seats_in_row).contains(&seat) {
        return Err(ValidationError::field(
            "seat",
            format!(
                "seat number must be in available range: (1, seats_in_row): (1, {})",
                airplane.seats_in_row
            ),
        ));
    }

    Ok(())
}

/// Rejects bookings on flights whose departure time is not strictly in the
/// future.
pub fn validate_departure_in_future(
    flight: &entity::flight::Model,
) -> Result<(), ValidationError> {
    if flight.departure_time <= chrono::Utc::now() {
        return Err(ValidationError::Object(
            "Cannot book a ticket: the flight has already departed.".to_string(),
        ));
    }

    Ok(())
}

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a ticket after re-running the full seat validation.
    ///
    /// # Returns
    /// - `Ok(TicketListDto)` - The created ticket
    /// - `Err(AppError::ValidationErr)` - Out-of-range seat, departed flight,
    ///   or dangling flight/order reference
    /// - `Err(AppError::Conflict)` - Seat already booked on that flight
    pub async fn create(&self, params: CreateTicketParams) -> Result<TicketListDto, AppError> {
        self.validate(&params).await?;

        let ticket = TicketRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, SEAT_TAKEN_MESSAGE))?;

        Ok(Self::to_list_dto(ticket))
    }

    /// Updates a ticket; the same validation as creation applies.
    pub async fn update(
        &self,
        id: i32,
        params: CreateTicketParams,
    ) -> Result<TicketListDto, AppError> {
        let repo = TicketRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Ticket not found".to_string()));
        }

        self.validate(&params).await?;

        let ticket = repo
            .update(id, params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, SEAT_TAKEN_MESSAGE))?;

        Ok(Self::to_list_dto(ticket))
    }

    /// Gets tickets in list shape, optionally filtered by flight and order.
    pub async fn list(
        &self,
        flight_id: Option<i32>,
        order_id: Option<i32>,
    ) -> Result<Vec<TicketListDto>, AppError> {
        let tickets = TicketRepository::new(self.db)
            .get_filtered(flight_id, order_id)
            .await?;

        Ok(tickets.into_iter().map(Self::to_list_dto).collect())
    }

    /// Gets one ticket with its flight fully expanded.
    pub async fn get_detail(&self, id: i32) -> Result<Option<TicketDetailDto>, AppError> {
        let Some(ticket) = TicketRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let flight = FlightService::new(self.db)
            .get_detail(ticket.flight_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Flight not found".to_string()))?;

        Ok(Some(TicketDetailDto {
            id: ticket.id,
            row: ticket.row,
            seat: ticket.seat,
            flight,
            order: ticket.order_id,
        }))
    }

    /// Deletes a ticket.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(TicketRepository::new(self.db).delete(id).await?)
    }

    /// Runs the reference and seat checks shared by create and update.
    async fn validate(&self, params: &CreateTicketParams) -> Result<(), AppError> {
        let flight = FlightRepository::new(self.db)
            .find_by_id(params.flight_id)
            .await?
            .ok_or_else(|| ValidationError::field("flight", "flight does not exist"))?;

        if entity::prelude::Order::find_by_id(params.order_id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Err(ValidationError::field("order", "order does not exist").into());
        }

        let airplane = AirplaneRepository::new(self.db)
            .find_by_id(flight.airplane_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Flight {} references missing airplane {}",
                    flight.id, flight.airplane_id
                ))
            })?;

        validate_seat_bounds(params.row, params.seat, &airplane)?;
        validate_departure_in_future(&flight)?;

        Ok(())
    }

    fn to_list_dto(ticket: entity::ticket::Model) -> TicketListDto {
        TicketListDto {
            id: ticket.id,
            row: ticket.row,
            seat: ticket.seat,
            flight: ticket.flight_id,
        }
    }
}

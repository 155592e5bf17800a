use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tickets on an existing flight and order.
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    row: i32,
    seat: i32,
    flight_id: i32,
    order_id: i32,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new TicketFactory defaulting to row 1, seat 1.
    pub fn new(db: &'a DatabaseConnection, flight_id: i32, order_id: i32) -> Self {
        Self {
            db,
            row: 1,
            seat: 1,
            flight_id,
            order_id,
        }
    }

    /// Sets the seat row.
    pub fn row(mut self, row: i32) -> Self {
        self.row = row;
        self
    }

    /// Sets the seat number within the row.
    pub fn seat(mut self, seat: i32) -> Self {
        self.seat = seat;
        self
    }

    /// Builds and inserts the ticket entity into the database.
    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        entity::ticket::ActiveModel {
            row: ActiveValue::Set(self.row),
            seat: ActiveValue::Set(self.seat),
            flight_id: ActiveValue::Set(self.flight_id),
            order_id: ActiveValue::Set(self.order_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ticket at the given seat on the given flight and order.
pub async fn create_ticket(
    db: &DatabaseConnection,
    flight_id: i32,
    order_id: i32,
    row: i32,
    seat: i32,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, flight_id, order_id)
        .row(row)
        .seat(seat)
        .build()
        .await
}

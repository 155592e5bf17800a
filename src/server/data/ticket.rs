use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::ticket::CreateTicketParams;

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a ticket row.
    ///
    /// Seat validation happens in the service layer before this call; the
    /// unique seat index still backstops concurrent duplicates.
    pub async fn create(&self, params: CreateTicketParams) -> Result<entity::ticket::Model, DbErr> {
        entity::ticket::ActiveModel {
            row: ActiveValue::Set(params.row),
            seat: ActiveValue::Set(params.seat),
            flight_id: ActiveValue::Set(params.flight_id),
            order_id: ActiveValue::Set(params.order_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a ticket by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::ticket::Model>, DbErr> {
        entity::prelude::Ticket::find_by_id(id).one(self.db).await
    }

    /// Gets tickets, optionally narrowed to one flight and/or one order.
    ///
    /// Filters compose with AND; results are deduplicated and ordered by
    /// (flight, row, seat).
    pub async fn get_filtered(
        &self,
        flight_id: Option<i32>,
        order_id: Option<i32>,
    ) -> Result<Vec<entity::ticket::Model>, DbErr> {
        let mut query = entity::prelude::Ticket::find();

        if let Some(flight_id) = flight_id {
            query = query.filter(entity::ticket::Column::FlightId.eq(flight_id));
        }
        if let Some(order_id) = order_id {
            query = query.filter(entity::ticket::Column::OrderId.eq(order_id));
        }

        query
            .order_by_asc(entity::ticket::Column::FlightId)
            .order_by_asc(entity::ticket::Column::Row)
            .order_by_asc(entity::ticket::Column::Seat)
            .distinct()
            .all(self.db)
            .await
    }

    /// Gets all tickets belonging to one order.
    pub async fn get_by_order(&self, order_id: i32) -> Result<Vec<entity::ticket::Model>, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::OrderId.eq(order_id))
            .order_by_asc(entity::ticket::Column::FlightId)
            .order_by_asc(entity::ticket::Column::Row)
            .order_by_asc(entity::ticket::Column::Seat)
            .all(self.db)
            .await
    }

    /// Gets every ticket whose order belongs to the given user, across all
    /// of their orders.
    pub async fn get_by_owner(&self, user_id: i32) -> Result<Vec<entity::ticket::Model>, DbErr> {
        entity::prelude::Ticket::find()
            .join(JoinType::InnerJoin, entity::ticket::Relation::Order.def())
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_asc(entity::ticket::Column::FlightId)
            .order_by_asc(entity::ticket::Column::Row)
            .order_by_asc(entity::ticket::Column::Seat)
            .all(self.db)
            .await
    }

    /// Counts tickets booked on a flight.
    pub async fn count_by_flight(&self, flight_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::FlightId.eq(flight_id))
            .count(self.db)
            .await
    }

    /// Updates a ticket's seat assignment and references.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated ticket
    /// - `Err(DbErr::RecordNotFound)` - No ticket with that id
    pub async fn update(
        &self,
        id: i32,
        params: CreateTicketParams,
    ) -> Result<entity::ticket::Model, DbErr> {
        let ticket = entity::prelude::Ticket::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Ticket {} not found", id)))?;

        let mut active_model: entity::ticket::ActiveModel = ticket.into();
        active_model.row = ActiveValue::Set(params.row);
        active_model.seat = ActiveValue::Set(params.seat);
        active_model.flight_id = ActiveValue::Set(params.flight_id);
        active_model.order_id = ActiveValue::Set(params.order_id);

        active_model.update(self.db).await
    }

    /// Deletes a ticket by id.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Ticket::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

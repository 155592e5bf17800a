use chrono::{Duration, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::flight::{CreateFlightParams, FlightFilters};

pub struct FlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new flight with its crew assignments.
    ///
    /// # Arguments
    /// - `params` - Route, airplane, schedule and the full crew id set
    ///
    /// # Returns
    /// - `Ok(Model)` - The created flight
    /// - `Err(DbErr)` - Database error, including foreign key violations for
    ///   dangling route/airplane/crew references
    pub async fn create(&self, params: CreateFlightParams) -> Result<entity::flight::Model, DbErr> {
        let flight = entity::flight::ActiveModel {
            route_id: ActiveValue::Set(params.route_id),
            airplane_id: ActiveValue::Set(params.airplane_id),
            departure_time: ActiveValue::Set(params.departure_time),
            arrival_time: ActiveValue::Set(params.arrival_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for crew_id in params.crew {
            entity::flight_crew::ActiveModel {
                flight_id: ActiveValue::Set(flight.id),
                crew_id: ActiveValue::Set(crew_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(flight)
    }

    /// Finds a flight by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::flight::Model>, DbErr> {
        entity::prelude::Flight::find_by_id(id).one(self.db).await
    }

    /// Gets the crew members assigned to a flight, ordered by name.
    pub async fn get_crew(&self, flight_id: i32) -> Result<Vec<entity::crew::Model>, DbErr> {
        let crew_ids: Vec<i32> = entity::prelude::FlightCrew::find()
            .filter(entity::flight_crew::Column::FlightId.eq(flight_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|fc| fc.crew_id)
            .collect();

        if crew_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Crew::find()
            .filter(entity::crew::Column::Id.is_in(crew_ids))
            .order_by_asc(entity::crew::Column::FirstName)
            .order_by_asc(entity::crew::Column::LastName)
            .all(self.db)
            .await
    }

    /// Gets flights matching the given filters, ordered by departure time.
    ///
    /// Filters compose with AND; the `date` filter matches the calendar day
    /// of the departure timestamp. Results are deduplicated.
    pub async fn get_filtered(
        &self,
        filters: &FlightFilters,
    ) -> Result<Vec<entity::flight::Model>, DbErr> {
        let mut query = entity::prelude::Flight::find();

        if let Some(date) = filters.date {
            let day_start = date.and_time(NaiveTime::MIN).and_utc();
            let day_end = day_start + Duration::days(1);
            query = query
                .filter(entity::flight::Column::DepartureTime.gte(day_start))
                .filter(entity::flight::Column::DepartureTime.lt(day_end));
        }
        if let Some(route_id) = filters.route_id {
            query = query.filter(entity::flight::Column::RouteId.eq(route_id));
        }
        if let Some(airplane_id) = filters.airplane_id {
            query = query.filter(entity::flight::Column::AirplaneId.eq(airplane_id));
        }

        query
            .order_by_asc(entity::flight::Column::DepartureTime)
            .distinct()
            .all(self.db)
            .await
    }

    /// Updates a flight and replaces its crew set.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated flight
    /// - `Err(DbErr::RecordNotFound)` - No flight with that id
    pub async fn update(
        &self,
        id: i32,
        params: CreateFlightParams,
    ) -> Result<entity::flight::Model, DbErr> {
        let flight = entity::prelude::Flight::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Flight {} not found", id)))?;

        let mut active_model: entity::flight::ActiveModel = flight.into();
        active_model.route_id = ActiveValue::Set(params.route_id);
        active_model.airplane_id = ActiveValue::Set(params.airplane_id);
        active_model.departure_time = ActiveValue::Set(params.departure_time);
        active_model.arrival_time = ActiveValue::Set(params.arrival_time);

        let updated_flight = active_model.update(self.db).await?;

        // Replace crew assignments wholesale
        entity::prelude::FlightCrew::delete_many()
            .filter(entity::flight_crew::Column::FlightId.eq(id))
            .exec(self.db)
            .await?;

        for crew_id in params.crew {
            entity::flight_crew::ActiveModel {
                flight_id: ActiveValue::Set(id),
                crew_id: ActiveValue::Set(crew_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(updated_flight)
    }

    /// Deletes a flight by id. Tickets and crew assignments cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Flight::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

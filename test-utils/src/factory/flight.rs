//! Flight factory for creating test flight entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::flight::FlightFactory;
///
/// let flight = FlightFactory::new(&db, route.id, airplane.id)
///     .departure_time(Utc::now() + Duration::hours(3))
///     .build()
///     .await?;
/// ```
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    route_id: i32,
    airplane_id: i32,
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - departure_time: 1 day from now
    /// - arrival_time: 4 hours after departure
    pub fn new(db: &'a DatabaseConnection, route_id: i32, airplane_id: i32) -> Self {
        let departure_time = Utc::now() + Duration::days(1);
        Self {
            db,
            route_id,
            airplane_id,
            departure_time,
            arrival_time: departure_time + Duration::hours(4),
        }
    }

    /// Sets the departure time.
    pub fn departure_time(mut self, departure_time: DateTime<Utc>) -> Self {
        self.departure_time = departure_time;
        self
    }

    /// Sets the arrival time.
    pub fn arrival_time(mut self, arrival_time: DateTime<Utc>) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Builds and inserts the flight entity into the database.
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            route_id: ActiveValue::Set(self.route_id),
            airplane_id: ActiveValue::Set(self.airplane_id),
            departure_time: ActiveValue::Set(self.departure_time),
            arrival_time: ActiveValue::Set(self.arrival_time),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight with default values on the given route and airplane.
pub async fn create_flight(
    db: &DatabaseConnection,
    route_id: i32,
    airplane_id: i32,
) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db, route_id, airplane_id).build().await
}

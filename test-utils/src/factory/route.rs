use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test routes between two existing airports.
pub struct RouteFactory<'a> {
    db: &'a DatabaseConnection,
    source_id: i32,
    destination_id: i32,
    distance: i32,
}

impl<'a> RouteFactory<'a> {
    /// Creates a new RouteFactory with a default distance of 500.
    pub fn new(db: &'a DatabaseConnection, source_id: i32, destination_id: i32) -> Self {
        Self {
            db,
            source_id,
            destination_id,
            distance: 500,
        }
    }

    /// Sets the route distance.
    pub fn distance(mut self, distance: i32) -> Self {
        self.distance = distance;
        self
    }

    /// Builds and inserts the route entity into the database.
    pub async fn build(self) -> Result<entity::route::Model, DbErr> {
        entity::route::ActiveModel {
            source_id: ActiveValue::Set(self.source_id),
            destination_id: ActiveValue::Set(self.destination_id),
            distance: ActiveValue::Set(self.distance),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a route with default values between the given airports.
pub async fn create_route(
    db: &DatabaseConnection,
    source_id: i32,
    destination_id: i32,
) -> Result<entity::route::Model, DbErr> {
    RouteFactory::new(db, source_id, destination_id).build().await
}

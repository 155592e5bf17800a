use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airports with customizable fields.
pub struct AirportFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    closest_big_city: String,
}

impl<'a> AirportFactory<'a> {
    /// Creates a new AirportFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Airport {id}"` where id is auto-incremented
    /// - closest_big_city: `"City {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Airport {}", id),
            closest_big_city: format!("City {}", id),
        }
    }

    /// Sets the airport name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the closest big city.
    pub fn closest_big_city(mut self, city: impl Into<String>) -> Self {
        self.closest_big_city = city.into();
        self
    }

    /// Builds and inserts the airport entity into the database.
    pub async fn build(self) -> Result<entity::airport::Model, DbErr> {
        entity::airport::ActiveModel {
            name: ActiveValue::Set(self.name),
            closest_big_city: ActiveValue::Set(self.closest_big_city),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airport with default values.
pub async fn create_airport(db: &DatabaseConnection) -> Result<entity::airport::Model, DbErr> {
    AirportFactory::new(db).build().await
}

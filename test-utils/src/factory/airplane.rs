use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airplanes with customizable seat grids.
///
/// Defaults to a 20 x 6 seat grid, matching the most common fixture used
/// across the booking tests.
pub struct AirplaneFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    rows: i32,
    seats_in_row: i32,
    airplane_type_id: i32,
    image: Option<String>,
}

impl<'a> AirplaneFactory<'a> {
    /// Creates a new AirplaneFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Airplane {id}"` where id is auto-incremented
    /// - rows: `20`
    /// - seats_in_row: `6`
    /// - image: `None`
    pub fn new(db: &'a DatabaseConnection, airplane_type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Airplane {}", id),
            rows: 20,
            seats_in_row: 6,
            airplane_type_id,
            image: None,
        }
    }

    /// Sets the airplane name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the number of seat rows.
    pub fn rows(mut self, rows: i32) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the number of seats per row.
    pub fn seats_in_row(mut self, seats_in_row: i32) -> Self {
        self.seats_in_row = seats_in_row;
        self
    }

    /// Builds and inserts the airplane entity into the database.
    pub async fn build(self) -> Result<entity::airplane::Model, DbErr> {
        entity::airplane::ActiveModel {
            name: ActiveValue::Set(self.name),
            rows: ActiveValue::Set(self.rows),
            seats_in_row: ActiveValue::Set(self.seats_in_row),
            airplane_type_id: ActiveValue::Set(self.airplane_type_id),
            image: ActiveValue::Set(self.image),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airplane with default values for the given type.
pub async fn create_airplane(
    db: &DatabaseConnection,
    airplane_type_id: i32,
) -> Result<entity::airplane::Model, DbErr> {
    AirplaneFactory::new(db, airplane_type_id).build().await
}

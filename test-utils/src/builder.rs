use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Add entity tables with `with_table()`, then
/// call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Airport, Route};
///
/// let test = TestBuilder::new()
///     .with_table(Airport)
///     .with_table(Route)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entity models, executed in
    /// the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after all tables exist.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. Tables should be added in dependency
    /// order (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for booking operations.
    ///
    /// This convenience method adds every table in dependency order:
    /// User, Airport, AirplaneType, Airplane, Crew, Route, Flight,
    /// FlightCrew, Order, Ticket — plus the unique seat index on Ticket
    /// that the migration creates in a real database.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_booking_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_booking_tables(mut self) -> Self {
        self.indexes.push(
            Index::create()
                .name("idx_ticket_flight_row_seat")
                .table(entity::ticket::Entity)
                .col(entity::ticket::Column::FlightId)
                .col(entity::ticket::Column::Row)
                .col(entity::ticket::Column::Seat)
                .unique()
                .to_owned(),
        );

        self.with_table(User)
            .with_table(Airport)
            .with_table(AirplaneType)
            .with_table(Airplane)
            .with_table(Crew)
            .with_table(Route)
            .with_table(Flight)
            .with_table(FlightCrew)
            .with_table(Order)
            .with_table(Ticket)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context with schema ready
    /// - `Err(TestError::Database)` - Failed to connect or create schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_schema(self.tables, self.indexes).await?;

        Ok(setup)
    }
}

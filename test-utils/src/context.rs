use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

/// Test context holding the in-memory SQLite database connection.
///
/// The connection is created lazily on first access and persists for the
/// lifetime of the test context.
pub struct TestContext {
    /// Optional database connection to the in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a new empty test context with no database connection.
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Creates database tables and indexes from the provided statements.
    ///
    /// Executes each CREATE TABLE statement in sequence, then each CREATE
    /// INDEX statement. Typically called internally by `TestBuilder::build()`
    /// rather than directly.
    ///
    /// # Arguments
    /// - `tables` - CREATE TABLE statements, in dependency order
    /// - `indexes` - CREATE INDEX statements for tables created above
    ///
    /// # Returns
    /// - `Ok(())` - All schema objects created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more objects
    pub async fn with_schema(
        &mut self,
        tables: Vec<TableCreateStatement>,
        indexes: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in tables {
            db.execute(&stmt).await?;
        }
        for stmt in indexes {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

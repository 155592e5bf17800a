//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories automatically generate unique names and handle
//! foreign key relationships through explicit id arguments.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let airport = factory::airport::create_airport(&db).await?;
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create a flight with every dependency in one call
//!     let (route, airplane, flight) =
//!         factory::helpers::create_flight_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod crew;
pub mod flight;
pub mod helpers;
pub mod order;
pub mod route;
pub mod ticket;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use airplane::create_airplane;
pub use airplane_type::create_airplane_type;
pub use airport::create_airport;
pub use crew::create_crew;
pub use flight::create_flight;
pub use order::create_order;
pub use route::create_route;
pub use ticket::create_ticket;
pub use user::create_user;

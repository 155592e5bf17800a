//! SeaORM entity definitions for the skyport database schema.
//!
//! One module per table. The `prelude` re-exports every entity under its
//! conventional name for use in queries (`entity::prelude::Flight::find()`).

pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod crew;
pub mod flight;
pub mod flight_crew;
pub mod order;
pub mod prelude;
pub mod route;
pub mod ticket;
pub mod user;

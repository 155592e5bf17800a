//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. Parameter types carry
//! operation inputs from controllers into services and repositories.

pub mod airplane;
pub mod flight;
pub mod route;
pub mod ticket;
pub mod user;

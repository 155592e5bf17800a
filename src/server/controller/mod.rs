//! HTTP request handlers, access control, and DTO conversion.
//!
//! Each resource gets its own controller module. Handlers authenticate the
//! request through `AuthGuard`, convert DTOs to parameter types, delegate to
//! services or repositories, and shape the response.

pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod crew;
pub mod flight;
pub mod order;
pub mod param;
pub mod route;
pub mod ticket;
pub mod user;

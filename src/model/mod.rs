//! API data transfer objects.
//!
//! Each resource has up to three shapes: a list shape (minimal, flat), a
//! detail shape (related objects fully nested, read-only), and a
//! create/update shape (related objects referenced by primary key).

pub mod api;
pub mod airplane;
pub mod airport;
pub mod crew;
pub mod flight;
pub mod order;
pub mod route;
pub mod ticket;
pub mod user;

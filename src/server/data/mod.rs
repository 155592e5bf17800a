//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations
//! (CRUD) for each domain in the application. Repositories use SeaORM entity
//! models internally and convert to domain models at the boundary where one
//! exists. All database queries, inserts, updates, and deletes are performed
//! through these repositories, with the exception of the order-creation
//! transaction which runs in the service layer.

pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod crew;
pub mod flight;
pub mod order;
pub mod route;
pub mod ticket;
pub mod user;

#[cfg(test)]
mod test;

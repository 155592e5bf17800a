//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits
//! between the controller (API) layer and the data (repository) layer.
//! Services are responsible for:
//!
//! - **Business Logic**: Seat validation, departure cutoffs, credential rules
//! - **Orchestration**: Coordinating repository calls and DTO assembly
//! - **Transaction Management**: The all-or-nothing order creation

pub mod flight;
pub mod order;
pub mod ticket;
pub mod user;

#[cfg(test)]
mod test;

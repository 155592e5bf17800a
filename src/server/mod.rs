//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the booking
//! service, including API endpoints, business logic, data access, and
//! infrastructure. The backend uses Axum as the web framework and SeaORM for
//! database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token authentication guard
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, auth config)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Media** (`media`) - Storage paths for uploaded assets
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** authenticates through `AuthGuard`, converts DTOs to
//!    params, calls a service or repository
//! 3. **Service** executes business logic and validation
//! 4. **Data** queries the database
//! 5. **Controller** shapes the result into a response DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod media;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

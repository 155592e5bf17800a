//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a flight together with all its reference-data dependencies.
///
/// This is a convenience method that creates:
/// 1. Two airports (source and destination)
/// 2. A route between them
/// 3. An airplane type and an airplane (20 rows x 6 seats)
/// 4. A flight departing one day from now
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((route, airplane, flight))` - The created route, airplane and flight
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::route::Model,
        entity::airplane::Model,
        entity::flight::Model,
    ),
    DbErr,
> {
    let source = crate::factory::airport::create_airport(db).await?;
    let destination = crate::factory::airport::create_airport(db).await?;
    let route = crate::factory::route::create_route(db, source.id, destination.id).await?;
    let airplane_type = crate::factory::airplane_type::create_airplane_type(db).await?;
    let airplane = crate::factory::airplane::create_airplane(db, airplane_type.id).await?;
    let flight = crate::factory::flight::create_flight(db, route.id, airplane.id).await?;

    Ok((route, airplane, flight))
}

/// Creates a user together with an order owned by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, order))` - The created user and order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::order::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let order = crate::factory::order::create_order(db, user.id).await?;

    Ok((user, order))
}

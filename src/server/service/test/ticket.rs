use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory, factory::flight::FlightFactory};

use crate::server::{
    error::{validation::ValidationError, AppError},
    model::ticket::CreateTicketParams,
    service::ticket::{validate_seat_bounds, TicketService},
};

fn airplane_fixture(rows: i32, seats_in_row: i32) -> entity::airplane::Model {
    entity::airplane::Model {
        id: 1,
        name: "Boeing".to_string(),
        rows,
        seats_in_row,
        airplane_type_id: 1,
        image: None,
    }
}

#[test]
fn accepts_seats_inside_the_grid() {
    let airplane = airplane_fixture(20, 6);

    assert!(validate_seat_bounds(1, 1, &airplane).is_ok());
    assert!(validate_seat_bounds(20, 6, &airplane).is_ok());
}

#[test]
fn rejects_row_outside_range_with_field_error() {
    let airplane = airplane_fixture(20, 6);

    let err = validate_seat_bounds(21, 1, &airplane).unwrap_err();

    match err {
        ValidationError::Field { field, message } => {
            assert_eq!(field, "row");
            assert!(message.contains("(1, 20)"));
        }
        other => panic!("expected field error, got {:?}", other),
    }
}

#[test]
fn rejects_seat_outside_range_with_field_error() {
    let airplane = airplane_fixture(20, 6);

    let err = validate_seat_bounds(1, 0, &airplane).unwrap_err();

    match err {
        ValidationError::Field { field, message } => {
            assert_eq!(field, "seat");
            assert!(message.contains("(1, 6)"));
        }
        other => panic!("expected field error, got {:?}", other),
    }
}

/// Tests that creating a ticket on a departed flight fails with an
/// object-level validation error.
#[tokio::test]
async fn rejects_ticket_on_departed_flight() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, airplane, _flight) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .unwrap();
    let departed = FlightFactory::new(db, route.id, airplane.id)
        .departure_time(Utc::now() - Duration::hours(1))
        .build()
        .await
        .unwrap();
    let (_user, order) = factory::helpers::create_order_with_owner(db).await.unwrap();

    let result = TicketService::new(db)
        .create(CreateTicketParams {
            row: 1,
            seat: 1,
            flight_id: departed.id,
            order_id: order.id,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::Object(_)))
    ));
}

/// Tests that a duplicate seat surfaces as a conflict, not a validation
/// failure or an opaque database error.
#[tokio::test]
async fn duplicate_seat_is_a_conflict() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_route, _airplane, flight) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .unwrap();
    let (_user, order) = factory::helpers::create_order_with_owner(db).await.unwrap();

    let service = TicketService::new(db);
    let params = CreateTicketParams {
        row: 2,
        seat: 3,
        flight_id: flight.id,
        order_id: order.id,
    };

    service.create(params.clone()).await.unwrap();
    let second = service.create(params).await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
}

/// Tests that updating a ticket re-runs the bounds validation.
#[tokio::test]
async fn update_rechecks_seat_bounds() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_route, _airplane, flight) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .unwrap();
    let (_user, order) = factory::helpers::create_order_with_owner(db).await.unwrap();

    let service = TicketService::new(db);
    let created = service
        .create(CreateTicketParams {
            row: 1,
            seat: 1,
            flight_id: flight.id,
            order_id: order.id,
        })
        .await
        .unwrap();

    // Factory airplane has 20 rows; 99 is far out of range
    let result = service
        .update(
            created.id,
            CreateTicketParams {
                row: 99,
                seat: 1,
                flight_id: flight.id,
                order_id: order.id,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::Field { .. }))
    ));
}

/// Tests that a dangling flight reference is a field-keyed validation
/// failure rather than a 404.
#[tokio::test]
async fn dangling_flight_reference_fails_validation() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, order) = factory::helpers::create_order_with_owner(db).await.unwrap();

    let result = TicketService::new(db)
        .create(CreateTicketParams {
            row: 1,
            seat: 1,
            flight_id: 999_999,
            order_id: order.id,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::Field { .. }))
    ));
}

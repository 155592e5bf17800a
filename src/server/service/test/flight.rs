use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{validation::ValidationError, AppError},
    model::flight::{CreateFlightParams, FlightFilters},
    service::flight::FlightService,
};

/// Tests the available-seats computation before and after bookings.
///
/// A 20 x 6 airplane starts at 120 available seats; three bookings bring it
/// down to 117.
#[tokio::test]
async fn available_seats_shrinks_with_bookings() {
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

    let service = FlightService::new(db);

    let before = service.available_seats(flight.id).await.unwrap().unwrap();
    assert_eq!(before.available_seats, 120);

    for seat in 1..=3 {
        factory::create_ticket(db, flight.id, order.id, 1, seat)
            .await
            .unwrap();
    }

    let after = service.available_seats(flight.id).await.unwrap().unwrap();
    assert_eq!(after.available_seats, 117);
}

/// Tests that an unknown flight yields None rather than an error.
#[tokio::test]
async fn available_seats_for_unknown_flight_is_none() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FlightService::new(db).available_seats(999_999).await.unwrap();

    assert!(result.is_none());
}

/// Tests creating a flight through the service and reading the expanded
/// detail shape back.
#[tokio::test]
async fn creates_flight_and_expands_detail() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, airplane, _existing) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .unwrap();
    let crew = factory::create_crew(db).await.unwrap();

    let departure_time = Utc::now() + Duration::days(2);
    let detail = FlightService::new(db)
        .create(CreateFlightParams {
            route_id: route.id,
            airplane_id: airplane.id,
            departure_time,
            arrival_time: departure_time + Duration::hours(3),
            crew: vec![crew.id],
        })
        .await
        .unwrap();

    assert_eq!(detail.route.id, route.id);
    assert_eq!(detail.route.source.id, route.source_id);
    assert_eq!(detail.airplane.id, airplane.id);
    assert_eq!(detail.crew.len(), 1);
    assert_eq!(detail.crew[0].id, crew.id);
}

/// Tests that dangling references fail with a field-keyed error naming the
/// offending relation.
#[tokio::test]
async fn create_rejects_unknown_crew_member() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, airplane, _flight) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .unwrap();

    let departure_time = Utc::now() + Duration::days(2);
    let result = FlightService::new(db)
        .create(CreateFlightParams {
            route_id: route.id,
            airplane_id: airplane.id,
            departure_time,
            arrival_time: departure_time + Duration::hours(3),
            crew: vec![999_999],
        })
        .await;

    match result {
        Err(AppError::ValidationErr(ValidationError::Field { field, .. })) => {
            assert_eq!(field, "crew");
        }
        other => panic!("expected crew field error, got {:?}", other.err()),
    }
}

/// Tests the list shape and route filter through the service.
#[tokio::test]
async fn lists_flights_with_route_filter() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (route_a, _airplane_a, flight_a) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .unwrap();
    let (_route_b, _airplane_b, _flight_b) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .unwrap();

    let flights = FlightService::new(db)
        .list(&FlightFilters {
            route_id: Some(route_a.id),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].id, flight_a.id);
    assert_eq!(flights[0].route, route_a.id);
}

/// Tests that deleting a flight takes its tickets with it.
#[tokio::test]
async fn delete_cascades_to_tickets() {
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
    factory::create_ticket(db, flight.id, order.id, 1, 1)
        .await
        .unwrap();

    let deleted = FlightService::new(db).delete(flight.id).await.unwrap();
    assert!(deleted);

    use sea_orm::{EntityTrait, PaginatorTrait};
    assert_eq!(entity::prelude::Ticket::find().count(db).await.unwrap(), 0);
}

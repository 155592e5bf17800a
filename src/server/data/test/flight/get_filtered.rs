use super::*;
use chrono::NaiveDate;
use test_utils::factory::flight::FlightFactory;

/// Tests that an empty filter set returns all flights ordered by departure.
#[tokio::test]
async fn returns_all_flights_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, airplane, first) = factory::helpers::create_flight_with_dependencies(db).await?;
    let later = FlightFactory::new(db, route.id, airplane.id)
        .departure_time(first.departure_time + Duration::days(3))
        .build()
        .await?;

    let flights = FlightRepository::new(db)
        .get_filtered(&FlightFilters::default())
        .await?;

    let ids: Vec<i32> = flights.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![first.id, later.id]);

    Ok(())
}

/// Tests the calendar-day filter against the departure timestamp.
#[tokio::test]
async fn filters_by_departure_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, airplane, _flight) = factory::helpers::create_flight_with_dependencies(db).await?;

    let target_day = NaiveDate::from_ymd_opt(2030, 6, 10).unwrap();
    let on_day = FlightFactory::new(db, route.id, airplane.id)
        .departure_time(
            target_day
                .and_hms_opt(10, 0, 0)
                .unwrap()
                .and_utc(),
        )
        .build()
        .await?;
    // Same route, one day later
    FlightFactory::new(db, route.id, airplane.id)
        .departure_time(
            target_day
                .succ_opt()
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
                .and_utc(),
        )
        .build()
        .await?;

    let flights = FlightRepository::new(db)
        .get_filtered(&FlightFilters {
            date: Some(target_day),
            ..Default::default()
        })
        .await?;

    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].id, on_day.id);

    Ok(())
}

/// Tests that route and airplane filters compose with AND.
#[tokio::test]
async fn combines_route_and_airplane_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (route_a, airplane_a, flight_a) =
        factory::helpers::create_flight_with_dependencies(db).await?;
    let (route_b, _airplane_b, _flight_b) =
        factory::helpers::create_flight_with_dependencies(db).await?;

    // Same route as A but a different airplane should not match both filters
    FlightFactory::new(db, route_b.id, airplane_a.id).build().await?;

    let flights = FlightRepository::new(db)
        .get_filtered(&FlightFilters {
            date: None,
            route_id: Some(route_a.id),
            airplane_id: Some(airplane_a.id),
        })
        .await?;

    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].id, flight_a.id);

    Ok(())
}

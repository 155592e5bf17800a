use super::*;

/// Tests creating a flight without crew.
///
/// Expected: Ok with flight row referencing the given route and airplane
#[tokio::test]
async fn creates_flight_without_crew() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, airplane, _flight) = factory::helpers::create_flight_with_dependencies(db).await?;

    let departure_time = Utc::now() + Duration::days(2);
    let repo = FlightRepository::new(db);
    let flight = repo
        .create(CreateFlightParams {
            route_id: route.id,
            airplane_id: airplane.id,
            departure_time,
            arrival_time: departure_time + Duration::hours(3),
            crew: Vec::new(),
        })
        .await?;

    assert_eq!(flight.route_id, route.id);
    assert_eq!(flight.airplane_id, airplane.id);
    assert_eq!(flight.departure_time, departure_time);
    assert!(repo.get_crew(flight.id).await?.is_empty());

    Ok(())
}

/// Tests creating a flight with crew assignments.
///
/// Expected: Ok with every crew member retrievable through the join table
#[tokio::test]
async fn creates_flight_with_crew() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, airplane, _flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    let crew1 = factory::create_crew(db).await?;
    let crew2 = factory::create_crew(db).await?;

    let departure_time = Utc::now() + Duration::days(2);
    let repo = FlightRepository::new(db);
    let flight = repo
        .create(CreateFlightParams {
            route_id: route.id,
            airplane_id: airplane.id,
            departure_time,
            arrival_time: departure_time + Duration::hours(3),
            crew: vec![crew1.id, crew2.id],
        })
        .await?;

    let assigned = repo.get_crew(flight.id).await?;
    let mut assigned_ids: Vec<i32> = assigned.iter().map(|c| c.id).collect();
    assigned_ids.sort();
    let mut expected = vec![crew1.id, crew2.id];
    expected.sort();

    assert_eq!(assigned_ids, expected);

    Ok(())
}

/// Tests foreign key enforcement for a nonexistent route.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_route() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_route, airplane, _flight) = factory::helpers::create_flight_with_dependencies(db).await?;

    let departure_time = Utc::now() + Duration::days(2);
    let result = FlightRepository::new(db)
        .create(CreateFlightParams {
            route_id: 999_999,
            airplane_id: airplane.id,
            departure_time,
            arrival_time: departure_time + Duration::hours(3),
            crew: Vec::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

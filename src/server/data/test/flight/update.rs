use super::*;

/// Tests that updating a flight replaces its crew set wholesale.
#[tokio::test]
async fn replaces_crew_on_update() -> Result<(), DbErr> {
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
            crew: vec![crew1.id],
        })
        .await?;

    repo.update(
        flight.id,
        CreateFlightParams {
            route_id: route.id,
            airplane_id: airplane.id,
            departure_time,
            arrival_time: departure_time + Duration::hours(5),
            crew: vec![crew2.id],
        },
    )
    .await?;

    let assigned = repo.get_crew(flight.id).await?;
    let assigned_ids: Vec<i32> = assigned.iter().map(|c| c.id).collect();

    assert_eq!(assigned_ids, vec![crew2.id]);

    Ok(())
}

/// Tests updating an unknown flight.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, airplane, _flight) = factory::helpers::create_flight_with_dependencies(db).await?;

    let departure_time = Utc::now() + Duration::days(2);
    let result = FlightRepository::new(db)
        .update(
            999_999,
            CreateFlightParams {
                route_id: route.id,
                airplane_id: airplane.id,
                departure_time,
                arrival_time: departure_time + Duration::hours(3),
                crew: Vec::new(),
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

use super::*;

/// Tests narrowing the ticket listing by flight and by order.
#[tokio::test]
async fn filters_by_flight_and_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_r1, _a1, flight1) = factory::helpers::create_flight_with_dependencies(db).await?;
    let (_r2, _a2, flight2) = factory::helpers::create_flight_with_dependencies(db).await?;
    let (_user1, order1) = factory::helpers::create_order_with_owner(db).await?;
    let (_user2, order2) = factory::helpers::create_order_with_owner(db).await?;

    factory::create_ticket(db, flight1.id, order1.id, 1, 1).await?;
    factory::create_ticket(db, flight1.id, order2.id, 2, 2).await?;
    factory::create_ticket(db, flight2.id, order1.id, 3, 3).await?;

    let repo = TicketRepository::new(db);

    let by_flight = repo.get_filtered(Some(flight1.id), None).await?;
    assert_eq!(by_flight.len(), 2);

    let by_order = repo.get_filtered(None, Some(order1.id)).await?;
    assert_eq!(by_order.len(), 2);

    let by_both = repo.get_filtered(Some(flight1.id), Some(order1.id)).await?;
    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].row, 1);

    Ok(())
}

/// Tests that unfiltered listings order by (flight, row, seat).
#[tokio::test]
async fn orders_by_flight_row_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_route, _airplane, flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    let (_user, order) = factory::helpers::create_order_with_owner(db).await?;

    factory::create_ticket(db, flight.id, order.id, 2, 1).await?;
    factory::create_ticket(db, flight.id, order.id, 1, 2).await?;
    factory::create_ticket(db, flight.id, order.id, 1, 1).await?;

    let tickets = TicketRepository::new(db).get_filtered(None, None).await?;
    let seats: Vec<(i32, i32)> = tickets.iter().map(|t| (t.row, t.seat)).collect();

    assert_eq!(seats, vec![(1, 1), (1, 2), (2, 1)]);

    Ok(())
}

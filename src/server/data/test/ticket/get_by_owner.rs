use super::*;

/// Tests that the owner join collects tickets across all of a user's orders
/// and never leaks another user's tickets.
#[tokio::test]
async fn collects_tickets_across_own_orders_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_route, _airplane, flight) = factory::helpers::create_flight_with_dependencies(db).await?;

    let (owner, first_order) = factory::helpers::create_order_with_owner(db).await?;
    let second_order = factory::create_order(db, owner.id).await?;
    let (_other, other_order) = factory::helpers::create_order_with_owner(db).await?;

    factory::create_ticket(db, flight.id, first_order.id, 1, 1).await?;
    factory::create_ticket(db, flight.id, second_order.id, 2, 2).await?;
    factory::create_ticket(db, flight.id, other_order.id, 3, 3).await?;

    let tickets = TicketRepository::new(db).get_by_owner(owner.id).await?;
    let order_ids: Vec<i32> = tickets.iter().map(|t| t.order_id).collect();

    assert_eq!(tickets.len(), 2);
    assert!(order_ids.contains(&first_order.id));
    assert!(order_ids.contains(&second_order.id));
    assert!(!order_ids.contains(&other_order.id));

    Ok(())
}

/// Tests the per-flight ticket count used by the seat availability math.
#[tokio::test]
async fn counts_tickets_per_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_r1, _a1, flight1) = factory::helpers::create_flight_with_dependencies(db).await?;
    let (_r2, _a2, flight2) = factory::helpers::create_flight_with_dependencies(db).await?;
    let (_user, order) = factory::helpers::create_order_with_owner(db).await?;

    factory::create_ticket(db, flight1.id, order.id, 1, 1).await?;
    factory::create_ticket(db, flight1.id, order.id, 1, 2).await?;

    let repo = TicketRepository::new(db);
    assert_eq!(repo.count_by_flight(flight1.id).await?, 2);
    assert_eq!(repo.count_by_flight(flight2.id).await?, 0);

    Ok(())
}

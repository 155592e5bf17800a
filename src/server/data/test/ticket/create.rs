use super::*;

/// Tests inserting a ticket.
#[tokio::test]
async fn creates_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_route, _airplane, flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    let (_user, order) = factory::helpers::create_order_with_owner(db).await?;

    let ticket = TicketRepository::new(db)
        .create(CreateTicketParams {
            row: 3,
            seat: 4,
            flight_id: flight.id,
            order_id: order.id,
        })
        .await?;

    assert_eq!(ticket.row, 3);
    assert_eq!(ticket.seat, 4);
    assert_eq!(ticket.flight_id, flight.id);
    assert_eq!(ticket.order_id, order.id);

    Ok(())
}

/// Tests the unique seat index: a second ticket for the same
/// (flight, row, seat) triple fails and the first remains untouched.
#[tokio::test]
async fn rejects_duplicate_seat_on_same_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_route, _airplane, flight) = factory::helpers::create_flight_with_dependencies(db).await?;
    let (_user, order) = factory::helpers::create_order_with_owner(db).await?;

    let repo = TicketRepository::new(db);
    let first = repo
        .create(CreateTicketParams {
            row: 1,
            seat: 1,
            flight_id: flight.id,
            order_id: order.id,
        })
        .await?;

    let second = repo
        .create(CreateTicketParams {
            row: 1,
            seat: 1,
            flight_id: flight.id,
            order_id: order.id,
        })
        .await;

    assert!(second.is_err());
    assert_eq!(repo.find_by_id(first.id).await?, Some(first));

    Ok(())
}

/// Tests that the same seat on a different flight is allowed.
#[tokio::test]
async fn allows_same_seat_on_different_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_route1, _airplane1, flight1) =
        factory::helpers::create_flight_with_dependencies(db).await?;
    let (_route2, _airplane2, flight2) =
        factory::helpers::create_flight_with_dependencies(db).await?;
    let (_user, order) = factory::helpers::create_order_with_owner(db).await?;

    let repo = TicketRepository::new(db);
    repo.create(CreateTicketParams {
        row: 1,
        seat: 1,
        flight_id: flight1.id,
        order_id: order.id,
    })
    .await?;

    let result = repo
        .create(CreateTicketParams {
            row: 1,
            seat: 1,
            flight_id: flight2.id,
            order_id: order.id,
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}

use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::{ticket::TicketSpec, user::User},
    service::order::OrderService,
};

/// Tests the happy path: an order with two tickets persists both.
#[tokio::test]
async fn creates_order_with_all_tickets() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_route, _airplane, flight) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .unwrap();
    let user_row = factory::create_user(db).await.unwrap();
    let user = User::from_entity(user_row);

    let order = OrderService::new(db)
        .create(
            &user,
            vec![
                TicketSpec {
                    row: 1,
                    seat: 1,
                    flight_id: flight.id,
                },
                TicketSpec {
                    row: 1,
                    seat: 2,
                    flight_id: flight.id,
                },
            ],
        )
        .await
        .unwrap();

    assert_eq!(order.user.id, user.id);
    assert_eq!(order.tickets.len(), 2);
}

/// Tests atomicity: when the second ticket fails validation, neither the
/// order nor the first ticket survives.
#[tokio::test]
async fn rolls_back_everything_when_one_ticket_fails() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_route, _airplane, flight) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .unwrap();
    let user_row = factory::create_user(db).await.unwrap();
    let user = User::from_entity(user_row);

    let result = OrderService::new(db)
        .create(
            &user,
            vec![
                TicketSpec {
                    row: 1,
                    seat: 1,
                    flight_id: flight.id,
                },
                // Factory airplane has 20 rows
                TicketSpec {
                    row: 99,
                    seat: 1,
                    flight_id: flight.id,
                },
            ],
        )
        .await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));
    assert_eq!(entity::prelude::Order::find().count(db).await.unwrap(), 0);
    assert_eq!(entity::prelude::Ticket::find().count(db).await.unwrap(), 0);
}

/// Tests that two tickets in one request naming the same seat abort the
/// whole order with a conflict.
#[tokio::test]
async fn rolls_back_on_duplicate_seat_within_request() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_route, _airplane, flight) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .unwrap();
    let user_row = factory::create_user(db).await.unwrap();
    let user = User::from_entity(user_row);

    let spec = TicketSpec {
        row: 1,
        seat: 1,
        flight_id: flight.id,
    };
    let result = OrderService::new(db)
        .create(&user, vec![spec.clone(), spec])
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(entity::prelude::Order::find().count(db).await.unwrap(), 0);
    assert_eq!(entity::prelude::Ticket::find().count(db).await.unwrap(), 0);
}

/// Tests that listing pages are scoped to the caller and sized as asked.
#[tokio::test]
async fn lists_own_orders_paginated() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner_row = factory::create_user(db).await.unwrap();
    let other_row = factory::create_user(db).await.unwrap();
    for _ in 0..12 {
        factory::create_order(db, owner_row.id).await.unwrap();
    }
    factory::create_order(db, other_row.id).await.unwrap();

    let page = OrderService::new(db)
        .list(owner_row.id, 0, 10)
        .await
        .unwrap();

    assert_eq!(page.total, 12);
    assert_eq!(page.orders.len(), 10);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.per_page, 10);
}

/// Tests that foreign orders are indistinguishable from missing ones.
#[tokio::test]
async fn detail_hides_foreign_orders() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner_row, order) = factory::helpers::create_order_with_owner(db).await.unwrap();
    let other_row = factory::create_user(db).await.unwrap();

    let service = OrderService::new(db);
    let owner = User::from_entity(owner_row);
    let other = User::from_entity(other_row);

    assert!(service.get_detail(order.id, &owner).await.unwrap().is_some());
    assert!(service.get_detail(order.id, &other).await.unwrap().is_none());
}

/// Tests the flat cross-order ticket view.
#[tokio::test]
async fn my_tickets_spans_all_orders() {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_route, _airplane, flight) = factory::helpers::create_flight_with_dependencies(db)
        .await
        .unwrap();
    let (owner_row, first_order) = factory::helpers::create_order_with_owner(db).await.unwrap();
    let second_order = factory::create_order(db, owner_row.id).await.unwrap();

    factory::create_ticket(db, flight.id, first_order.id, 1, 1)
        .await
        .unwrap();
    factory::create_ticket(db, flight.id, second_order.id, 2, 2)
        .await
        .unwrap();

    let tickets = OrderService::new(db).my_tickets(owner_row.id).await.unwrap();

    assert_eq!(tickets.len(), 2);
}

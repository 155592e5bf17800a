use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, OrderDetailDto, PaginatedOrdersDto},
        ticket::TicketListDto,
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::AuthGuard,
        model::ticket::TicketSpec,
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// List the caller's own orders, newest first, paginated.
///
/// The ownership filter is implicit and unconditional; no query parameter
/// can widen it.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Page size (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "One page of the caller's orders", body = PaginatedOrdersDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let orders = OrderService::new(&state.db)
        .list(user.id, pagination.page, pagination.effective_per_page())
        .await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// Create an order booking one or more seats, atomically.
///
/// Every embedded ticket must validate; otherwise neither the order nor any
/// ticket persists. The order owner is always the caller.
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order created with all tickets", body = OrderDetailDto),
        (status = 400, description = "A ticket failed validation", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "A requested seat is already booked", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let specs: Vec<TicketSpec> = payload.tickets.into_iter().map(TicketSpec::from_dto).collect();

    let order = OrderService::new(&state.db).create(&user, specs).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Every ticket across all of the caller's orders, as one flat list.
#[utoipa::path(
    get,
    path = "/api/orders/my_tickets",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "The caller's tickets", body = Vec<TicketListDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn my_tickets(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let tickets = OrderService::new(&state.db).my_tickets(user.id).await?;

    Ok((StatusCode::OK, Json(tickets)))
}

/// Retrieve one of the caller's orders with its tickets.
///
/// Orders owned by other users are reported as not found.
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "The order", body = OrderDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found or not owned by caller", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let order = OrderService::new(&state.db)
        .get_detail(id, &user)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok((StatusCode::OK, Json(order)))
}

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        ticket::{CreateTicketDto, TicketDetailDto, TicketListDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::ticket::CreateTicketParams,
        service::ticket::TicketService,
        state::AppState,
    },
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ticket";

#[derive(Deserialize)]
pub struct TicketListQuery {
    pub flight: Option<i32>,
    pub order: Option<i32>,
}

/// List tickets, optionally filtered by flight and order. Admin only.
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = TICKET_TAG,
    params(
        ("flight" = Option<i32>, Query, description = "Filter by flight ID"),
        ("order" = Option<i32>, Query, description = "Filter by order ID")
    ),
    responses(
        (status = 200, description = "Matching tickets", body = Vec<TicketListDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto)
    ),
)]
pub async fn get_tickets(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<TicketListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let tickets = TicketService::new(&state.db)
        .list(query.flight, query.order)
        .await?;

    Ok((StatusCode::OK, Json(tickets)))
}

/// Create a ticket directly on an existing order. Admin only.
#[utoipa::path(
    post,
    path = "/api/tickets",
    tag = TICKET_TAG,
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created", body = TicketListDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 409, description = "Seat already booked", body = ErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let ticket = TicketService::new(&state.db)
        .create(CreateTicketParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

/// Retrieve one ticket with its flight expanded. Admin only.
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "The ticket", body = TicketDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let ticket = TicketService::new(&state.db)
        .get_detail(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

    Ok((StatusCode::OK, Json(ticket)))
}

/// Update a ticket; seat validation re-runs in full. Admin only.
#[utoipa::path(
    put,
    path = "/api/tickets/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = CreateTicketDto,
    responses(
        (status = 200, description = "Ticket updated", body = TicketListDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 409, description = "Seat already booked", body = ErrorDto)
    ),
)]
pub async fn update_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let ticket = TicketService::new(&state.db)
        .update(id, CreateTicketParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(ticket)))
}

/// Delete a ticket. Admin only.
#[utoipa::path(
    delete,
    path = "/api/tickets/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 204, description = "Ticket deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto)
    ),
)]
pub async fn delete_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let deleted = TicketService::new(&state.db).delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Ticket not found".to_string()))
    }
}

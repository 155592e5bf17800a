use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        airport::{AirportDto, CreateAirportDto},
        api::ErrorDto,
    },
    server::{
        data::airport::AirportRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
    },
};

/// Tag for grouping airport endpoints in OpenAPI documentation
pub static AIRPORT_TAG: &str = "airport";

fn to_dto(airport: entity::airport::Model) -> AirportDto {
    AirportDto {
        id: airport.id,
        name: airport.name,
        closest_big_city: airport.closest_big_city,
    }
}

/// List all airports. Admin only.
#[utoipa::path(
    get,
    path = "/api/airports",
    tag = AIRPORT_TAG,
    responses(
        (status = 200, description = "All airports ordered by name", body = Vec<AirportDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto)
    ),
)]
pub async fn get_airports(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let airports = AirportRepository::new(&state.db).get_all().await?;
    let dtos: Vec<AirportDto> = airports.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new airport. Admin only.
#[utoipa::path(
    post,
    path = "/api/airports",
    tag = AIRPORT_TAG,
    request_body = CreateAirportDto,
    responses(
        (status = 201, description = "Airport created", body = AirportDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto)
    ),
)]
pub async fn create_airport(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAirportDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let airport = AirportRepository::new(&state.db)
        .create(payload.name, payload.closest_big_city)
        .await?;

    Ok((StatusCode::CREATED, Json(to_dto(airport))))
}

/// Retrieve one airport. Admin only.
#[utoipa::path(
    get,
    path = "/api/airports/{id}",
    tag = AIRPORT_TAG,
    params(("id" = i32, Path, description = "Airport ID")),
    responses(
        (status = 200, description = "The airport", body = AirportDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Airport not found", body = ErrorDto)
    ),
)]
pub async fn get_airport(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let airport = AirportRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Airport not found".to_string()))?;

    Ok((StatusCode::OK, Json(to_dto(airport))))
}

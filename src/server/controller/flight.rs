use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        flight::{AvailableSeatsDto, CreateFlightDto, FlightDetailDto, FlightListDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::flight::{CreateFlightParams, FlightFilters},
        service::flight::FlightService,
        state::AppState,
    },
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

/// Optional flight listing filters as they arrive on the query string.
#[derive(Deserialize)]
pub struct FlightListQuery {
    /// Calendar day in `YYYY-MM-DD` form.
    pub date: Option<String>,
    pub route: Option<i32>,
    pub airplane: Option<i32>,
}

impl FlightListQuery {
    /// Parses the raw query into typed filters.
    ///
    /// # Returns
    /// - `Ok(FlightFilters)` - Parsed filters (all optional)
    /// - `Err(AppError::BadRequest)` - Malformed `date` value
    fn into_filters(self) -> Result<FlightFilters, AppError> {
        let date = match self.date {
            Some(raw) => Some(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                AppError::BadRequest(format!(
                    "Invalid date '{}', expected YYYY-MM-DD",
                    raw
                ))
            })?),
            None => None,
        };

        Ok(FlightFilters {
            date,
            route_id: self.route,
            airplane_id: self.airplane,
        })
    }
}

/// List flights, optionally filtered by date, route and airplane. Admin only.
#[utoipa::path(
    get,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    params(
        ("date" = Option<String>, Query, description = "Filter by departure date (YYYY-MM-DD)"),
        ("route" = Option<i32>, Query, description = "Filter by route ID"),
        ("airplane" = Option<i32>, Query, description = "Filter by airplane ID")
    ),
    responses(
        (status = 200, description = "Matching flights ordered by departure", body = Vec<FlightListDto>),
        (status = 400, description = "Malformed filter value", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto)
    ),
)]
pub async fn get_flights(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<FlightListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let filters = query.into_filters()?;
    let flights = FlightService::new(&state.db).list(&filters).await?;

    Ok((StatusCode::OK, Json(flights)))
}

/// Create a new flight. Admin only.
#[utoipa::path(
    post,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    request_body = CreateFlightDto,
    responses(
        (status = 201, description = "Flight created", body = FlightDetailDto),
        (status = 400, description = "Unknown route/airplane/crew id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto)
    ),
)]
pub async fn create_flight(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let flight = FlightService::new(&state.db)
        .create(CreateFlightParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(flight)))
}

/// Retrieve one flight with route, airplane and crew expanded. Admin only.
#[utoipa::path(
    get,
    path = "/api/flights/{id}",
    tag = FLIGHT_TAG,
    params(("id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "The flight", body = FlightDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto)
    ),
)]
pub async fn get_flight(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let flight = FlightService::new(&state.db)
        .get_detail(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Flight not found".to_string()))?;

    Ok((StatusCode::OK, Json(flight)))
}

/// Update a flight, replacing its crew set. Admin only.
#[utoipa::path(
    put,
    path = "/api/flights/{id}",
    tag = FLIGHT_TAG,
    params(("id" = i32, Path, description = "Flight ID")),
    request_body = CreateFlightDto,
    responses(
        (status = 200, description = "Flight updated", body = FlightDetailDto),
        (status = 400, description = "Unknown route/airplane/crew id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto)
    ),
)]
pub async fn update_flight(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let flight = FlightService::new(&state.db)
        .update(id, CreateFlightParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(flight)))
}

/// Delete a flight. Admin only. Dependent tickets cascade.
#[utoipa::path(
    delete,
    path = "/api/flights/{id}",
    tag = FLIGHT_TAG,
    params(("id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 204, description = "Flight deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto)
    ),
)]
pub async fn delete_flight(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let deleted = FlightService::new(&state.db).delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Flight not found".to_string()))
    }
}

/// Remaining seat count for a flight.
///
/// Unlike the rest of the flight endpoints this is open to any authenticated
/// user, admin or not.
#[utoipa::path(
    get,
    path = "/api/flights/{id}/available_seats",
    tag = FLIGHT_TAG,
    params(("id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Seats still available", body = AvailableSeatsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto)
    ),
)]
pub async fn available_seats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let available = FlightService::new(&state.db)
        .available_seats(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Flight not found".to_string()))?;

    Ok((StatusCode::OK, Json(available)))
}

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        route::{CreateRouteDto, RouteDto},
    },
    server::{
        data::{airport::AirportRepository, route::RouteRepository},
        error::{validation::ValidationError, AppError},
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
    },
};

/// Tag for grouping route endpoints in OpenAPI documentation
pub static ROUTE_TAG: &str = "route";

/// List all routes with their airports expanded. Admin only.
#[utoipa::path(
    get,
    path = "/api/routes",
    tag = ROUTE_TAG,
    responses(
        (status = 200, description = "All routes", body = Vec<RouteDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto)
    ),
)]
pub async fn get_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let routes = RouteRepository::new(&state.db).get_all_with_airports().await?;
    let dtos: Vec<RouteDto> = routes.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new route between two existing airports. Admin only.
///
/// Source and destination may name the same airport; the original system
/// accepts degenerate routes and so does this one.
#[utoipa::path(
    post,
    path = "/api/routes",
    tag = ROUTE_TAG,
    request_body = CreateRouteDto,
    responses(
        (status = 201, description = "Route created", body = RouteDto),
        (status = 400, description = "Unknown airport id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto)
    ),
)]
pub async fn create_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRouteDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let airport_repo = AirportRepository::new(&state.db);
    if airport_repo.find_by_id(payload.source).await?.is_none() {
        return Err(ValidationError::field("source", "airport does not exist").into());
    }
    if airport_repo.find_by_id(payload.destination).await?.is_none() {
        return Err(ValidationError::field("destination", "airport does not exist").into());
    }

    let route_repo = RouteRepository::new(&state.db);
    let route = route_repo
        .create(payload.source, payload.destination, payload.distance)
        .await?;

    let dto = route_repo
        .find_by_id_with_airports(route.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Route not found after creation".to_string()))?
        .into_dto();

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Retrieve one route with its airports expanded. Admin only.
#[utoipa::path(
    get,
    path = "/api/routes/{id}",
    tag = ROUTE_TAG,
    params(("id" = i32, Path, description = "Route ID")),
    responses(
        (status = 200, description = "The route", body = RouteDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto)
    ),
)]
pub async fn get_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let route = RouteRepository::new(&state.db)
        .find_by_id_with_airports(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Route not found".to_string()))?;

    Ok((StatusCode::OK, Json(route.into_dto())))
}

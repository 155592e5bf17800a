use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        airplane::{AirplaneTypeDto, CreateAirplaneTypeDto},
        api::ErrorDto,
    },
    server::{
        data::airplane_type::AirplaneTypeRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
    },
};

/// Tag for grouping airplane type endpoints in OpenAPI documentation
pub static AIRPLANE_TYPE_TAG: &str = "airplane_type";

fn to_dto(airplane_type: entity::airplane_type::Model) -> AirplaneTypeDto {
    AirplaneTypeDto {
        id: airplane_type.id,
        name: airplane_type.name,
    }
}

/// List all airplane types. Admin only.
#[utoipa::path(
    get,
    path = "/api/airplane-types",
    tag = AIRPLANE_TYPE_TAG,
    responses(
        (status = 200, description = "All airplane types ordered by name", body = Vec<AirplaneTypeDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto)
    ),
)]
pub async fn get_airplane_types(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let types = AirplaneTypeRepository::new(&state.db).get_all().await?;
    let dtos: Vec<AirplaneTypeDto> = types.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new airplane type. Admin only.
#[utoipa::path(
    post,
    path = "/api/airplane-types",
    tag = AIRPLANE_TYPE_TAG,
    request_body = CreateAirplaneTypeDto,
    responses(
        (status = 201, description = "Airplane type created", body = AirplaneTypeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto)
    ),
)]
pub async fn create_airplane_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAirplaneTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let airplane_type = AirplaneTypeRepository::new(&state.db)
        .create(payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(to_dto(airplane_type))))
}

/// Retrieve one airplane type. Admin only.
#[utoipa::path(
    get,
    path = "/api/airplane-types/{id}",
    tag = AIRPLANE_TYPE_TAG,
    params(("id" = i32, Path, description = "Airplane type ID")),
    responses(
        (status = 200, description = "The airplane type", body = AirplaneTypeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Airplane type not found", body = ErrorDto)
    ),
)]
pub async fn get_airplane_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let airplane_type = AirplaneTypeRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Airplane type not found".to_string()))?;

    Ok((StatusCode::OK, Json(to_dto(airplane_type))))
}

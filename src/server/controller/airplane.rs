use std::path::Path as FilePath;

use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        airplane::{AirplaneDto, CreateAirplaneDto},
        api::ErrorDto,
    },
    server::{
        data::{airplane::AirplaneRepository, airplane_type::AirplaneTypeRepository},
        error::{validation::ValidationError, AppError},
        media,
        middleware::auth::{AuthGuard, Permission},
        model::airplane::AirplaneWithType,
        state::AppState,
    },
};

/// Tag for grouping airplane endpoints in OpenAPI documentation
pub static AIRPLANE_TAG: &str = "airplane";

/// List all airplanes with their type expanded. Admin only.
#[utoipa::path(
    get,
    path = "/api/airplanes",
    tag = AIRPLANE_TAG,
    responses(
        (status = 200, description = "All airplanes ordered by name", body = Vec<AirplaneDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto)
    ),
)]
pub async fn get_airplanes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let airplanes = AirplaneRepository::new(&state.db).get_all_with_type().await?;
    let dtos: Vec<AirplaneDto> = airplanes
        .into_iter()
        .map(|pair| AirplaneWithType::new(pair).into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new airplane of an existing type. Admin only.
#[utoipa::path(
    post,
    path = "/api/airplanes",
    tag = AIRPLANE_TAG,
    request_body = CreateAirplaneDto,
    responses(
        (status = 201, description = "Airplane created", body = AirplaneDto),
        (status = 400, description = "Unknown airplane type id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto)
    ),
)]
pub async fn create_airplane(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAirplaneDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    if AirplaneTypeRepository::new(&state.db)
        .find_by_id(payload.airplane_type)
        .await?
        .is_none()
    {
        return Err(
            ValidationError::field("airplane_type", "airplane type does not exist").into(),
        );
    }

    let repo = AirplaneRepository::new(&state.db);
    let airplane = repo
        .create(
            payload.name,
            payload.rows,
            payload.seats_in_row,
            payload.airplane_type,
        )
        .await?;

    let dto = repo
        .find_by_id_with_type(airplane.id)
        .await?
        .map(|pair| AirplaneWithType::new(pair).into_dto())
        .ok_or_else(|| AppError::NotFound("Airplane not found after creation".to_string()))?;

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Retrieve one airplane with its type expanded. Admin only.
#[utoipa::path(
    get,
    path = "/api/airplanes/{id}",
    tag = AIRPLANE_TAG,
    params(("id" = i32, Path, description = "Airplane ID")),
    responses(
        (status = 200, description = "The airplane", body = AirplaneDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Airplane not found", body = ErrorDto)
    ),
)]
pub async fn get_airplane(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let dto = AirplaneRepository::new(&state.db)
        .find_by_id_with_type(id)
        .await?
        .map(|pair| AirplaneWithType::new(pair).into_dto())
        .ok_or_else(|| AppError::NotFound("Airplane not found".to_string()))?;

    Ok((StatusCode::OK, Json(dto)))
}

/// Upload an image for an airplane. Admin only.
///
/// Accepts one multipart file field. The asset is stored under the media
/// root at a generated path combining the slugified airplane name and a
/// random unique suffix, and that path is recorded on the airplane row.
#[utoipa::path(
    post,
    path = "/api/airplanes/{id}/image",
    tag = AIRPLANE_TAG,
    params(("id" = i32, Path, description = "Airplane ID")),
    responses(
        (status = 200, description = "Image stored", body = AirplaneDto),
        (status = 400, description = "No file in request body", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Airplane not found", body = ErrorDto)
    ),
)]
pub async fn upload_airplane_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let repo = AirplaneRepository::new(&state.db);
    let airplane = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Airplane not found".to_string()))?;

    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
        .ok_or_else(|| AppError::BadRequest("No file field in request body".to_string()))?;

    let extension = field
        .file_name()
        .and_then(|name| FilePath::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;

    let relative_path =
        media::create_media_path(media::AIRPLANE_MEDIA_DIR, &airplane.name, &extension);
    media::store(&state.media_root, &relative_path, &data).await?;

    repo.set_image(id, relative_path).await?;

    let dto = repo
        .find_by_id_with_type(id)
        .await?
        .map(|pair| AirplaneWithType::new(pair).into_dto())
        .ok_or_else(|| AppError::NotFound("Airplane not found".to_string()))?;

    Ok((StatusCode::OK, Json(dto)))
}

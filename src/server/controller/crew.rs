use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        crew::{CreateCrewDto, CrewDto},
    },
    server::{
        data::crew::CrewRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
    },
};

/// Tag for grouping crew endpoints in OpenAPI documentation
pub static CREW_TAG: &str = "crew";

fn to_dto(crew: entity::crew::Model) -> CrewDto {
    CrewDto {
        id: crew.id,
        first_name: crew.first_name,
        last_name: crew.last_name,
    }
}

/// List all crew members. Admin only.
#[utoipa::path(
    get,
    path = "/api/crews",
    tag = CREW_TAG,
    responses(
        (status = 200, description = "All crew members ordered by name", body = Vec<CrewDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto)
    ),
)]
pub async fn get_crews(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let crews = CrewRepository::new(&state.db).get_all().await?;
    let dtos: Vec<CrewDto> = crews.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new crew member. Admin only.
#[utoipa::path(
    post,
    path = "/api/crews",
    tag = CREW_TAG,
    request_body = CreateCrewDto,
    responses(
        (status = 201, description = "Crew member created", body = CrewDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto)
    ),
)]
pub async fn create_crew(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCrewDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let crew = CrewRepository::new(&state.db)
        .create(payload.first_name, payload.last_name)
        .await?;

    Ok((StatusCode::CREATED, Json(to_dto(crew))))
}

/// Retrieve one crew member. Admin only.
#[utoipa::path(
    get,
    path = "/api/crews/{id}",
    tag = CREW_TAG,
    params(("id" = i32, Path, description = "Crew member ID")),
    responses(
        (status = 200, description = "The crew member", body = CrewDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Crew member not found", body = ErrorDto)
    ),
)]
pub async fn get_crew(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let crew = CrewRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Crew member not found".to_string()))?;

    Ok((StatusCode::OK, Json(to_dto(crew))))
}

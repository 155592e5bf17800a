use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{RegisterUserDto, TokenDto, TokenRequestDto, UpdateProfileDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{issue_token, AuthGuard},
        model::user::{RegisterUserParam, UpdateProfileParam},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping identity endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new account. Open to anonymous callers.
///
/// A duplicate email fails with a conflict status, deliberately distinct
/// from field validation failures.
#[utoipa::path(
    post,
    path = "/api/user/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Malformed email or short password", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .register(RegisterUserParam {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Exchange credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/api/user/token",
    tag = USER_TAG,
    request_body = TokenRequestDto,
    responses(
        (status = 200, description = "Token issued", body = TokenDto),
        (status = 401, description = "Unknown email or wrong password", body = ErrorDto)
    ),
)]
pub async fn token(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .authenticate(&payload.email, &payload.password)
        .await?;

    let token = issue_token(user.id, &state.auth)?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}

/// Retrieve the caller's own profile.
#[utoipa::path(
    get,
    path = "/api/user/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The caller's profile", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the caller's own email and/or password.
#[utoipa::path(
    patch,
    path = "/api/user/me",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Malformed email or short password", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let updated = UserService::new(&state.db)
        .update_profile(
            user.id,
            UpdateProfileParam {
                email: payload.email,
                password: payload.password,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        auth::{AdminDto, LoginDto, LoginResponseDto, RegisterDto},
    },
    server::{
        error::AppError,
        model::admin::{LoginParams, RegisterAdminParams},
        service::auth::{token::TOKEN_TTL_HOURS, AuthService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Name of the cookie carrying the access token.
static TOKEN_COOKIE: &str = "token";

/// Register an admin.
///
/// The caller must present the registration secret configured on the server.
///
/// # Returns
/// - `201 Created` - The new admin
/// - `400 Bad Request` - Invalid fields or username taken
/// - `403 Forbidden` - Wrong registration secret
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Admin registered", body = AdminDto),
        (status = 400, description = "Invalid fields or username taken", body = ValidationErrorDto),
        (status = 403, description = "Access credentials denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = RegisterAdminParams::from_dto(payload)?;

    let admin = AuthService::new(&state.db, &state.jwt, &state.config)
        .register(params)
        .await?;

    Ok((StatusCode::CREATED, Json(admin.into_dto())))
}

/// Log in as an admin.
///
/// Returns a bearer token valid for one hour and also sets it as an `HttpOnly` cookie.
///
/// # Returns
/// - `200 OK` - Token and admin summary
/// - `400 Bad Request` - Missing username or password
/// - `401 Unauthorized` - Unknown user or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Missing username or password", body = ValidationErrorDto),
        (status = 401, description = "Username or password invalid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = LoginParams::from_dto(payload)?;

    let (token, admin) = AuthService::new(&state.db, &state.jwt, &state.config)
        .login(params)
        .await?;

    let cookie = token_cookie(&token, state.config.is_production())?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponseDto {
            token,
            user: admin.into_dto(),
        }),
    ))
}

fn token_cookie(token: &str, secure: bool) -> Result<HeaderValue, AppError> {
    let mut cookie = format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax; Max-Age={}",
        TOKEN_COOKIE,
        token,
        TOKEN_TTL_HOURS * 3600
    );
    if secure {
        cookie.push_str("; Secure");
    }

    HeaderValue::from_str(&cookie)
        .map_err(|e| AppError::InternalError(format!("Invalid token cookie: {}", e)))
}

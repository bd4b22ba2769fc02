use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        locality::{LocalityDto, LocalityPayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::locality::LocalityParams,
        service::locality::LocalityService,
        state::AppState,
        util::parse::parse_int_id,
    },
};

/// Tag for grouping locality endpoints in OpenAPI documentation
pub static LOCALITY_TAG: &str = "locality";

/// Create a locality.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
#[utoipa::path(
    post,
    path = "/api/locality",
    tag = LOCALITY_TAG,
    request_body = LocalityPayloadDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Locality created", body = LocalityDto),
        (status = 400, description = "Invalid locality data", body = ValidationErrorDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_locality(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LocalityPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;
    let Json(payload) = payload?;

    let params = LocalityParams::from_dto(payload)?;

    let locality = LocalityService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(locality.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/locality",
    tag = LOCALITY_TAG,
    responses(
        (status = 200, description = "All localities", body = Vec<LocalityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_localities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let localities = LocalityService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            localities
                .into_iter()
                .map(|l| l.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/locality/{id}",
    tag = LOCALITY_TAG,
    params(("id" = i32, Path, description = "Locality id")),
    responses(
        (status = 200, description = "The locality", body = LocalityDto),
        (status = 400, description = "Invalid id", body = ValidationErrorDto),
        (status = 404, description = "Locality not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_locality(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_int_id(&id)?;

    let locality = LocalityService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(locality.into_dto())))
}

/// Replace a locality. All fields are required.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
#[utoipa::path(
    put,
    path = "/api/locality/{id}",
    tag = LOCALITY_TAG,
    params(("id" = i32, Path, description = "Locality id")),
    request_body = LocalityPayloadDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated locality", body = LocalityDto),
        (status = 400, description = "Invalid locality data", body = ValidationErrorDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "Locality not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_locality(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<LocalityPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;
    let id = parse_int_id(&id)?;
    let Json(payload) = payload?;

    let params = LocalityParams::from_dto(payload)?;

    let locality = LocalityService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(locality.into_dto())))
}

/// Delete a locality.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
#[utoipa::path(
    delete,
    path = "/api/locality/{id}",
    tag = LOCALITY_TAG,
    params(("id" = i32, Path, description = "Locality id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Locality deleted"),
        (status = 400, description = "Invalid id", body = ValidationErrorDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "Locality not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_locality(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;
    let id = parse_int_id(&id)?;

    LocalityService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

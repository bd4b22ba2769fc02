use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        scheduling::{CreateSchedulingDto, SchedulingDto, UpdateSchedulingDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::scheduling::{CreateSchedulingParams, UpdateSchedulingParams},
        service::scheduling::SchedulingService,
        state::AppState,
    },
};

/// Tag for grouping scheduling endpoints in OpenAPI documentation
pub static SCHEDULING_TAG: &str = "scheduling";

/// Book a donation appointment.
///
/// `scheduled_at` accepts an RFC 3339 timestamp or a `YYYY-MM-DD` date (midnight UTC).
/// `status` defaults to `scheduled`.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
#[utoipa::path(
    post,
    path = "/api/scheduling",
    tag = SCHEDULING_TAG,
    request_body = CreateSchedulingDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Appointment booked", body = SchedulingDto),
        (status = 400, description = "Invalid appointment data", body = ValidationErrorDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_scheduling(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateSchedulingDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;
    let Json(payload) = payload?;

    let params = CreateSchedulingParams::from_dto(payload)?;

    let scheduling = SchedulingService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(scheduling.into_dto())))
}

/// List appointments ordered by appointment time.
#[utoipa::path(
    get,
    path = "/api/scheduling",
    tag = SCHEDULING_TAG,
    responses(
        (status = 200, description = "All appointments", body = Vec<SchedulingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedulings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let schedulings = SchedulingService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            schedulings
                .into_iter()
                .map(|s| s.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/scheduling/{id}",
    tag = SCHEDULING_TAG,
    params(("id" = String, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "The appointment", body = SchedulingDto),
        (status = 404, description = "Scheduling not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scheduling(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let scheduling = SchedulingService::new(&state.db)
        .get_by_id(id.trim())
        .await?;

    Ok((StatusCode::OK, Json(scheduling.into_dto())))
}

/// Update an appointment.
///
/// Only the fields present in the body are changed.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
#[utoipa::path(
    put,
    path = "/api/scheduling/{id}",
    tag = SCHEDULING_TAG,
    params(("id" = String, Path, description = "Appointment id")),
    request_body = UpdateSchedulingDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated appointment", body = SchedulingDto),
        (status = 400, description = "Invalid appointment data", body = ValidationErrorDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "Scheduling not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_scheduling(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<UpdateSchedulingDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;
    let Json(payload) = payload?;

    let params = UpdateSchedulingParams::from_dto(id.trim().to_string(), payload)?;

    let scheduling = SchedulingService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(scheduling.into_dto())))
}

/// Cancel and remove an appointment.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
#[utoipa::path(
    delete,
    path = "/api/scheduling/{id}",
    tag = SCHEDULING_TAG,
    params(("id" = String, Path, description = "Appointment id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "Scheduling not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_scheduling(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    SchedulingService::new(&state.db).delete(id.trim()).await?;

    Ok(StatusCode::NO_CONTENT)
}

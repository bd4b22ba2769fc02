use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        blood_type::BloodType,
        donor::{CreateDonorDto, DonorDto, UpdateDonorDto},
    },
    server::{
        error::{validation::ValidationErrors, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::donor::{CreateDonorParams, UpdateDonorParams},
        service::donor::DonorService,
        state::AppState,
        util::parse::parse_uuid_id,
    },
};

/// Tag for grouping donor endpoints in OpenAPI documentation
pub static DONOR_TAG: &str = "donor";

/// Register a new donor.
///
/// Validates and normalizes the submitted donor record. The donor must be at least
/// 18 years old. Phone and identity document are stored as digits only and the email
/// is lowercased.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
///
/// # Returns
/// - `201 Created` - The stored donor
/// - `400 Bad Request` - One or more fields failed validation
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Invalid or expired token
#[utoipa::path(
    post,
    path = "/api/donors",
    tag = DONOR_TAG,
    request_body = CreateDonorDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Donor registered", body = DonorDto),
        (status = 400, description = "Invalid donor data", body = ValidationErrorDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_donor(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateDonorDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;
    let Json(payload) = payload?;

    let params = CreateDonorParams::from_dto(payload, Utc::now().date_naive())?;

    let donor = DonorService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(donor.into_dto())))
}

/// List all donors ordered by registration time.
#[utoipa::path(
    get,
    path = "/api/donors",
    tag = DONOR_TAG,
    responses(
        (status = 200, description = "All donors", body = Vec<DonorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_donors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let donors = DonorService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(donors.into_iter().map(|d| d.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a donor by id.
///
/// # Returns
/// - `200 OK` - The donor
/// - `400 Bad Request` - `id` is not a UUID
/// - `404 Not Found` - No donor with this id
#[utoipa::path(
    get,
    path = "/api/donors/{id}",
    tag = DONOR_TAG,
    params(("id" = String, Path, description = "Donor UUID")),
    responses(
        (status = 200, description = "The donor", body = DonorDto),
        (status = 400, description = "Invalid id", body = ValidationErrorDto),
        (status = 404, description = "Donor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_donor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_uuid_id(&id)?;

    let donor = DonorService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(donor.into_dto())))
}

/// List donors with the given blood type.
///
/// The blood type is matched case-insensitively and may use either the symbolic label
/// (`ab-`) or the long form (`AB_NEGATIVO`). URL-encode `+` as `%2B`.
#[utoipa::path(
    get,
    path = "/api/donors/blood-type/{blood_type}",
    tag = DONOR_TAG,
    params(("blood_type" = String, Path, description = "Blood type, e.g. O- or O_NEGATIVO")),
    responses(
        (status = 200, description = "Matching donors", body = Vec<DonorDto>),
        (status = 400, description = "Invalid blood type", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_donors_by_blood_type(
    State(state): State<AppState>,
    Path(blood_type): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let blood_type = blood_type
        .parse::<BloodType>()
        .map_err(|_| ValidationErrors::single("bloodType", "Invalid blood type"))?;

    let donors = DonorService::new(&state.db)
        .get_by_blood_type(blood_type)
        .await?;

    Ok((
        StatusCode::OK,
        Json(donors.into_iter().map(|d| d.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Update a donor.
///
/// Only the fields present in the body are validated and changed.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
#[utoipa::path(
    put,
    path = "/api/donors/{id}",
    tag = DONOR_TAG,
    params(("id" = String, Path, description = "Donor UUID")),
    request_body = UpdateDonorDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated donor", body = DonorDto),
        (status = 400, description = "Invalid donor data", body = ValidationErrorDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "Donor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_donor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<UpdateDonorDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;
    let id = parse_uuid_id(&id)?;
    let Json(payload) = payload?;

    let params = UpdateDonorParams::from_dto(payload, Utc::now().date_naive())?;

    let donor = DonorService::new(&state.db).update(&id, params).await?;

    Ok((StatusCode::OK, Json(donor.into_dto())))
}

/// Delete a donor.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
#[utoipa::path(
    delete,
    path = "/api/donors/{id}",
    tag = DONOR_TAG,
    params(("id" = String, Path, description = "Donor UUID")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Donor deleted"),
        (status = 400, description = "Invalid id", body = ValidationErrorDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "Donor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_donor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;
    let id = parse_uuid_id(&id)?;

    DonorService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

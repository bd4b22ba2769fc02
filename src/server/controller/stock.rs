use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        stock::{StockBatchDto, StockBatchPayloadDto, StockQuery, UpdateQuantityDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::stock::{StockBatchParams, UpdateQuantityParams},
        service::stock::StockService,
        state::AppState,
        util::parse::parse_int_id,
    },
};

/// Tag for grouping stock endpoints in OpenAPI documentation
pub static STOCK_TAG: &str = "stock";

/// Add a stock batch.
///
/// `status` defaults to `available`. The lot code must be unique.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
///
/// # Returns
/// - `201 Created` - The stored batch
/// - `400 Bad Request` - Invalid batch data or duplicate lot
/// - `401 Unauthorized` - No bearer token
#[utoipa::path(
    post,
    path = "/api/stock",
    tag = STOCK_TAG,
    request_body = StockBatchPayloadDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Batch added", body = StockBatchDto),
        (status = 400, description = "Invalid batch data or duplicate lot", body = ValidationErrorDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_batch(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<StockBatchPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;
    let Json(payload) = payload?;

    let params = StockBatchParams::for_create(payload)?;

    let batch = StockService::new(&state.db).add(params).await?;

    Ok((StatusCode::CREATED, Json(batch.into_dto())))
}

/// List stock batches, optionally filtered by a lot substring.
#[utoipa::path(
    get,
    path = "/api/stock",
    tag = STOCK_TAG,
    params(StockQuery),
    responses(
        (status = 200, description = "Matching batches", body = Vec<StockBatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_batches(
    State(state): State<AppState>,
    Query(query): Query<StockQuery>,
) -> Result<impl IntoResponse, AppError> {
    let lot = query.lot.as_deref().map(str::trim).filter(|l| !l.is_empty());

    let batches = StockService::new(&state.db).get_all(lot).await?;

    Ok((
        StatusCode::OK,
        Json(batches.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/stock/{id}",
    tag = STOCK_TAG,
    params(("id" = i32, Path, description = "Batch id")),
    responses(
        (status = 200, description = "The batch", body = StockBatchDto),
        (status = 400, description = "Invalid id", body = ValidationErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_batch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_int_id(&id)?;

    let batch = StockService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(batch.into_dto())))
}

/// Replace a stock batch.
///
/// Every field, `status` included, is required.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
#[utoipa::path(
    put,
    path = "/api/stock/{id}",
    tag = STOCK_TAG,
    params(("id" = i32, Path, description = "Batch id")),
    request_body = StockBatchPayloadDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated batch", body = StockBatchDto),
        (status = 400, description = "Invalid batch data or duplicate lot", body = ValidationErrorDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_batch(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<StockBatchPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;
    let id = parse_int_id(&id)?;
    let Json(payload) = payload?;

    let params = StockBatchParams::for_update(payload)?;

    let batch = StockService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(batch.into_dto())))
}

/// Change only the quantity of a stock batch.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
#[utoipa::path(
    patch,
    path = "/api/stock/{id}/quantity",
    tag = STOCK_TAG,
    params(("id" = i32, Path, description = "Batch id")),
    request_body = UpdateQuantityDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated batch", body = StockBatchDto),
        (status = 400, description = "Invalid quantity", body = ValidationErrorDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<UpdateQuantityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;
    let id = parse_int_id(&id)?;
    let Json(payload) = payload?;

    let params = UpdateQuantityParams::from_dto(id, payload)?;

    let batch = StockService::new(&state.db).update_quantity(params).await?;

    Ok((StatusCode::OK, Json(batch.into_dto())))
}

/// Remove a stock batch.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
#[utoipa::path(
    delete,
    path = "/api/stock/{id}",
    tag = STOCK_TAG,
    params(("id" = i32, Path, description = "Batch id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Batch removed"),
        (status = 400, description = "Invalid id", body = ValidationErrorDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_batch(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;
    let id = parse_int_id(&id)?;

    StockService::new(&state.db).remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

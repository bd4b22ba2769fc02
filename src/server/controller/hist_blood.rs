use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        blood_type::UNKNOWN_BLOOD_TYPE_MESSAGE,
        hist_blood::{HistBloodListDto, HistBloodResultDto, StatLookupDto, UpdateSentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::hist_blood::{BloodTypeStat, RecordTurnaroundParams, SeedOutcome, StatLookup},
        service::hist_blood::{HistBloodService, ALREADY_SEEDED_MESSAGE},
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static HIST_BLOOD_TAG: &str = "hist-blood";

static LIST_MESSAGE: &str = "Aqui estão as médias em dias de tempo de saida da bolsa de sangue em dias, received = recebido, sent = enviado, shortTime = menor tempo e longTime = maior tempo";
static SEEDED_MESSAGE: &str = "Tipos sanguíneos criados.";
static RESET_MESSAGE: &str = "Todos os tipos sanguíneos voltaram ao estado inicial.";

/// Create the initial statistics record of every blood type.
///
/// Records that already exist are left untouched. When nothing was missing the
/// response is `200 OK` with a message instead of the records.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
#[utoipa::path(
    post,
    path = "/api/hist-blood/create",
    tag = HIST_BLOOD_TAG,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Missing records created", body = HistBloodListDto),
        (status = 200, description = "All records already exist", body = MessageDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seed_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    let response = match HistBloodService::new(&state.db).seed().await? {
        SeedOutcome::Created(stats) => (
            StatusCode::CREATED,
            Json(list_dto(SEEDED_MESSAGE, stats)),
        )
            .into_response(),
        SeedOutcome::AlreadyExists => (
            StatusCode::OK,
            Json(MessageDto {
                message: ALREADY_SEEDED_MESSAGE.to_string(),
            }),
        )
            .into_response(),
    };

    Ok(response)
}

/// Get the statistics of every blood type.
#[utoipa::path(
    get,
    path = "/api/hist-blood",
    tag = HIST_BLOOD_TAG,
    responses(
        (status = 200, description = "All statistics", body = HistBloodListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = HistBloodService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(list_dto(LIST_MESSAGE, stats))))
}

/// Get the statistics of one blood type.
///
/// The type is matched case-insensitively. An unrecognized type is answered with
/// `200 OK` and a message listing the valid types.
#[utoipa::path(
    get,
    path = "/api/hist-blood/{blood_type}",
    tag = HIST_BLOOD_TAG,
    params(("blood_type" = String, Path, description = "Blood type, e.g. ab- (URL-encode + as %2B)")),
    responses(
        (status = 200, description = "Statistics or the list of valid types", body = HistBloodResultDto),
        (status = 404, description = "Statistics not created yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stat(
    State(state): State<AppState>,
    Path(blood_type): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let lookup = HistBloodService::new(&state.db)
        .get_by_type(&blood_type)
        .await?;

    Ok((StatusCode::OK, Json(result_dto(None, lookup))))
}

/// Record how many days a unit of this blood type took to be sent out.
///
/// The previous state is kept so that the update can be undone once.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
#[utoipa::path(
    put,
    path = "/api/hist-blood/update/{blood_type}",
    tag = HIST_BLOOD_TAG,
    params(("blood_type" = String, Path, description = "Blood type")),
    request_body = UpdateSentDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated statistics or the list of valid types", body = HistBloodResultDto),
        (status = 400, description = "Invalid sent value", body = ValidationErrorDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "Statistics not created yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_stat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(blood_type): Path<String>,
    payload: Result<Json<UpdateSentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;
    let Json(payload) = payload?;

    let params = RecordTurnaroundParams::from_dto(payload)?;

    let lookup = HistBloodService::new(&state.db)
        .update(&blood_type, params)
        .await?;

    let message = match lookup {
        StatLookup::Found(_) => Some(format!("sent alterado: {}", params.days)),
        StatLookup::UnknownType => None,
    };

    Ok((StatusCode::OK, Json(result_dto(message, lookup))))
}

/// Undo the last update of one blood type.
///
/// Only one level of undo exists; reverting again without an update in between
/// leaves the statistics unchanged.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
#[utoipa::path(
    put,
    path = "/api/hist-blood/revert/{blood_type}",
    tag = HIST_BLOOD_TAG,
    params(("blood_type" = String, Path, description = "Blood type")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Statistics after the revert or the list of valid types", body = HistBloodResultDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "Statistics not created yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revert_stat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(blood_type): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    let lookup = HistBloodService::new(&state.db)
        .revert_last(&blood_type)
        .await?;

    Ok((StatusCode::OK, Json(result_dto(None, lookup))))
}

/// Reset the statistics of every blood type to their initial values.
///
/// # Access Control
/// - `Admin` - Requires a bearer token
#[utoipa::path(
    delete,
    path = "/api/hist-blood/delete",
    tag = HIST_BLOOD_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Statistics reset", body = HistBloodListDto),
        (status = 401, description = "Access token not provided", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    let stats = HistBloodService::new(&state.db).reset().await?;

    Ok((StatusCode::OK, Json(list_dto(RESET_MESSAGE, stats))))
}

fn list_dto(message: &str, stats: Vec<BloodTypeStat>) -> HistBloodListDto {
    HistBloodListDto {
        message: message.to_string(),
        data: stats.into_iter().map(|s| s.into_dto()).collect(),
    }
}

fn result_dto(message: Option<String>, lookup: StatLookup<BloodTypeStat>) -> HistBloodResultDto {
    let result = match lookup {
        StatLookup::Found(stat) => StatLookupDto::Stat(stat.into_dto()),
        StatLookup::UnknownType => StatLookupDto::Message(UNKNOWN_BLOOD_TYPE_MESSAGE.to_string()),
    };

    HistBloodResultDto { message, result }
}

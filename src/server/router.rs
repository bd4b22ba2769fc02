//! Route table, OpenAPI document and the HTTP layers wrapped around them.

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, Response, StatusCode},
    response::IntoResponse,
    Json, Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorError, GovernorLayer};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{
        config::Config,
        controller::{auth, donor, hist_blood, locality, scheduling, stock},
        error::AppError,
        state::AppState,
    },
};

/// Seconds needed to replenish one request of a client's quota.
const RATE_LIMIT_REPLENISH_SECS: u64 = 15;
const RATE_LIMIT_BURST: u32 = 40;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token returned by POST /api/auth/login"))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "HemoSync API",
        description = "Blood donation records: donors, stock batches, appointments, localities and turnaround statistics."
    ),
    tags(
        (name = "auth", description = "Admin registration and login"),
        (name = "donor", description = "Donor records"),
        (name = "stock", description = "Blood stock batches"),
        (name = "scheduling", description = "Donation appointments"),
        (name = "locality", description = "Collection localities"),
        (name = "hist-blood", description = "Turnaround statistics per blood type")
    )
)]
struct ApiDoc;

/// Builds every API route together with its OpenAPI description.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(donor::create_donor, donor::get_donors))
        .routes(routes!(
            donor::get_donor,
            donor::update_donor,
            donor::delete_donor
        ))
        .routes(routes!(donor::get_donors_by_blood_type))
        .routes(routes!(stock::add_batch, stock::get_batches))
        .routes(routes!(
            stock::get_batch,
            stock::update_batch,
            stock::remove_batch
        ))
        .routes(routes!(stock::update_quantity))
        .routes(routes!(
            scheduling::create_scheduling,
            scheduling::get_schedulings
        ))
        .routes(routes!(
            scheduling::get_scheduling,
            scheduling::update_scheduling,
            scheduling::delete_scheduling
        ))
        .routes(routes!(locality::create_locality, locality::get_localities))
        .routes(routes!(
            locality::get_locality,
            locality::update_locality,
            locality::delete_locality
        ))
        .routes(routes!(hist_blood::seed_stats))
        .routes(routes!(hist_blood::get_stats))
        .routes(routes!(hist_blood::get_stat))
        .routes(routes!(hist_blood::update_stat))
        .routes(routes!(hist_blood::revert_stat))
        .routes(routes!(hist_blood::reset_stats))
}

/// Builds the application: API routes, Swagger UI and the response layers.
///
/// Rate limiting is applied separately by [`with_rate_limit`] because it needs the peer
/// address, which only exists when serving with connect info.
pub fn app(state: AppState) -> Router {
    let (api, openapi) = router().split_for_parts();
    let config = state.config.clone();

    let mut app = api
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", openapi))
        .with_state(state)
        .layer(cors_layer(&config))
        .layer(CompressionLayer::new())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("cross-origin-resource-policy"),
            HeaderValue::from_static("same-origin"),
        ));

    if config.is_production() {
        app = app.layer(SetResponseHeaderLayer::if_not_present(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=15552000; includeSubDomains"),
        ));
    }

    if config.debug() {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

/// Limits each peer address to a burst of requests, replenished one at a time.
///
/// Rejected requests get `429 Too Many Requests` with a JSON error body.
pub fn with_rate_limit(app: Router) -> Result<Router, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_second(RATE_LIMIT_REPLENISH_SECS)
        .burst_size(RATE_LIMIT_BURST)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limit configuration".to_string()))?;

    let limiter = governor_config.limiter().clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            limiter.retain_recent();
        }
    });

    Ok(app.layer(GovernorLayer::new(governor_config).error_handler(rate_limit_response)))
}

fn rate_limit_response(error: GovernorError) -> Response<Body> {
    match error {
        GovernorError::TooManyRequests { .. } => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorDto::new(
                "Too many requests, please try again later.",
            )),
        )
            .into_response(),
        err => {
            tracing::error!("Rate limiter failure: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto::new("Internal server error")),
            )
                .into_response()
        }
    }
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match &config.cors_origin {
        Some(origin) => cors.allow_origin(origin.clone()).allow_credentials(true),
        None => cors.allow_origin(Any),
    }
}

#[cfg(test)]
mod test;

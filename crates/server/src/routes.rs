pub mod settings;

use axum::{
    http::HeaderValue,
    routing::get,
    Json, Router,
};
use configs::CorsConfig;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{Health, RootMessage};

use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Service banner", body = crate::openapi::RootResponse)))]
pub async fn root() -> Json<RootMessage> {
    Json(RootMessage::default())
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::healthy())
}

/// CORS for the configured origins; credentials are allowed, so methods and
/// headers mirror the request instead of using `*`.
pub fn build_cors(cfg: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    if origins.is_empty() {
        return CorsLayer::very_permissive();
    }
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the full application router: banner, health, settings CRUD and API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health));

    let settings_routes = Router::new()
        .route("/settings", get(settings::list).post(settings::create))
        .route(
            "/settings/:id",
            get(settings::get).put(settings::update).delete(settings::delete),
        );

    public
        .merge(settings_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and the like
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

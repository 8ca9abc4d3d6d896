pub mod items;

use axum::middleware::from_fn;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware as mw;
use crate::openapi::ApiDoc;
use common::types::Health;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(get, path = "/", tag = "root", responses((status = 200, description = "Greeting")))]
pub async fn hello() -> &'static str {
    "Hello World!"
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: item routes, static files, docs,
/// and the middleware/CORS/trace stack.
pub fn build_router(cors: CorsLayer, docs_enabled: bool, state: ServerState) -> Router {
    let static_dir = ServeDir::new("public");

    let mut app = Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
        .route("/GetItems", get(items::list))
        .route("/AddItem/:name", post(items::create))
        .route("/UpdateItem/:id", put(items::toggle))
        .route("/DeleteItem/:id", delete(items::remove))
        .nest_service("/static", static_dir)
        .with_state(state)
        .layer(from_fn(mw::authenticate))
        .layer(from_fn(mw::forwarded_headers))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // One span per request with method and path, at INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // Response events carry status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        );

    if docs_enabled {
        app = app
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }
    app
}

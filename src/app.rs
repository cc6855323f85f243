use crate::directory::CompanyDirectory;
use crate::errors::handle_panic;
use crate::handlers::{self, AppState};
use crate::openapi;
use crate::services::EsgService;
use axum::{http::Method, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the shared state around a directory.
pub fn build_state(directory: CompanyDirectory) -> Arc<AppState> {
    Arc::new(AppState {
        esg: EsgService::new(Arc::new(directory)),
    })
}

/// Builds the HTTP application.
///
/// Everything under `/api` allows cross-origin requests from any origin,
/// including its 404s and panic-generated 500s.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/companies", get(handlers::list_companies))
        .route("/esg/:company_name", get(handlers::get_esg_data))
        .fallback(handlers::not_found);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/docs", get(openapi::serve_swagger_ui))
        .route(openapi::OPENAPI_JSON_PATH, get(openapi::serve_openapi_spec))
        .nest("/api", with_api_layers(api_routes))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Wraps the API subtree: panics are converted first, so CORS headers land
/// on the resulting 500 as well.
fn with_api_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
}

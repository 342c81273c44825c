use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderValue, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, error::ApiError, main_lib::AppState, pages};

mod calculators;
mod health;
mod ipos;
mod listings;
mod rates;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(origins)
}

async fn api_not_found() -> ApiError {
    ApiError::NotFound
}

async fn page_not_found(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    tracing::debug!("No route for {}", uri.path());
    pages::not_found::page(&state.site, uri.path()).into_response()
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let api = Router::new()
        .merge(health::router())
        .merge(ipos::router())
        .merge(listings::router())
        .merge(rates::router())
        .merge(calculators::router())
        .fallback(api_not_found);

    Router::new()
        .nest("/api/v1", api)
        .merge(pages::router())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(page_not_found)
        .with_state(state)
        .layer(cors_layer(config))
        .layer(CompressionLayer::new())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}

//! Application router shared by the binary and the integration tests.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Preflight responses may be cached by the browser for this long.
const CORS_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// `/health` at the root, the website and portal API under `/api`, and a
/// JSON 404 for everything else.
///
/// Layers run outermost first: CORS answers preflights before anything
/// else, every request then gets an `x-request-id` that appears in its
/// trace span and is echoed back, and the timeout and panic guard sit
/// closest to the handlers so both still produce a traced response.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        // Argon2 hashing on register/login is the slowest path we serve.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(CatchPanicLayer::new());

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes(config))
        .fallback(route_not_found)
        .layer(middleware)
        // Applied as its own outermost layer: `Cors` needs a `Default`
        // response body, which axum's boxed `Body` provides.
        .layer(build_cors_layer(config))
        .with_state(state)
}

async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

/// CORS for the marketing site and the customer portal.
///
/// Customers authenticate with a Bearer header rather than cookies, so
/// credentials are not allowed. The request id is exposed so the portal
/// can quote it in support requests.
///
/// Panics on an unparseable origin so misconfiguration fails at startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .expose_headers([REQUEST_ID_HEADER])
        .max_age(CORS_MAX_AGE)
}

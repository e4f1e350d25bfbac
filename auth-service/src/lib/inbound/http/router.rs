use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::root::root;
use super::handlers::validate::validate;
use crate::credential::ports::AuthenticatorPort;

#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<dyn AuthenticatorPort>,
}

pub fn create_router(authenticator: Arc<dyn AuthenticatorPort>) -> Router {
    let state = AppState { authenticator };

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/", get(root))
        .route("/login", post(login))
        .route("/validate", post(validate))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

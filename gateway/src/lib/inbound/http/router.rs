use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::root::root;
use super::handlers::session::session;
use super::middleware::admit;
use crate::admission::ports::TokenValidator;

#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<dyn TokenValidator>,
}

pub fn create_router(validator: Arc<dyn TokenValidator>) -> Router {
    let state = AppState { validator };

    let public_routes = Router::new().route("/", get(root));

    let protected_routes = Router::new()
        .route("/api/session", get(session))
        .route_layer(middleware::from_fn_with_state(state.clone(), admit));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
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
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::http::header::AUTHORIZATION;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use mockall::mock;
    use tower::ServiceExt;

    use super::*;
    use crate::admission::errors::AdmissionError;

    mock! {
        pub TestTokenValidator {}

        #[async_trait]
        impl TokenValidator for TestTokenValidator {
            async fn validate(&self, authorization: Option<String>) -> Result<auth::Claims, AdmissionError>;
        }
    }

    fn root_claims() -> auth::Claims {
        auth::Claims {
            subject: "root@email.com".to_string(),
            issued_at: 1_700_000_000,
            expires_at: 1_700_086_400,
            privileged: true,
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("Body is not JSON")
    }

    #[tokio::test]
    async fn test_root_is_public() {
        let mut validator = MockTestTokenValidator::new();
        validator.expect_validate().times(0);

        let router = create_router(Arc::new(validator));

        let response = router
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["Hello"], "Welcome to Gateway-Microservice home page!");
    }

    #[tokio::test]
    async fn test_session_admitted() {
        let mut validator = MockTestTokenValidator::new();
        validator
            .expect_validate()
            .withf(|authorization| authorization.as_deref() == Some("Bearer good"))
            .times(1)
            .returning(|_| Ok(root_claims()));

        let router = create_router(Arc::new(validator));

        let response = router
            .oneshot(
                Request::get("/api/session")
                    .header(AUTHORIZATION, "Bearer good")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["decoded"]["username"], "root@email.com");
        assert_eq!(body["decoded"]["admin"], true);
    }

    #[tokio::test]
    async fn test_session_without_header() {
        let mut validator = MockTestTokenValidator::new();
        validator
            .expect_validate()
            .withf(|authorization| authorization.is_none())
            .times(1)
            .returning(|_| Err(AdmissionError::MissingCredentials));

        let router = create_router(Arc::new(validator));

        let response = router
            .oneshot(Request::get("/api/session").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["data"]["message"], "Missing credentials");
    }

    #[tokio::test]
    async fn test_session_rejected_token() {
        let mut validator = MockTestTokenValidator::new();
        validator
            .expect_validate()
            .times(1)
            .returning(|_| Err(AdmissionError::Unauthenticated));

        let router = create_router(Arc::new(validator));

        let response = router
            .oneshot(
                Request::get("/api/session")
                    .header(AUTHORIZATION, "Bearer garbage")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_session_expired_token() {
        let mut validator = MockTestTokenValidator::new();
        validator
            .expect_validate()
            .times(1)
            .returning(|_| Err(AdmissionError::Expired));

        let router = create_router(Arc::new(validator));

        let response = router
            .oneshot(
                Request::get("/api/session")
                    .header(AUTHORIZATION, "Bearer stale")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["data"]["message"], "Token expired");
    }

    #[tokio::test]
    async fn test_session_auth_service_down() {
        let mut validator = MockTestTokenValidator::new();
        validator
            .expect_validate()
            .times(1)
            .returning(|_| Err(AdmissionError::AuthServiceUnavailable("refused".to_string())));

        let router = create_router(Arc::new(validator));

        let response = router
            .oneshot(
                Request::get("/api/session")
                    .header(AUTHORIZATION, "Bearer good")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["data"]["message"], "Auth service unavailable");
    }
}

use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::admission::ports::TokenValidator;
use crate::inbound::http::router::AppState;

/// Extension type holding the claims of an admitted request
#[derive(Debug, Clone)]
pub struct AdmittedClaims(pub auth::Claims);

/// Middleware that admits a request only with a token the auth service accepts
pub async fn admit(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = req
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default().to_string());

    let claims = state
        .validator
        .validate(authorization)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, uri = %req.uri(), "Admission refused");
            ApiError::from(e)
        })?;

    tracing::debug!(subject = %claims.subject, "Request admitted");
    req.extensions_mut().insert(AdmittedClaims(claims));

    Ok(next.run(req).await)
}

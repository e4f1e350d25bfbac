use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::credential::ports::AuthenticatorPort;
use crate::inbound::http::router::AppState;

pub async fn validate(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ValidateResponseData>, ApiError> {
    // A header that is not valid UTF-8 is present but unusable.
    let authorization = headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default());

    let decoded = state.authenticator.validate(authorization)?;

    Ok(Json(ValidateResponseData { decoded }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponseData {
    pub decoded: auth::Claims,
}

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::credential::models::Credentials;
use crate::credential::ports::AuthenticatorPort;
use crate::inbound::http::router::AppState;

/// Exchange a username and password for a token.
///
/// The response body is the token as a JSON string.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Json<auth::Token>, ApiError> {
    let token = state
        .authenticator
        .login(Credentials::new(body.username, body.password))
        .await?;

    Ok(Json(token))
}

#[derive(Clone, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

use axum::Extension;
use axum::Json;
use serde::Serialize;

use crate::inbound::http::middleware::AdmittedClaims;

/// Return the claims the request was admitted with.
pub async fn session(
    Extension(admitted): Extension<AdmittedClaims>,
) -> Json<SessionResponseData> {
    Json(SessionResponseData {
        decoded: admitted.0,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponseData {
    pub decoded: auth::Claims,
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::admission::errors::AdmissionError;
use crate::admission::ports::TokenValidator;

/// Message the auth service sends with a 403 for an expired token.
const EXPIRED_MESSAGE: &str = "Token expired";

#[derive(Deserialize)]
struct ValidateResponse {
    decoded: auth::Claims,
}

#[derive(Deserialize)]
struct ErrorResponse {
    data: ErrorData,
}

#[derive(Deserialize)]
struct ErrorData {
    message: String,
}

/// Validates tokens by calling the auth service's `POST /validate`.
///
/// The incoming `Authorization` header is forwarded verbatim.
pub struct HttpTokenValidator {
    client: reqwest::Client,
    validate_url: String,
}

impl HttpTokenValidator {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            validate_url: format!("{}/validate", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl TokenValidator for HttpTokenValidator {
    async fn validate(
        &self,
        authorization: Option<String>,
    ) -> Result<auth::Claims, AdmissionError> {
        let mut request = self.client.post(&self.validate_url);
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AdmissionError::AuthServiceUnavailable(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<ValidateResponse>()
                .await
                .map(|body| body.decoded)
                .map_err(|e| {
                    AdmissionError::AuthServiceUnavailable(format!("Invalid response: {}", e))
                }),
            StatusCode::UNAUTHORIZED => Err(AdmissionError::MissingCredentials),
            StatusCode::FORBIDDEN => match response.json::<ErrorResponse>().await {
                Ok(body) if body.data.message == EXPIRED_MESSAGE => Err(AdmissionError::Expired),
                _ => Err(AdmissionError::Unauthenticated),
            },
            status => Err(AdmissionError::AuthServiceUnavailable(format!(
                "Unexpected status {}",
                status
            ))),
        }
    }
}

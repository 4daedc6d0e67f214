//! HTTP response wrapper returned by every API call

use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Status plus body of a single API call.
///
/// Non-2xx responses are carried here rather than raised, so the caller
/// decides whether a failure is fatal. `into_data` converts them into a
/// typed [`ApiError`] for callers that just want to propagate.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    status: StatusCode,
    data: Option<T>,
    raw: String,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying already-parsed data.
    #[cfg(test)]
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data: Some(data),
            raw: String::new(),
        }
    }

    /// A failed response with the raw body text.
    pub fn failed(status: StatusCode, raw: impl Into<String>) -> Self {
        Self {
            status,
            data: None,
            raw: raw.into(),
        }
    }

    /// HTTP status of the response
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Raw body text (empty for responses built from parsed data)
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parsed body, if the request succeeded
    #[cfg(test)]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Take the parsed body, mapping a non-2xx status to an [`ApiError`].
    pub fn into_data(self) -> Result<T> {
        if let Some(data) = self.data {
            return Ok(data);
        }
        Err(status_error(self.status, self.raw).into())
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Build a response from a status and body text, parsing 2xx bodies.
    pub fn from_body(status: StatusCode, body: String) -> Result<Self> {
        if !status.is_success() {
            debug!("Non-success status {}: {}", status, body);
            return Ok(Self::failed(status, body));
        }

        let data = serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        Ok(Self {
            status,
            data: Some(data),
            raw: body,
        })
    }
}

/// Map a non-2xx status onto the matching [`ApiError`].
fn status_error(status: StatusCode, body: String) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(body),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        status if status.is_server_error() => ApiError::ServerError {
            status: status.as_u16(),
            body,
        },
        status if status.is_success() => {
            ApiError::InvalidResponse("Response carried no body".to_string())
        }
        status => ApiError::Status {
            status: status.as_u16(),
            body,
        },
    }
}

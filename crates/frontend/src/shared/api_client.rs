//! Generic authenticated JSON client over the backend API.
//!
//! All helpers resolve paths against [`endpoint`] and attach the stored
//! access token when one exists.

use contracts::common::ValidationErrorResponse;
use gloo_net::http::{Request, RequestBuilder};

use crate::system::session::storage;

/// Backend origin: current host, backend port 3000.
fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

fn endpoint(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Failure of a mutating API call.
///
/// GET helpers keep plain `String` errors; POST forms additionally need the
/// 422 body to route messages to individual fields.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// HTTP 422 with parsed per-field messages.
    Validation(ValidationErrorResponse),
    /// Transport errors, non-2xx statuses, malformed bodies.
    Other(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(_) => write!(f, "validation failed"),
            ApiError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// GET `path` and deserialize the JSON body.
pub async fn get_json<T>(path: &str) -> Result<T, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let response = with_auth(Request::get(&endpoint(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST `body` to `path` and deserialize the JSON response.
///
/// A 422 status is parsed into [`ApiError::Validation`] so the caller can
/// distribute messages to field slots; every other failure collapses into
/// [`ApiError::Other`].
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: for<'de> serde::Deserialize<'de>,
{
    let response = with_auth(Request::post(&endpoint(path)))
        .json(body)
        .map_err(|e| ApiError::Other(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Other(format!("Failed to send request: {}", e)))?;

    if response.status() == 422 {
        let parsed = response
            .json::<ValidationErrorResponse>()
            .await
            .map_err(|e| ApiError::Other(format!("Failed to parse response: {}", e)))?;
        return Err(ApiError::Validation(parsed));
    }

    if !response.ok() {
        return Err(ApiError::Other(format!(
            "Request failed: {}",
            response.status()
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Other(format!("Failed to parse response: {}", e)))
}

/// POST `body` to `path`, ignoring the response body.
///
/// For endpoints answering 2xx without content; 422 parses like
/// [`post_json`].
pub async fn post_no_content<B>(path: &str, body: &B) -> Result<(), ApiError>
where
    B: serde::Serialize,
{
    let response = with_auth(Request::post(&endpoint(path)))
        .json(body)
        .map_err(|e| ApiError::Other(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Other(format!("Failed to send request: {}", e)))?;

    if response.status() == 422 {
        let parsed = response
            .json::<ValidationErrorResponse>()
            .await
            .map_err(|e| ApiError::Other(format!("Failed to parse response: {}", e)))?;
        return Err(ApiError::Validation(parsed));
    }

    if !response.ok() {
        return Err(ApiError::Other(format!(
            "Request failed: {}",
            response.status()
        )));
    }

    Ok(())
}

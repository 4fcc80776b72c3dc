/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::error::ClientError;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, error};

/// Body attached to an outgoing request
#[derive(Debug, Clone, Copy)]
pub enum RequestBody<'a> {
    /// No body
    Empty,
    /// `application/x-www-form-urlencoded` fields
    Form(&'a [(&'a str, &'a str)]),
}

/// Error body returned by the catalog API
///
/// The server reports failures either as `{"detail": ".."}` or, for
/// validation errors, as `{"non_field_errors": [".."]}`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    /// Single error message
    pub detail: Option<String>,
    /// Validation messages not tied to a field
    pub non_field_errors: Option<Vec<String>>,
}

impl ErrorBody {
    /// First usable message in the body
    pub fn message(&self) -> Option<String> {
        if let Some(detail) = self.detail.as_ref().filter(|d| !d.trim().is_empty()) {
            return Some(detail.clone());
        }
        self.non_field_errors
            .as_ref()
            .and_then(|errors| errors.iter().find(|e| !e.trim().is_empty()))
            .cloned()
    }
}

/// Sends a single request and returns the response whatever its status
///
/// No retries: a transport failure is reported once as
/// [`ClientError::Transport`].
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Request body
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: RequestBody<'_>,
) -> Result<Response, ClientError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method.clone(), url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if let RequestBody::Form(fields) = body {
        request = request.form(fields);
    }

    match request.send().await {
        Ok(response) => {
            debug!("Response status: {}", response.status());
            Ok(response)
        }
        Err(e) => {
            let error = ClientError::from(e);
            error!("{} {} failed: {}", method, url, error);
            Err(error)
        }
    }
}

/// Passes successful responses through and turns the rest into a typed error
pub async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body);
    Err(ClientError::from_status(status, error_message(status, &body)))
}

/// Human readable message for a failed response
///
/// Prefers the server's own message, then the raw body, then the status
/// reason phrase.
pub fn error_message(status: StatusCode, body: &str) -> String {
    let from_server = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message());
    if let Some(message) = from_server {
        return message;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .map(String::from)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

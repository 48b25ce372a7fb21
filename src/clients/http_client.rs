//! HTTP client for Shopify API communication.
//!
//! This module provides the [`HttpClient`] type, which POSTs a JSON body to
//! an absolute endpoint URL and turns the reply into an [`HttpResponse`] or
//! an [`HttpError`]. One attempt per call; there is no retry loop.

use std::collections::HashMap;

use serde::Serialize;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Shopify API.
///
/// The client handles:
/// - Default headers (`User-Agent`, `Accept`, `Content-Type`)
/// - Merging per-request headers over the defaults
/// - Response header and body parsing
/// - Serializing error payloads from non-2xx responses
///
/// `HttpClient` is `Send + Sync`.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new() -> Result<Self, HttpError> {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("shopify-price-search v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// POSTs `body` as JSON to `endpoint`.
    ///
    /// `headers` are layered over the client defaults, so a caller-supplied
    /// `Content-Type` wins.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - the request cannot be sent or the connection fails (`Network`)
    /// - a non-2xx response is received (`Response`)
    /// - a 2xx body is not valid JSON (`Decode`)
    pub async fn post_json<B>(
        &self,
        endpoint: &str,
        body: &B,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let mut merged = self.default_headers.clone();
        for (key, value) in headers {
            merged.insert(key.clone(), value.clone());
        }

        let mut req_builder = self.client.post(endpoint);
        for (key, value) in &merged {
            req_builder = req_builder.header(key, value);
        }
        let req_builder = req_builder.body(serde_json::to_vec(body)?);

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let is_success = (200..=299).contains(&code);
        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else if is_success {
            serde_json::from_str(&body_text)?
        } else {
            // Error pages are often HTML; keep them for the error message
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                endpoint,
                reason
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes the server-provided error payload to a JSON string.
    ///
    /// Falls back to the status line when the body carried no error fields.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for field in ["errors", "error", "error_description", "raw_body"] {
            if let Some(value) = response.body.get(field) {
                error_body.insert(field.to_string(), value.clone());
            }
        }

        if error_body.is_empty() {
            let reason = reqwest::StatusCode::from_u16(response.code)
                .ok()
                .and_then(|status| status.canonical_reason())
                .unwrap_or("Unknown Status");
            return format!("{} {reason}", response.code);
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::Value::Object(error_body).to_string()
    }
}

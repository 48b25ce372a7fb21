//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: a non-2xx response from the API
//! - [`HttpError`]: unified error type for everything that can go wrong
//!   sending one request
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_price_search::clients::HttpError;
//!
//! match client.post_json(&endpoint, &body, &headers).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//!     Err(HttpError::Decode(e)) => println!("Bad JSON body: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// `message` holds the server-provided error payload serialized as JSON
/// (`errors`, `error`, `error_description`, `raw_body` and
/// `error_reference` fields, whichever were present). When the server sent
/// nothing useful it holds the status line instead.
///
/// # Example
///
/// ```rust
/// use shopify_price_search::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"errors":"Invalid API key or access token"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert!(error.to_string().starts_with("HTTP 401"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error payload, or the status line if there was none.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request body could not be encoded, or a successful response body
    /// was not valid JSON.
    #[error("Invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

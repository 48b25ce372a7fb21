//! GraphQL-specific error types.
//!
//! Only transport-level failures are errors here. GraphQL-level errors
//! (validation errors, access-denied messages) come back with HTTP 200 in the
//! body's `errors` field; the client logs them and still returns the body.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL API operations.
///
/// # Example
///
/// ```rust
/// use shopify_price_search::clients::graphql::GraphqlError;
/// use shopify_price_search::clients::{HttpError, HttpResponseError};
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 401,
///     message: r#"{"errors":"Unauthorized"}"#.to_string(),
///     error_reference: None,
/// });
/// let graphql_error: GraphqlError = http_error.into();
/// assert!(graphql_error.to_string().contains("Unauthorized"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    ///
    /// Covers network errors, non-2xx responses and undecodable bodies.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl GraphqlError {
    /// Returns the HTTP status code when the server answered with a non-2xx
    /// response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(HttpError::Response(e)) => Some(e.code),
            Self::Http(_) => None,
        }
    }
}

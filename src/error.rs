//! Configuration error types.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! bad environment is reported before any request is made. Error messages name
//! the offending variable or value and say what was expected.
//!
//! # Example
//!
//! ```rust
//! use shopify_price_search::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`SearchConfig`](crate::SearchConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An access token was provided but is empty.
    #[error("Access token cannot be empty. Please provide a valid Shopify access token.")]
    EmptyAccessToken,

    /// Store domain is invalid.
    #[error("Invalid store domain '{domain}'. Expected a host name with an optional port, such as 'my-store.myshopify.com'.")]
    InvalidStoreDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-07') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Host URL override is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://127.0.0.1:8080').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Environment variable '{name}' is not set. Add it to your environment or .env file.")]
    MissingEnvVar {
        /// The name of the missing variable.
        name: &'static str,
    },

    /// The token for the selected auth mode was never configured.
    #[error("No {mode} access token configured. Set {env_var} to search in {mode} mode.")]
    MissingAccessToken {
        /// The auth mode that needed the token.
        mode: &'static str,
        /// The environment variable that supplies it.
        env_var: &'static str,
    },
}

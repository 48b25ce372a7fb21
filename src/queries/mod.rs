//! GraphQL query builders, one per auth mode.
//!
//! Each builder turns a product name and a [`SearchConfig`] into a
//! [`QueryPlan`]: the fixed query document, its variables, the auth headers
//! and the absolute endpoint URL.
//!
//! | Mode       | Endpoint                                  | Token header                         |
//! |------------|-------------------------------------------|--------------------------------------|
//! | Admin      | `/admin/api/{version}/graphql.json`       | `X-Shopify-Access-Token`             |
//! | Storefront | `/api/{version}/graphql.json`             | `X-Shopify-Storefront-Access-Token`  |

pub mod admin;
pub mod storefront;

use std::collections::HashMap;

use crate::cli::{AuthMode, SearchRequest};
use crate::config::{AccessToken, SearchConfig};
use crate::error::ConfigError;

/// Maximum number of products requested per search.
pub const PRODUCT_LIMIT: u32 = 10;

/// Maximum number of variants requested per product.
pub const VARIANT_LIMIT: u32 = 10;

/// Everything needed to send one search query.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryPlan {
    /// The GraphQL document.
    pub query: &'static str,
    /// Variables for the document: `{"query": "title:<name>"}`.
    pub variables: serde_json::Value,
    /// Auth and content-type headers.
    pub headers: HashMap<String, String>,
    /// Absolute endpoint URL.
    pub endpoint: String,
}

impl QueryPlan {
    /// Builds the plan for `request` using the builder for its auth mode.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAccessToken`] if the token for the
    /// request's mode was not configured.
    pub fn for_request(config: &SearchConfig, request: &SearchRequest) -> Result<Self, ConfigError> {
        match request.auth_mode {
            AuthMode::Admin => admin::build(config, &request.product_name),
            AuthMode::Storefront => storefront::build(config, &request.product_name),
        }
    }
}

/// Builds the `title:<name>` search filter shared by both builders.
fn search_variables(product_name: &str) -> serde_json::Value {
    serde_json::json!({ "query": format!("title:{}", product_name.trim()) })
}

/// Builds the header map carrying `token` under `header_name`.
fn auth_headers(header_name: &str, token: &AccessToken) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert(header_name.to_string(), token.as_ref().to_string());
    headers
}

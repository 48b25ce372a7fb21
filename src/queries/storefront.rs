//! Storefront API predictive search.
//!
//! The Storefront API lives at `/api/{version}` (no `/admin` prefix) and
//! authenticates with a public storefront token.

use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::queries::{auth_headers, search_variables, QueryPlan};

/// HTTP header carrying the public storefront access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Predictive search for up to 10 products, each with up to 10 variants and
/// a `price { amount }` money object.
pub const PREDICTIVE_SEARCH_QUERY: &str = r"
query predictiveSearch($query: String!) {
  predictiveSearch(query: $query, limit: 10) {
    products {
      id
      title
      variants(first: 10) {
        edges {
          node {
            id
            title
            price {
              amount
            }
          }
        }
      }
    }
  }
}
";

/// Builds the storefront search for `product_name`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingAccessToken`] if no storefront token is configured.
pub fn build(config: &SearchConfig, product_name: &str) -> Result<QueryPlan, ConfigError> {
    let token = config.storefront_token()?;

    Ok(QueryPlan {
        query: PREDICTIVE_SEARCH_QUERY,
        variables: search_variables(product_name),
        headers: auth_headers(ACCESS_TOKEN_HEADER, token),
        endpoint: format!(
            "{}/api/{}/graphql.json",
            config.base_url(),
            config.api_version()
        ),
    })
}

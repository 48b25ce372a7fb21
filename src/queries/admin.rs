//! Admin API product search.

use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::queries::{auth_headers, search_variables, QueryPlan};

/// HTTP header carrying the admin access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Up to 10 products matching the filter, each with up to 10 variants and a
/// scalar `price`.
pub const PRODUCTS_QUERY: &str = r"
query Products($query: String!) {
  products(first: 10, query: $query) {
    edges {
      node {
        title
        variants(first: 10) {
          edges {
            node {
              title
              price
            }
          }
        }
      }
    }
  }
}
";

/// Builds the admin search for `product_name`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingAccessToken`] if no admin token is configured.
pub fn build(config: &SearchConfig, product_name: &str) -> Result<QueryPlan, ConfigError> {
    let token = config.admin_token()?;

    Ok(QueryPlan {
        query: PRODUCTS_QUERY,
        variables: search_variables(product_name),
        headers: auth_headers(ACCESS_TOKEN_HEADER, token),
        endpoint: format!(
            "{}/admin/api/{}/graphql.json",
            config.base_url(),
            config.api_version()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, StoreDomain};

    #[test]
    fn test_admin_plan() {
        let config = SearchConfig::builder()
            .store_domain(StoreDomain::new("test-shop.myshopify.com").unwrap())
            .admin_token(AccessToken::new("shpat_abc").unwrap())
            .build()
            .unwrap();

        let plan = build(&config, " snowboard ").unwrap();

        assert_eq!(
            plan.endpoint,
            "https://test-shop.myshopify.com/admin/api/2024-07/graphql.json"
        );
        assert_eq!(
            plan.headers.get("X-Shopify-Access-Token"),
            Some(&"shpat_abc".to_string())
        );
        assert_eq!(plan.variables["query"], "title:snowboard");
        assert!(plan.query.contains("products(first: 10, query: $query)"));
        assert!(plan.query.contains("variants(first: 10)"));
    }

    #[test]
    fn test_admin_plan_requires_admin_token() {
        let config = SearchConfig::builder()
            .store_domain(StoreDomain::new("test-shop").unwrap())
            .storefront_token(AccessToken::new("public").unwrap())
            .build()
            .unwrap();

        assert!(matches!(
            build(&config, "snowboard"),
            Err(ConfigError::MissingAccessToken { mode: "admin", .. })
        ));
    }
}

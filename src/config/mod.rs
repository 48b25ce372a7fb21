//! Configuration for a product search run.
//!
//! The store domain, access tokens and API version are read once at startup
//! into a [`SearchConfig`] which is then passed by reference to the query
//! builders. Nothing reads the process environment after that point.
//!
//! # Overview
//!
//! - [`SearchConfig`]: immutable settings for one run
//! - [`SearchConfigBuilder`]: builder for constructing a [`SearchConfig`]
//! - [`AccessToken`]: a validated token with masked debug output
//! - [`StoreDomain`]: a validated store host name
//! - [`HostUrl`]: an optional base URL override (proxy or test double)
//! - [`ApiVersion`]: the Shopify API version embedded in endpoint paths
//!
//! # Example
//!
//! ```rust
//! use shopify_price_search::{AccessToken, SearchConfig, StoreDomain};
//!
//! let config = SearchConfig::builder()
//!     .store_domain(StoreDomain::from_shop_name("my-store").unwrap())
//!     .admin_token(AccessToken::new("shpat_123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://my-store.myshopify.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl, StoreDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Environment variable holding the store domain.
pub const STORE_DOMAIN_ENV: &str = "STORE_DOMAIN";
/// Environment variable holding the admin API access token.
pub const ADMIN_TOKEN_ENV: &str = "ADMIN_TOKEN";
/// Environment variable holding the storefront API access token.
pub const STOREFRONT_TOKEN_ENV: &str = "STORE_FRONT_TOKEN";
/// Environment variable overriding the API version.
pub const API_VERSION_ENV: &str = "SHOPIFY_API_VERSION";
/// Environment variable overriding the endpoint scheme and host.
pub const API_HOST_ENV: &str = "SHOPIFY_API_HOST";

/// Settings for a single search run.
///
/// Both tokens are optional at construction time; the query builder for the
/// selected auth mode asks for its token and fails with
/// [`ConfigError::MissingAccessToken`] if it was never configured.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    store_domain: StoreDomain,
    admin_token: Option<AccessToken>,
    storefront_token: Option<AccessToken>,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
}

impl SearchConfig {
    /// Creates a new builder for constructing a `SearchConfig`.
    #[must_use]
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }

    /// Reads the configuration from the process environment.
    ///
    /// Call [`dotenv::dotenv`] first if values should also come from a
    /// `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `STORE_DOMAIN` is unset, or
    /// a validation error for any malformed value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Variables that are set but blank are treated as unset.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let store_domain = read(STORE_DOMAIN_ENV).ok_or(ConfigError::MissingEnvVar {
            name: STORE_DOMAIN_ENV,
        })?;

        let mut builder = Self::builder().store_domain(StoreDomain::new(store_domain)?);

        if let Some(token) = read(ADMIN_TOKEN_ENV) {
            builder = builder.admin_token(AccessToken::new(token)?);
        }
        if let Some(token) = read(STOREFRONT_TOKEN_ENV) {
            builder = builder.storefront_token(AccessToken::new(token)?);
        }
        if let Some(version) = read(API_VERSION_ENV) {
            builder = builder.api_version(version.parse()?);
        }
        if let Some(host) = read(API_HOST_ENV) {
            builder = builder.api_host(HostUrl::new(host)?);
        }

        builder.build()
    }

    /// Returns the store domain.
    #[must_use]
    pub const fn store_domain(&self) -> &StoreDomain {
        &self.store_domain
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the base URL override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the scheme and authority every endpoint is built on.
    ///
    /// This is the `api_host` override when set, otherwise
    /// `https://{store_domain}`.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.api_host.as_ref().map_or_else(
            || format!("https://{}", self.store_domain),
            |host| host.as_ref().to_string(),
        )
    }

    /// Returns the admin access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAccessToken`] if no admin token was set.
    pub fn admin_token(&self) -> Result<&AccessToken, ConfigError> {
        self.admin_token
            .as_ref()
            .ok_or(ConfigError::MissingAccessToken {
                mode: "admin",
                env_var: ADMIN_TOKEN_ENV,
            })
    }

    /// Returns the storefront access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAccessToken`] if no storefront token was set.
    pub fn storefront_token(&self) -> Result<&AccessToken, ConfigError> {
        self.storefront_token
            .as_ref()
            .ok_or(ConfigError::MissingAccessToken {
                mode: "storefront",
                env_var: STOREFRONT_TOKEN_ENV,
            })
    }
}

// Verify SearchConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SearchConfig>();
};

/// Builder for constructing [`SearchConfig`] instances.
///
/// `store_domain` is required. The API version defaults to `2024-07`.
#[derive(Debug, Default)]
pub struct SearchConfigBuilder {
    store_domain: Option<StoreDomain>,
    admin_token: Option<AccessToken>,
    storefront_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
}

impl SearchConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store domain (required).
    #[must_use]
    pub fn store_domain(mut self, domain: StoreDomain) -> Self {
        self.store_domain = Some(domain);
        self
    }

    /// Sets the admin access token.
    #[must_use]
    pub fn admin_token(mut self, token: AccessToken) -> Self {
        self.admin_token = Some(token);
        self
    }

    /// Sets the storefront access token.
    #[must_use]
    pub fn storefront_token(mut self, token: AccessToken) -> Self {
        self.storefront_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes every request to `host` instead of `https://{store_domain}`.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Builds the [`SearchConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_domain` is not set.
    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        let store_domain = self
            .store_domain
            .ok_or(ConfigError::MissingRequiredField {
                field: "store_domain",
            })?;

        Ok(SearchConfig {
            store_domain,
            admin_token: self.admin_token,
            storefront_token: self.storefront_token,
            api_version: self.api_version.unwrap_or_default(),
            api_host: self.api_host,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_builder_requires_store_domain() {
        let result = SearchConfigBuilder::new()
            .admin_token(AccessToken::new("token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "store_domain"
            })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = SearchConfig::builder()
            .store_domain(StoreDomain::from_shop_name("test-shop").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::V2024_07);
        assert!(config.api_host().is_none());
        assert_eq!(config.base_url(), "https://test-shop.myshopify.com");
    }

    #[test]
    fn test_missing_tokens_report_mode_and_variable() {
        let config = SearchConfig::builder()
            .store_domain(StoreDomain::new("test-shop").unwrap())
            .build()
            .unwrap();

        assert!(matches!(
            config.admin_token(),
            Err(ConfigError::MissingAccessToken {
                mode: "admin",
                env_var: "ADMIN_TOKEN"
            })
        ));
        assert!(matches!(
            config.storefront_token(),
            Err(ConfigError::MissingAccessToken {
                mode: "storefront",
                env_var: "STORE_FRONT_TOKEN"
            })
        ));
    }

    #[test]
    fn test_api_host_overrides_base_url() {
        let config = SearchConfig::builder()
            .store_domain(StoreDomain::new("test-shop").unwrap())
            .api_host(HostUrl::new("http://127.0.0.1:9999").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = SearchConfig::from_lookup(lookup_from(&[
            ("STORE_DOMAIN", "shop.example.com"),
            ("ADMIN_TOKEN", "admin-token"),
            ("STORE_FRONT_TOKEN", "storefront-token"),
            ("SHOPIFY_API_VERSION", "2025-01"),
            ("SHOPIFY_API_HOST", "http://localhost:4000"),
        ]))
        .unwrap();

        assert_eq!(config.store_domain().as_ref(), "shop.example.com");
        assert_eq!(config.admin_token().unwrap().as_ref(), "admin-token");
        assert_eq!(
            config.storefront_token().unwrap().as_ref(),
            "storefront-token"
        );
        assert_eq!(config.api_version(), &ApiVersion::V2025_01);
        assert_eq!(config.base_url(), "http://localhost:4000");
    }

    #[test]
    fn test_from_lookup_requires_store_domain() {
        let result = SearchConfig::from_lookup(lookup_from(&[("ADMIN_TOKEN", "token")]));

        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvVar {
                name: "STORE_DOMAIN"
            })
        ));
    }

    #[test]
    fn test_from_lookup_treats_blank_values_as_unset() {
        let config = SearchConfig::from_lookup(lookup_from(&[
            ("STORE_DOMAIN", "test-shop"),
            ("ADMIN_TOKEN", "  "),
        ]))
        .unwrap();

        assert!(config.admin_token().is_err());
    }

    #[test]
    fn test_from_lookup_rejects_malformed_version() {
        let result = SearchConfig::from_lookup(lookup_from(&[
            ("STORE_DOMAIN", "test-shop"),
            ("SHOPIFY_API_VERSION", "latest"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidApiVersion { .. })
        ));
    }
}

//! Validated newtype wrappers for configuration values.
//!
//! These wrap raw strings read from the environment and validate them on
//! construction, so a malformed `.env` fails before any request is sent.

use crate::error::ConfigError;
use std::fmt;

/// A Shopify access token (admin or storefront).
///
/// The `Debug` implementation masks the value so tokens never end up in logs.
///
/// # Example
///
/// ```rust
/// use shopify_price_search::AccessToken;
///
/// let token = AccessToken::new("shpat_secret").unwrap();
/// assert_eq!(token.as_ref(), "shpat_secret");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token.to_string()))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// The host (and optional port) of the store both endpoints are built from.
///
/// The trimmed value is used exactly as given, so the endpoints are
/// `https://{domain}/...`. Use [`StoreDomain::from_shop_name`] to expand a
/// bare shop name to its `myshopify.com` host.
///
/// # Example
///
/// ```rust
/// use shopify_price_search::StoreDomain;
///
/// let domain = StoreDomain::new("shop.example.com:8443").unwrap();
/// assert_eq!(domain.as_ref(), "shop.example.com:8443");
///
/// let domain = StoreDomain::from_shop_name("my-store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreDomain(String);

impl StoreDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated store domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreDomain`] if the value is empty,
    /// carries a scheme or path, has a malformed port, or contains
    /// characters not valid in a host.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into();
        let domain = domain.trim().to_string();

        let (host, port) = match domain.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (domain.as_str(), None),
        };

        if !Self::is_valid_host(host) || !port.map_or(true, Self::is_valid_port) {
            return Err(ConfigError::InvalidStoreDomain { domain });
        }

        Ok(Self(domain))
    }

    /// Creates a store domain from a shop name.
    ///
    /// A name without any dot is expanded to `{name}.myshopify.com`;
    /// anything else is handled like [`StoreDomain::new`].
    ///
    /// # Errors
    ///
    /// Same as [`StoreDomain::new`].
    pub fn from_shop_name(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let name = name.trim().to_lowercase();

        if name.is_empty() || name.contains(['.', ':']) {
            Self::new(name)
        } else {
            Self::new(format!("{name}{}", Self::SUFFIX))
        }
    }

    fn is_valid_host(host: &str) -> bool {
        if host.is_empty() || host.starts_with(['-', '.']) || host.ends_with(['-', '.']) {
            return false;
        }

        host.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    }

    fn is_valid_port(port: &str) -> bool {
        !port.is_empty()
            && port.chars().all(|c| c.is_ascii_digit())
            && port.parse::<u16>().is_ok_and(|port| port != 0)
    }
}

impl AsRef<str> for StoreDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated base URL overriding `https://{store domain}`.
///
/// Used to route requests through a proxy or at a local test double. The URL
/// is kept as given apart from a trailing slash, so a path prefix such as
/// `http://proxy:8080/shopify` is preserved in front of the API paths.
///
/// # Example
///
/// ```rust
/// use shopify_price_search::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("127.0.0.1"));
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or
    /// no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_store_domain_keeps_value_as_given() {
        let domain = StoreDomain::new("  shop.example.com ").unwrap();
        assert_eq!(domain.as_ref(), "shop.example.com");
        assert_eq!(domain.to_string(), "shop.example.com");

        let domain = StoreDomain::new("localhost").unwrap();
        assert_eq!(domain.as_ref(), "localhost");
    }

    #[test]
    fn test_store_domain_accepts_port() {
        let domain = StoreDomain::new("shop.example.com:8443").unwrap();
        assert_eq!(domain.as_ref(), "shop.example.com:8443");
    }

    #[test]
    fn test_store_domain_from_shop_name_expands_bare_names() {
        let domain = StoreDomain::from_shop_name("My-Store").unwrap();
        assert_eq!(domain.as_ref(), "my-store.myshopify.com");

        let domain = StoreDomain::from_shop_name("shop.example.com").unwrap();
        assert_eq!(domain.as_ref(), "shop.example.com");
    }

    #[test]
    fn test_store_domain_rejects_invalid_domains() {
        assert!(StoreDomain::new("").is_err());
        assert!(StoreDomain::new("my store").is_err());
        assert!(StoreDomain::new("https://my-store.myshopify.com").is_err());
        assert!(StoreDomain::new("my-store.myshopify.com/admin").is_err());
        assert!(StoreDomain::new("-my-store").is_err());
        assert!(StoreDomain::new("my-store.").is_err());
        assert!(StoreDomain::new("shop.example.com:").is_err());
        assert!(StoreDomain::new("shop.example.com:0").is_err());
        assert!(StoreDomain::new("shop.example.com:99999").is_err());
        assert!(StoreDomain::new(":8443").is_err());
        assert!(StoreDomain::from_shop_name("").is_err());
    }

    #[test]
    fn test_host_url_keeps_path_prefix() {
        let url = HostUrl::new("http://proxy.internal:8080/shopify/").unwrap();
        assert_eq!(url.as_ref(), "http://proxy.internal:8080/shopify");
        assert_eq!(url.host_name(), Some("proxy.internal"));
    }

    #[test]
    fn test_host_url_validates_format() {
        let url = HostUrl::new("https://proxy.example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("proxy.example.com"));

        let url = HostUrl::new("http://localhost:3000/").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("localhost"));
        assert_eq!(url.as_ref(), "http://localhost:3000");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("proxy.example.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://example.com").is_err());
        assert!(HostUrl::new("http://:8080").is_err());
    }
}

//! Command-line argument interpretation.
//!
//! The command line is free text: every token that does not start with `-`
//! is part of the product name, and `--use-storefront` anywhere switches to
//! storefront mode. Other dash-prefixed tokens are ignored.

use std::fmt;

/// The flag that selects storefront mode.
pub const USE_STOREFRONT_FLAG: &str = "--use-storefront";

/// Which API and token a search goes through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Admin API with the admin access token.
    #[default]
    Admin,
    /// Storefront API predictive search with the storefront access token.
    Storefront,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("admin"),
            Self::Storefront => f.write_str("storefront"),
        }
    }
}

/// A product search parsed from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    /// The free-text product name, possibly empty.
    pub product_name: String,
    /// The API to search through.
    pub auth_mode: AuthMode,
}

impl SearchRequest {
    /// Builds a request from CLI tokens, excluding the program name.
    ///
    /// No validation is done: an empty product name is passed through.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_price_search::{AuthMode, SearchRequest};
    ///
    /// let request = SearchRequest::from_args(["blue", "--use-storefront", "shirt"]);
    /// assert_eq!(request.product_name, "blue shirt");
    /// assert_eq!(request.auth_mode, AuthMode::Storefront);
    /// ```
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut auth_mode = AuthMode::Admin;

        for arg in args {
            let arg = arg.as_ref();
            if arg == USE_STOREFRONT_FLAG {
                auth_mode = AuthMode::Storefront;
            }
            if !arg.starts_with('-') {
                words.push(arg.to_string());
            }
        }

        Self {
            product_name: words.join(" ").trim().to_string(),
            auth_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_positional_tokens_in_order() {
        let request = SearchRequest::from_args(["red", "wool", "scarf"]);
        assert_eq!(request.product_name, "red wool scarf");
        assert_eq!(request.auth_mode, AuthMode::Admin);
    }

    #[test]
    fn test_flag_position_does_not_matter() {
        for args in [
            vec!["--use-storefront", "red", "scarf"],
            vec!["red", "--use-storefront", "scarf"],
            vec!["red", "scarf", "--use-storefront"],
        ] {
            let request = SearchRequest::from_args(&args);
            assert_eq!(request.product_name, "red scarf");
            assert_eq!(request.auth_mode, AuthMode::Storefront);
        }
    }

    #[test]
    fn test_other_dash_tokens_are_dropped_without_switching_mode() {
        let request = SearchRequest::from_args(["-v", "scarf", "--use-store", "--verbose"]);
        assert_eq!(request.product_name, "scarf");
        assert_eq!(request.auth_mode, AuthMode::Admin);
    }

    #[test]
    fn test_empty_arguments_give_empty_name() {
        let request = SearchRequest::from_args(Vec::<String>::new());
        assert_eq!(request.product_name, "");
        assert_eq!(request.auth_mode, AuthMode::Admin);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let request = SearchRequest::from_args(["  ", "scarf ", ""]);
        assert_eq!(request.product_name, "scarf");
    }

    #[test]
    fn test_inner_whitespace_in_a_token_is_kept() {
        let request = SearchRequest::from_args(["red  wool"]);
        assert_eq!(request.product_name, "red  wool");
    }

    #[test]
    fn test_auth_mode_display() {
        assert_eq!(AuthMode::Admin.to_string(), "admin");
        assert_eq!(AuthMode::Storefront.to_string(), "storefront");
    }
}

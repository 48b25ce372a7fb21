//! # Shopify Price Search
//!
//! Searches a Shopify store for products by name and lists every variant of
//! every match, sorted by price.
//!
//! ## Overview
//!
//! A search runs through one of two APIs:
//! - **Admin mode** (default): the Admin GraphQL `products` query, authenticated
//!   with the private admin token.
//! - **Storefront mode** (`--use-storefront`): Storefront API predictive search,
//!   authenticated with the public storefront token.
//!
//! Both return up to 10 products with up to 10 variants each. The variants are
//! flattened into [`ProductVariantRecord`]s, sorted ascending by price and
//! printed one per line:
//!
//! ```text
//! Snowboard - Small - price $10
//! Snowboard - Large - price $29.99
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_price_search::{AccessToken, SearchConfig, SearchRequest, StoreDomain};
//!
//! let config = SearchConfig::builder()
//!     .store_domain(StoreDomain::from_shop_name("my-store").unwrap())
//!     .admin_token(AccessToken::new("shpat_xxx").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let request = SearchRequest::from_args(["snowboard"]);
//! assert_eq!(config.base_url(), "https://my-store.myshopify.com");
//! assert_eq!(request.product_name, "snowboard");
//! ```
//!
//! ## Running a Search
//!
//! ```rust,ignore
//! use shopify_price_search::{ProductSearch, SearchConfig, SearchRequest};
//!
//! let config = SearchConfig::from_env()?;
//! let request = SearchRequest::from_args(std::env::args().skip(1));
//!
//! let search = ProductSearch::new(&config)?;
//! search.run(&request, &mut std::io::stdout().lock()).await?;
//! ```
//!
//! ## Normalizing a Response
//!
//! ```rust
//! use serde_json::json;
//! use shopify_price_search::AuthMode;
//! use shopify_price_search::products::{extract_products, normalize};
//!
//! let body = json!({"data": {"products": {"edges": [
//!     {"node": {"title": "Hat", "variants": {"edges": [
//!         {"node": {"title": "Large", "price": "20.00"}},
//!         {"node": {"title": "Small", "price": "12.50"}}
//!     ]}}}
//! ]}}});
//!
//! let products = extract_products(AuthMode::Admin, body).unwrap();
//! let lines: Vec<String> = normalize(&products).iter().map(ToString::to_string).collect();
//! assert_eq!(lines, ["Hat - Small - price $12.5", "Hat - Large - price $20"]);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is read once and passed by reference
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Typed failures**: an empty result and a failed request are distinct outcomes

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod logging;
pub mod products;
pub mod queries;
pub mod search;

// Re-export public types at crate root for convenience
pub use cli::{AuthMode, SearchRequest};
pub use config::{AccessToken, ApiVersion, HostUrl, SearchConfig, SearchConfigBuilder, StoreDomain};
pub use error::ConfigError;

pub use clients::{
    GraphqlClient, GraphqlError, HttpClient, HttpError, HttpResponse, HttpResponseError,
};

pub use products::{ProductVariantRecord, SearchedProduct};
pub use queries::QueryPlan;
pub use search::{ProductSearch, SearchError, SearchOutcome, NO_PRODUCTS_MESSAGE};

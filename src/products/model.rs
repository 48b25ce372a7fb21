//! Typed views of the two product search response shapes.
//!
//! Admin responses nest products in a connection
//! (`data.products.edges[].node`) and carry a scalar variant `price`.
//! Storefront predictive search returns a plain list
//! (`data.predictiveSearch.products[]`) whose variant prices are money
//! objects (`price.amount`). Both nest variants in a connection.
//!
//! Nullable or absent fields deserialize to `None`; the normalizer decides
//! what they mean. Fields of the wrong JSON type are decoding errors.

use serde::Deserialize;

/// A GraphQL connection: `{ edges: [{ node: T }] }`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Connection<T> {
    /// The edges of this page.
    pub edges: Option<Vec<Edge<T>>>,
}

impl<T> Connection<T> {
    /// Iterates over the nodes of every edge, skipping edges without one.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().flatten().filter_map(|edge| edge.node.as_ref())
    }
}

/// One edge of a [`Connection`].
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Edge<T> {
    /// The node wrapped by this edge, absent in truncated responses.
    pub node: Option<T>,
}

/// Root of an admin `products` response.
#[derive(Debug, Deserialize)]
pub struct AdminResponse {
    /// The `data` member, absent when the query failed entirely.
    pub data: Option<AdminData>,
}

/// `data` of an admin `products` response.
#[derive(Debug, Deserialize)]
pub struct AdminData {
    /// The product connection.
    pub products: Option<Connection<AdminProduct>>,
}

/// A product as returned by the admin API.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AdminProduct {
    /// Product title.
    pub title: Option<String>,
    /// Up to ten variants.
    pub variants: Option<Connection<AdminVariant>>,
}

/// A product variant as returned by the admin API.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AdminVariant {
    /// Variant title, e.g. `"Small / Red"`.
    pub title: Option<String>,
    /// Decimal price, usually a string such as `"19.99"`.
    pub price: Option<serde_json::Value>,
}

/// Root of a storefront `predictiveSearch` response.
#[derive(Debug, Deserialize)]
pub struct StorefrontResponse {
    /// The `data` member, absent when the query failed entirely.
    pub data: Option<StorefrontData>,
}

/// `data` of a storefront `predictiveSearch` response.
#[derive(Debug, Deserialize)]
pub struct StorefrontData {
    /// The predictive search result.
    #[serde(rename = "predictiveSearch")]
    pub predictive_search: Option<PredictiveSearch>,
}

/// The `predictiveSearch` result object.
#[derive(Debug, Deserialize)]
pub struct PredictiveSearch {
    /// Matching products.
    pub products: Option<Vec<StorefrontProduct>>,
}

/// A product as returned by storefront predictive search.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StorefrontProduct {
    /// Global ID, e.g. `gid://shopify/Product/1`.
    pub id: Option<String>,
    /// Product title.
    pub title: Option<String>,
    /// Up to ten variants.
    pub variants: Option<Connection<StorefrontVariant>>,
}

/// A product variant as returned by the storefront API.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StorefrontVariant {
    /// Global ID of the variant.
    pub id: Option<String>,
    /// Variant title.
    pub title: Option<String>,
    /// Price money object.
    pub price: Option<MoneyV2>,
}

/// A storefront money object.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MoneyV2 {
    /// Decimal amount, usually a string such as `"15.50"`.
    pub amount: Option<serde_json::Value>,
}

//! Product normalization and price sorting.
//!
//! A search response is decoded into [`SearchedProduct`]s using the shape
//! that matches the [`AuthMode`] which produced it. Each product is then
//! flattened into one [`ProductVariantRecord`] per variant, and the records
//! are sorted by price, cheapest first.
//!
//! # Unpriced variants
//!
//! A variant whose price is absent, not a number, or not finite has a price
//! of `None`. Such records always sort after every priced record and keep
//! their relative order. They render as `price $NaN`.
//!
//! # Example
//!
//! ```rust
//! use shopify_price_search::products::{extract_products, normalize};
//! use shopify_price_search::AuthMode;
//! use serde_json::json;
//!
//! let body = json!({"data": {"predictiveSearch": {"products": [
//!     {"title": "Shirt", "variants": {"edges": [
//!         {"node": {"title": "L", "price": {"amount": "20.0"}}},
//!         {"node": {"title": "S", "price": {"amount": "15.50"}}}
//!     ]}}
//! ]}}});
//!
//! let products = extract_products(AuthMode::Storefront, body).unwrap();
//! let lines: Vec<String> = normalize(&products).iter().map(ToString::to_string).collect();
//! assert_eq!(lines, ["Shirt - S - price $15.5", "Shirt - L - price $20"]);
//! ```

pub mod model;

use std::cmp::Ordering;
use std::fmt;

use crate::cli::AuthMode;
use model::{AdminProduct, AdminResponse, StorefrontProduct, StorefrontResponse};

/// A product from either search shape.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchedProduct {
    /// A product from the admin `products` connection.
    Admin(AdminProduct),
    /// A product from storefront predictive search.
    Storefront(StorefrontProduct),
}

impl SearchedProduct {
    /// Returns the product title, or `""` if the response omitted it.
    #[must_use]
    pub fn title(&self) -> &str {
        let title = match self {
            Self::Admin(product) => product.title.as_deref(),
            Self::Storefront(product) => product.title.as_deref(),
        };
        title.unwrap_or_default()
    }

    /// Returns the number of variants on this product.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        match self {
            Self::Admin(product) => product.variants.as_ref().map_or(0, |v| v.nodes().count()),
            Self::Storefront(product) => {
                product.variants.as_ref().map_or(0, |v| v.nodes().count())
            }
        }
    }

    /// Flattens this product into one record per variant, in response order.
    #[must_use]
    pub fn variant_records(&self) -> Vec<ProductVariantRecord> {
        match self {
            Self::Admin(product) => admin_records(product),
            Self::Storefront(product) => storefront_records(product),
        }
    }
}

fn admin_records(product: &AdminProduct) -> Vec<ProductVariantRecord> {
    let product_name = product.title.clone().unwrap_or_default();
    product
        .variants
        .iter()
        .flat_map(model::Connection::nodes)
        .map(|variant| ProductVariantRecord {
            product_name: product_name.clone(),
            variant_name: variant.title.clone().unwrap_or_default(),
            price: variant.price.as_ref().and_then(parse_price),
        })
        .collect()
}

fn storefront_records(product: &StorefrontProduct) -> Vec<ProductVariantRecord> {
    let product_name = product.title.clone().unwrap_or_default();
    product
        .variants
        .iter()
        .flat_map(model::Connection::nodes)
        .map(|variant| ProductVariantRecord {
            product_name: product_name.clone(),
            variant_name: variant.title.clone().unwrap_or_default(),
            price: variant
                .price
                .as_ref()
                .and_then(|money| money.amount.as_ref())
                .and_then(parse_price),
        })
        .collect()
}

/// Decodes the product list out of a search response body.
///
/// A missing `data`, product list or connection at any level yields an
/// empty list.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if a member has the wrong JSON type
/// (e.g., a numeric title or a string where the variant connection belongs).
pub fn extract_products(
    mode: AuthMode,
    body: serde_json::Value,
) -> Result<Vec<SearchedProduct>, serde_json::Error> {
    let products = match mode {
        AuthMode::Admin => {
            let response: AdminResponse = serde_json::from_value(body)?;
            response
                .data
                .and_then(|data| data.products)
                .and_then(|connection| connection.edges)
                .unwrap_or_default()
                .into_iter()
                .filter_map(|edge| edge.node.map(SearchedProduct::Admin))
                .collect()
        }
        AuthMode::Storefront => {
            let response: StorefrontResponse = serde_json::from_value(body)?;
            response
                .data
                .and_then(|data| data.predictive_search)
                .and_then(|search| search.products)
                .unwrap_or_default()
                .into_iter()
                .map(SearchedProduct::Storefront)
                .collect()
        }
    };

    Ok(products)
}

/// One variant of one product, with its parsed price.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductVariantRecord {
    /// Title of the product the variant belongs to.
    pub product_name: String,
    /// Title of the variant.
    pub variant_name: String,
    /// Parsed price, `None` when unpriced.
    pub price: Option<f64>,
}

impl fmt::Display for ProductVariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - price $", self.product_name, self.variant_name)?;
        match self.price {
            Some(price) => f.write_str(&format_price(price)),
            None => f.write_str("NaN"),
        }
    }
}

/// Renders a price in shortest round-trip form.
///
/// Magnitudes of `1e21` and above, or below `1e-6`, switch to exponent
/// notation with an explicit sign (`1e+21`, `5e-7`). Negative zero prints
/// as `0`.
#[must_use]
pub fn format_price(price: f64) -> String {
    // -0.0 + 0.0 is +0.0
    let price = price + 0.0;
    let magnitude = price.abs();

    if magnitude >= 1e21 || (magnitude > 0.0 && magnitude < 1e-6) {
        let exponent_form = format!("{price:e}");
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exponent_form,
        };
    }

    price.to_string()
}

/// Parses a price from a JSON number or a decimal string.
///
/// Returns `None` for anything else, including non-finite values.
#[must_use]
pub fn parse_price(value: &serde_json::Value) -> Option<f64> {
    let price = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    price.is_finite().then_some(price)
}

/// Orders prices ascending with unpriced values last.
#[must_use]
pub fn compare_prices(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Flattens every product's variants into one list sorted by price.
///
/// The sort is stable: records with equal prices keep response order.
#[must_use]
pub fn normalize(products: &[SearchedProduct]) -> Vec<ProductVariantRecord> {
    let mut records: Vec<ProductVariantRecord> = products
        .iter()
        .flat_map(SearchedProduct::variant_records)
        .collect();

    records.sort_by(|a, b| compare_prices(a.price, b.price));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn admin_body(products: &[(&str, Vec<(&str, serde_json::Value)>)]) -> serde_json::Value {
        let edges: Vec<_> = products
            .iter()
            .map(|(title, variants)| {
                let variant_edges: Vec<_> = variants
                    .iter()
                    .map(|(name, price)| json!({"node": {"title": name, "price": price}}))
                    .collect();
                json!({"node": {"title": title, "variants": {"edges": variant_edges}}})
            })
            .collect();
        json!({"data": {"products": {"edges": edges}}})
    }

    #[test]
    fn test_admin_prices_sort_ascending_with_names_preserved() {
        let body = admin_body(&[(
            "Snowboard",
            vec![
                ("Large", json!("30")),
                ("Small", json!("10")),
                ("Medium", json!("20")),
            ],
        )]);

        let products = extract_products(AuthMode::Admin, body).unwrap();
        let lines: Vec<String> = normalize(&products).iter().map(ToString::to_string).collect();

        assert_eq!(
            lines,
            [
                "Snowboard - Small - price $10",
                "Snowboard - Medium - price $20",
                "Snowboard - Large - price $30",
            ]
        );
    }

    #[test]
    fn test_records_span_all_products_and_are_sorted() {
        let body = admin_body(&[
            ("A", vec![("a1", json!("5.25")), ("a2", json!(99))]),
            ("B", vec![("b1", json!("0")), ("b2", json!("42.10")), ("b3", json!("5.25"))]),
            ("C", vec![]),
        ]);

        let products = extract_products(AuthMode::Admin, body).unwrap();
        let total: usize = products.iter().map(SearchedProduct::variant_count).sum();
        let records = normalize(&products);

        assert_eq!(records.len(), total);
        assert_eq!(records.len(), 5);
        assert!(records
            .windows(2)
            .all(|pair| compare_prices(pair[0].price, pair[1].price) != Ordering::Greater));
    }

    #[test]
    fn test_equal_prices_keep_response_order() {
        let body = admin_body(&[
            ("A", vec![("first", json!("5.00"))]),
            ("B", vec![("second", json!("5")), ("cheap", json!("1"))]),
        ]);

        let products = extract_products(AuthMode::Admin, body).unwrap();
        let names: Vec<_> = normalize(&products)
            .into_iter()
            .map(|r| r.variant_name)
            .collect();

        assert_eq!(names, ["cheap", "first", "second"]);
    }

    #[test]
    fn test_storefront_amount_parses_to_float() {
        let body = json!({"data": {"predictiveSearch": {"products": [
            {"id": "gid://shopify/Product/1", "title": "Tee", "variants": {"edges": [
                {"node": {"id": "gid://shopify/ProductVariant/1", "title": "Default Title", "price": {"amount": "15.50"}}}
            ]}}
        ]}}});

        let products = extract_products(AuthMode::Storefront, body).unwrap();
        let records = normalize(&products);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].price, Some(15.5));
        assert_eq!(records[0].product_name, "Tee");
        assert_eq!(records[0].to_string(), "Tee - Default Title - price $15.5");
    }

    #[test]
    fn test_unpriced_variants_sort_last_and_render_nan() {
        let body = admin_body(&[(
            "Mug",
            vec![
                ("missing", serde_json::Value::Null),
                ("priced", json!("12.00")),
                ("garbage", json!("free")),
                ("cheaper", json!(3.5)),
            ],
        )]);

        let products = extract_products(AuthMode::Admin, body).unwrap();
        let lines: Vec<String> = normalize(&products).iter().map(ToString::to_string).collect();

        assert_eq!(
            lines,
            [
                "Mug - cheaper - price $3.5",
                "Mug - priced - price $12",
                "Mug - missing - price $NaN",
                "Mug - garbage - price $NaN",
            ]
        );
    }

    #[test]
    fn test_variant_edges_without_node_are_skipped() {
        let body = json!({"data": {"products": {"edges": [
            {},
            {"node": {"title": "Boot", "variants": {"edges": [
                {},
                {"node": {"title": "Tall", "price": "80.00"}}
            ]}}}
        ]}}});

        let products = extract_products(AuthMode::Admin, body).unwrap();
        let lines: Vec<String> = normalize(&products).iter().map(ToString::to_string).collect();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].variant_count(), 1);
        assert_eq!(lines, ["Boot - Tall - price $80"]);
    }

    #[test]
    fn test_format_price_edge_values() {
        assert_eq!(format_price(-0.0), "0");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(29.99), "29.99");
        assert_eq!(format_price(1e21), "1e+21");
        assert_eq!(format_price(1.5e22), "1.5e+22");
        assert_eq!(format_price(123_456_789_012.0), "123456789012");
        assert_eq!(format_price(5e-7), "5e-7");
        assert_eq!(format_price(0.000_001), "0.000001");
        assert_eq!(format_price(-2.5), "-2.5");
    }

    #[test]
    fn test_negative_zero_and_huge_prices_render_in_short_form() {
        let body = admin_body(&[(
            "X",
            vec![("big", json!("1e21")), ("nz", json!("-0"))],
        )]);

        let products = extract_products(AuthMode::Admin, body).unwrap();
        let lines: Vec<String> = normalize(&products).iter().map(ToString::to_string).collect();

        assert_eq!(lines, ["X - nz - price $0", "X - big - price $1e+21"]);
    }

    #[test]
    fn test_missing_paths_yield_no_products() {
        for body in [
            json!({}),
            json!({"data": null}),
            json!({"data": {"products": null}}),
            json!({"data": {"products": {"edges": []}}}),
        ] {
            assert!(extract_products(AuthMode::Admin, body).unwrap().is_empty());
        }

        for body in [
            json!({"data": {}}),
            json!({"data": {"predictiveSearch": null}}),
            json!({"data": {"predictiveSearch": {"products": []}}}),
        ] {
            assert!(extract_products(AuthMode::Storefront, body)
                .unwrap()
                .is_empty());
        }
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let body = json!({"data": {"predictiveSearch": {"products": {"edges": []}}}});
        assert!(extract_products(AuthMode::Storefront, body).is_err());
    }

    #[test]
    fn test_parse_price_accepts_numbers_and_decimal_strings() {
        assert_eq!(parse_price(&json!("19.99")), Some(19.99));
        assert_eq!(parse_price(&json!(" 7 ")), Some(7.0));
        assert_eq!(parse_price(&json!(0)), Some(0.0));
        assert_eq!(parse_price(&json!(12.5)), Some(12.5));
        assert_eq!(parse_price(&json!("abc")), None);
        assert_eq!(parse_price(&json!("inf")), None);
        assert_eq!(parse_price(&json!("NaN")), None);
        assert_eq!(parse_price(&json!(true)), None);
        assert_eq!(parse_price(&json!({"amount": "1"})), None);
    }

    #[test]
    fn test_product_without_title_renders_empty_name() {
        let body = json!({"data": {"products": {"edges": [
            {"node": {"variants": {"edges": [{"node": {"title": "Only", "price": "1"}}]}}}
        ]}}});

        let products = extract_products(AuthMode::Admin, body).unwrap();
        assert_eq!(products[0].title(), "");
        assert_eq!(normalize(&products)[0].to_string(), " - Only - price $1");
    }
}

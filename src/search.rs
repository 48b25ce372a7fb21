//! End-to-end product search.
//!
//! [`ProductSearch`] wires the pieces together: pick the query builder for
//! the request's [`AuthMode`], send the query, decode the products with the
//! matching response shape, then print the sorted variant lines.
//!
//! An empty result is a normal outcome and prints [`NO_PRODUCTS_MESSAGE`].
//! A failed request is an error and prints nothing.

use std::io::Write;

use thiserror::Error;

use crate::cli::{AuthMode, SearchRequest};
use crate::clients::graphql::{GraphqlClient, GraphqlError};
use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::products::{self, SearchedProduct};
use crate::queries::QueryPlan;

/// Printed instead of variant lines when the search matched nothing.
pub const NO_PRODUCTS_MESSAGE: &str = "No products found.";

/// Errors that end a search run.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The configuration cannot serve this request.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The GraphQL request failed.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),

    /// The response decoded as JSON but not as the expected product shape.
    #[error("Unexpected {mode} response shape: {source}")]
    UnexpectedShape {
        /// The mode whose shape was expected.
        mode: AuthMode,
        /// The decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// Writing the results failed.
    #[error("Failed to write results: {0}")]
    Output(#[from] std::io::Error),
}

impl SearchError {
    /// Returns the process exit code for this error.
    ///
    /// Configuration problems exit with `2`, everything else with `1`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Graphql(_) | Self::UnexpectedShape { .. } | Self::Output(_) => 1,
        }
    }

    /// Returns `true` if this error was already logged where it happened.
    ///
    /// Request failures are logged by the GraphQL client, so callers should
    /// not report them again.
    #[must_use]
    pub const fn is_logged(&self) -> bool {
        matches!(self, Self::Graphql(_))
    }
}

/// What a successful run printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// One line per variant was printed.
    Listed {
        /// Number of variant lines printed.
        variants: usize,
    },
    /// The search matched no products.
    NoProducts,
}

/// Runs product searches against one store.
#[derive(Debug)]
pub struct ProductSearch<'a> {
    config: &'a SearchConfig,
    client: GraphqlClient,
}

impl<'a> ProductSearch<'a> {
    /// Creates a search over `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Graphql`] if the HTTP client cannot be built.
    pub fn new(config: &'a SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            config,
            client: GraphqlClient::new()?,
        })
    }

    /// Sends the search for `request` and decodes the matching products.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the token for the request's mode is
    /// missing, [`SearchError::Graphql`] if the request fails, and
    /// [`SearchError::UnexpectedShape`] if the body cannot be decoded.
    pub async fn fetch_products(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<SearchedProduct>, SearchError> {
        let plan = QueryPlan::for_request(self.config, request)?;

        tracing::debug!(
            mode = %request.auth_mode,
            product_name = %request.product_name,
            "searching products"
        );

        let body = self
            .client
            .send(plan.query, &plan.variables, &plan.headers, &plan.endpoint)
            .await?;

        let products = products::extract_products(request.auth_mode, body).map_err(|source| {
            SearchError::UnexpectedShape {
                mode: request.auth_mode,
                source,
            }
        })?;

        tracing::debug!(count = products.len(), "products returned");
        Ok(products)
    }

    /// Searches and writes the result lines to `out`.
    ///
    /// Nothing is written unless the request succeeds.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_products`](Self::fetch_products), plus
    /// [`SearchError::Output`] if writing fails.
    pub async fn run<W: Write>(
        &self,
        request: &SearchRequest,
        out: &mut W,
    ) -> Result<SearchOutcome, SearchError> {
        let products = self.fetch_products(request).await?;

        if products.is_empty() {
            writeln!(out, "{NO_PRODUCTS_MESSAGE}")?;
            return Ok(SearchOutcome::NoProducts);
        }

        let records = products::normalize(&products);
        for record in &records {
            writeln!(out, "{record}")?;
        }
        out.flush()?;

        Ok(SearchOutcome::Listed {
            variants: records.len(),
        })
    }
}

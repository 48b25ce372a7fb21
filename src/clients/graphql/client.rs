//! GraphQL client implementation.
//!
//! This module provides the [`GraphqlClient`] type, which sends one GraphQL
//! operation to an absolute endpoint URL and returns the decoded body.

use std::collections::HashMap;

use serde::Serialize;

use crate::clients::graphql::GraphqlError;
use crate::clients::{HttpClient, HttpError};

/// The wire request body: `{"query": ..., "variables": ...}`.
#[derive(Debug, Serialize)]
pub struct GraphqlEnvelope<'a> {
    /// The GraphQL document.
    pub query: &'a str,
    /// Variables referenced by the document.
    pub variables: &'a serde_json::Value,
}

/// GraphQL client for the Shopify Admin and Storefront APIs.
///
/// The endpoint and auth headers are supplied per call, so the same client
/// serves both APIs.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_price_search::clients::GraphqlClient;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let client = GraphqlClient::new()?;
/// let mut headers = HashMap::new();
/// headers.insert("X-Shopify-Access-Token".to_string(), "shpat_...".to_string());
///
/// let body = client
///     .send(
///         "query { shop { name } }",
///         &json!({}),
///         &headers,
///         "https://my-store.myshopify.com/admin/api/2024-07/graphql.json",
///     )
///     .await?;
/// println!("Shop: {}", body["data"]["shop"]["name"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, GraphqlError> {
        Ok(Self {
            http_client: HttpClient::new()?,
        })
    }

    /// Executes a GraphQL operation and returns the decoded JSON body.
    ///
    /// The body is returned verbatim; no schema validation is applied.
    /// GraphQL-level `errors` in a 2xx body are logged at `warn` level and
    /// left in the returned value.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for network errors, non-2xx responses
    /// and undecodable bodies. The failure is logged at `error` level first,
    /// preferring the server's error payload over the transport message.
    pub async fn send(
        &self,
        query: &str,
        variables: &serde_json::Value,
        headers: &HashMap<String, String>,
        endpoint: &str,
    ) -> Result<serde_json::Value, GraphqlError> {
        let envelope = GraphqlEnvelope { query, variables };

        tracing::debug!(endpoint, "sending GraphQL request");

        match self.http_client.post_json(endpoint, &envelope, headers).await {
            Ok(response) => {
                if let Some(errors) = response.body.get("errors").filter(|e| !e.is_null()) {
                    tracing::warn!("GraphQL response contained errors: {}", errors);
                }
                Ok(response.body)
            }
            Err(error) => {
                match &error {
                    HttpError::Response(e) => {
                        tracing::error!("Error during GraphQL request: {}", e.message);
                    }
                    other => tracing::error!("Error during GraphQL request: {}", other),
                }
                Err(error.into())
            }
        }
    }
}

//! HTTP and GraphQL client types for Shopify API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: POSTs JSON to an endpoint and parses the reply
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpError`]: Transport, status and body-decoding failures
//! - [`graphql::GraphqlClient`]: Sends one GraphQL operation per call
//! - [`graphql::GraphqlError`]: GraphQL-specific error type
//!
//! Every call is a single attempt. Non-2xx responses are returned as
//! [`HttpError::Response`] carrying the server's error payload.

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError};

//! GraphQL API client.
//!
//! A thin layer over [`HttpClient`](crate::clients::HttpClient) that wraps a
//! query and its variables in the standard `{query, variables}` envelope,
//! POSTs it, and hands back the decoded JSON body.
//!
//! # Response Structure
//!
//! GraphQL responses contain these fields in the body:
//!
//! - `data`: The query result data
//! - `errors`: Any GraphQL errors (still HTTP 200)
//! - `extensions`: Query cost information

mod client;
mod errors;

pub use client::{GraphqlClient, GraphqlEnvelope};
pub use errors::GraphqlError;

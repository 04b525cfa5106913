//! HTTP transport module
//!
//! A thin, status-agnostic transport over `reqwest`. The client resolves
//! requests for ANY status code; branching on the status belongs to the
//! API layer, which needs the body of a rejection as much as the body of
//! a success. Only faults that prevent a response at all (unreachable
//! host, failed body read) are mapped to [`crate::ClientError`] here.
//!
//! No retries and no rate limiting: a request is sent exactly once.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};

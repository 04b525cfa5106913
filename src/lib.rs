//! # Polly API client
//!
//! A client-side toolkit for the Polly poll-management HTTP API:
//! registering users, fetching paginated poll listings, aggregating all
//! pages into one combined list, and rendering human-readable summaries.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use polly_client::{AggregateOptions, PollyClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = PollyClient::new("http://localhost:8000")?;
//!
//!     // One page
//!     let page = client.fetch_polls(0, 10).await?;
//!
//!     // Everything, one page at a time
//!     let all = client
//!         .fetch_all_polls(&AggregateOptions::new().with_max_polls(100))
//!         .await?;
//!
//!     polly_client::render::display_polls(&all.polls);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     PollyClient                      │
//! │  fetch_polls(skip, limit)        → PollPage          │
//! │  register_user(name, password)   → Registration      │
//! │  fetch_all_polls(options)        → PollSet           │
//! └──────────────────────────┬───────────────────────────┘
//!                            │
//! ┌──────────┬───────────────┴─────────┬─────────────────┐
//! │   http   │        aggregate        │     render      │
//! ├──────────┼─────────────────────────┼─────────────────┤
//! │ GET/POST │ offset loop             │ text report     │
//! │ base URL │ short-page detection    │ timestamp       │
//! │ headers  │ max-polls / max-request │ fallbacks       │
//! └──────────┴─────────────────────────┴─────────────────┘
//! ```
//!
//! Every operation returns `Result<T, ClientError>`; server rejections,
//! connection faults, and malformed bodies all surface as error values at
//! the wrapper boundary, never as panics.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

/// Error types for the client
pub mod error;

/// Poll, option, and page record types
pub mod types;

/// HTTP transport layer
pub mod http;

/// API operations (poll fetch, user registration)
pub mod api;

/// Pagination aggregation
pub mod aggregate;

/// Human-readable poll reports
pub mod render;

/// Command-line interface
pub mod cli;

pub use aggregate::{AggregateOptions, PollSet};
pub use api::{PollPage, PollyClient, Registration};
pub use error::{ClientError, Result};
pub use types::{PageInfo, Poll, PollOption, RegisteredUser};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Default base URL of the Polly API
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

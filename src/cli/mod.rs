//! CLI module
//!
//! Command-line interface for the Polly API client.
//!
//! # Commands
//!
//! - `fetch` - Fetch one page of polls
//! - `fetch-all` - Fetch every poll, page by page
//! - `register` - Register a new user

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;

//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Polly API client CLI
#[derive(Parser, Debug)]
#[command(name = "polly-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the Polly API
    #[arg(short, long, global = true, default_value = crate::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one page of polls
    Fetch {
        /// Number of polls to skip
        #[arg(long, default_value = "0")]
        skip: u32,

        /// Maximum number of polls to return
        #[arg(long, default_value = "10")]
        limit: u32,

        /// Render a human-readable report instead of JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Fetch every poll, page by page
    FetchAll {
        /// Polls requested per page
        #[arg(long, default_value = "10")]
        page_size: u32,

        /// Stop after this many polls
        #[arg(long)]
        max_polls: Option<u32>,

        /// Hard cap on the number of requests issued
        #[arg(long, default_value = "1000")]
        max_requests: u32,

        /// Render a human-readable report instead of JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Register a new user
    Register {
        /// Username for the new account
        #[arg(short, long)]
        username: String,

        /// Password for the new account
        #[arg(short, long)]
        password: String,
    },
}

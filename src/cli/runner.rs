//! Command execution

use super::commands::{Cli, Commands};
use crate::aggregate::AggregateOptions;
use crate::api::PollyClient;
use crate::error::ClientError;
use crate::render;
use anyhow::Result;

/// Executes a parsed CLI invocation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for a parsed CLI
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        let client = PollyClient::new(&self.cli.base_url)?;

        match &self.cli.command {
            Commands::Fetch { skip, limit, pretty } => {
                let page = client.fetch_polls(*skip, *limit).await?;
                if *pretty {
                    render::display_polls(&page.polls);
                } else {
                    println!("{}", serde_json::to_string_pretty(&page)?);
                }
                Ok(())
            }

            Commands::FetchAll {
                page_size,
                max_polls,
                max_requests,
                pretty,
            } => {
                let mut options = AggregateOptions::new()
                    .with_page_size(*page_size)
                    .with_max_requests(*max_requests);
                if let Some(max) = max_polls {
                    options = options.with_max_polls(*max);
                }

                let all = client.fetch_all_polls(&options).await?;
                if *pretty {
                    render::display_polls(&all.polls);
                    println!(
                        "Fetched {} polls in {} requests.",
                        all.total_count, all.total_requests
                    );
                } else {
                    println!("{}", serde_json::to_string_pretty(&all)?);
                }
                Ok(())
            }

            Commands::Register { username, password } => {
                match client.register_user(username, password).await {
                    Ok(registration) => {
                        println!("{}", serde_json::to_string_pretty(&registration)?);
                        Ok(())
                    }
                    // A 4xx rejection (duplicate username, validation) is an
                    // expected outcome, not a crash
                    Err(err @ ClientError::Api { .. }) if err.is_client_error() => {
                        println!("Registration rejected: {err}");
                        Ok(())
                    }
                    Err(err) => Err(err.into()),
                }
            }
        }
    }
}

//! Pagination aggregation
//!
//! Repeatedly fetches `/polls` pages at increasing offsets and folds them
//! into one combined list. The loop advances the offset by the number of
//! records each page actually returned, never by the nominal page size,
//! so the data source keeps control over how many records exist.
//!
//! Three things end the loop normally: an empty page, a short page, or
//! reaching `max_polls`. A server that keeps answering full pages forever
//! would defeat all three, so a request safety bound caps the loop and
//! surfaces [`ClientError::AggregationLimit`] instead of spinning.

use crate::api::PollyClient;
use crate::error::{ClientError, Result};
use crate::types::Poll;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default number of polls requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default request safety bound
pub const DEFAULT_MAX_REQUESTS: u32 = 1000;

/// Options for [`PollyClient::fetch_all_polls`]
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Polls requested per page
    pub page_size: u32,
    /// Stop after this many polls, even if the source has more
    pub max_polls: Option<u32>,
    /// Hard cap on the number of requests issued
    pub max_requests: u32,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_polls: None,
            max_requests: DEFAULT_MAX_REQUESTS,
        }
    }
}

impl AggregateOptions {
    /// Create options with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size (clamped to at least 1)
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Bound the total number of polls fetched
    #[must_use]
    pub fn with_max_polls(mut self, max_polls: u32) -> Self {
        self.max_polls = Some(max_polls);
        self
    }

    /// Set the request safety bound (clamped to at least 1)
    #[must_use]
    pub fn with_max_requests(mut self, max_requests: u32) -> Self {
        self.max_requests = max_requests.max(1);
        self
    }
}

/// The combined result of a full pagination sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollSet {
    /// Every poll fetched, in source order
    pub polls: Vec<Poll>,
    /// Total number of polls fetched (`== polls.len()`)
    pub total_count: usize,
    /// The page size the sweep ran with
    pub page_size: u32,
    /// Number of requests actually issued
    pub total_requests: u32,
}

impl PollyClient {
    /// Fetch every poll, page by page
    ///
    /// Any page failure aborts the sweep and propagates unchanged; partial
    /// results are discarded rather than returned.
    pub async fn fetch_all_polls(&self, options: &AggregateOptions) -> Result<PollSet> {
        let page_size = options.page_size.max(1);
        let mut polls: Vec<Poll> = Vec::new();
        let mut skip: u32 = 0;
        let mut total_fetched: u32 = 0;
        let mut requests: u32 = 0;

        debug!(page_size, max_polls = ?options.max_polls, "starting poll sweep");

        loop {
            let current_limit = match options.max_polls {
                Some(max) => {
                    let remaining = max.saturating_sub(total_fetched);
                    if remaining == 0 {
                        break;
                    }
                    page_size.min(remaining)
                }
                None => page_size,
            };

            if requests >= options.max_requests {
                return Err(ClientError::AggregationLimit { requests });
            }

            let page = self.fetch_polls(skip, current_limit).await?;
            requests += 1;

            let returned = page.pagination.returned_count as u32;
            if returned == 0 {
                break;
            }

            polls.extend(page.polls);
            total_fetched += returned;
            skip += returned;

            debug!(returned, total_fetched, "fetched page");

            // Short page: the source has run dry
            if returned < current_limit {
                break;
            }
        }

        info!(total_fetched, requests, "poll sweep complete");

        Ok(PollSet {
            total_count: polls.len(),
            polls,
            page_size,
            total_requests: requests,
        })
    }
}

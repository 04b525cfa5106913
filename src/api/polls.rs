//! Paginated poll listing

use super::{error_body, read_body, PollyClient};
use crate::error::{ClientError, Result};
use crate::http::RequestConfig;
use crate::types::{PageInfo, Poll};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One successfully fetched page of polls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollPage {
    /// HTTP status of the response (always 2xx here)
    pub status: u16,
    /// The polls, in server order
    pub polls: Vec<Poll>,
    /// The window that produced this page
    pub pagination: PageInfo,
}

impl PollyClient {
    /// Fetch one page of polls
    ///
    /// `skip` is the offset into the full ordered result set; `limit` is
    /// the maximum number of items the server may return. The returned
    /// page always satisfies `pagination.returned_count == polls.len()`.
    pub async fn fetch_polls(&self, skip: u32, limit: u32) -> Result<PollPage> {
        let request = RequestConfig::new()
            .query("skip", skip.to_string())
            .query("limit", limit.to_string())
            .header("Accept", "application/json");

        let response = self.http().get_with_config("/polls", request).await?;
        let (status, body) = read_body(response).await?;

        if status == 200 {
            let polls: Vec<Poll> = serde_json::from_str(&body).map_err(|e| {
                ClientError::decode(format!("poll listing is not a JSON array of polls: {e}"))
            })?;

            debug!(skip, limit, returned = polls.len(), "fetched poll page");

            let pagination = PageInfo {
                skip,
                limit,
                returned_count: polls.len(),
            };
            Ok(PollPage {
                status,
                polls,
                pagination,
            })
        } else {
            warn!(status, "poll fetch rejected by server");
            Err(ClientError::Api {
                status,
                body: error_body(&body),
            })
        }
    }
}

//! User registration

use super::{error_body, read_body, PollyClient};
use crate::error::{ClientError, Result};
use crate::http::RequestConfig;
use crate::types::RegisteredUser;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

/// A successful registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    /// HTTP status of the response (always 2xx here)
    pub status: u16,
    /// The account the server created
    pub user: RegisteredUser,
}

impl PollyClient {
    /// Register a new user
    ///
    /// Credentials are sent as-is; the server owns all validation. A 400
    /// (typically a duplicate username) surfaces as [`ClientError::Api`]
    /// like any other rejection; callers that expect duplicates inspect
    /// the status and payload.
    pub async fn register_user(&self, username: &str, password: &str) -> Result<Registration> {
        let request = RequestConfig::new()
            .header("Content-Type", "application/json")
            .json(json!({ "username": username, "password": password }));

        let response = self.http().post_with_config("/register", request).await?;
        let (status, body) = read_body(response).await?;

        if status == 200 {
            let user: RegisteredUser = serde_json::from_str(&body).map_err(|e| {
                ClientError::decode(format!("registration response is not a user record: {e}"))
            })?;

            info!(username, id = user.id, "registered user");
            Ok(Registration { status, user })
        } else {
            warn!(username, status, "registration rejected by server");
            Err(ClientError::Api {
                status,
                body: error_body(&body),
            })
        }
    }
}

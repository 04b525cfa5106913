//! Record types for the Polly API
//!
//! Plain, flat records with no identity beyond their source fields and no
//! mutation after construction. Non-essential fields default when the
//! server omits them, so one sparse record does not sink a whole page.

use serde::{Deserialize, Serialize};

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A question with an ordered set of selectable options, owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub id: i64,
    #[serde(default)]
    pub question: String,
    /// Creation timestamp as the server sent it; ISO 8601 expected but
    /// never assumed (see [`crate::render`])
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub owner_id: i64,
    #[serde(default)]
    pub options: Vec<PollOption>,
}

/// One selectable answer belonging to exactly one poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: i64,
    #[serde(default)]
    pub text: String,
    /// Back-reference to the owning poll, not an ownership link
    #[serde(default)]
    pub poll_id: i64,
}

/// The account record returned by a successful registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    /// Whatever else the server includes alongside id and username
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Describes one fetched page: the window that was requested and how many
/// records actually came back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub skip: u32,
    pub limit: u32,
    pub returned_count: usize,
}

impl PageInfo {
    /// True when the server returned fewer records than requested, the
    /// heuristic signal for end-of-data
    pub fn is_short(&self) -> bool {
        self.returned_count < self.limit as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_poll_deserialize() {
        let poll: Poll = serde_json::from_value(json!({
            "id": 7,
            "question": "Tabs or spaces?",
            "created_at": "2024-03-01T09:30:00Z",
            "owner_id": 2,
            "options": [
                {"id": 21, "text": "Tabs", "poll_id": 7},
                {"id": 22, "text": "Spaces", "poll_id": 7}
            ]
        }))
        .unwrap();

        assert_eq!(poll.id, 7);
        assert_eq!(poll.question, "Tabs or spaces?");
        assert_eq!(poll.options.len(), 2);
        assert_eq!(poll.options[1].text, "Spaces");
        assert_eq!(poll.options[1].poll_id, 7);
    }

    #[test]
    fn test_poll_missing_fields_default() {
        // Only the id is required; everything else falls back
        let poll: Poll = serde_json::from_value(json!({"id": 3})).unwrap();
        assert_eq!(poll.id, 3);
        assert_eq!(poll.question, "");
        assert_eq!(poll.created_at, "");
        assert_eq!(poll.owner_id, 0);
        assert!(poll.options.is_empty());
    }

    #[test]
    fn test_registered_user_extra_fields() {
        let user: RegisteredUser = serde_json::from_value(json!({
            "id": 42,
            "username": "john_doe",
            "created_at": "2024-03-01T09:30:00Z"
        }))
        .unwrap();

        assert_eq!(user.id, 42);
        assert_eq!(user.username, "john_doe");
        assert_eq!(
            user.extra.get("created_at"),
            Some(&json!("2024-03-01T09:30:00Z"))
        );
    }

    #[test]
    fn test_page_info_is_short() {
        let full = PageInfo {
            skip: 0,
            limit: 10,
            returned_count: 10,
        };
        assert!(!full.is_short());

        let short = PageInfo {
            skip: 10,
            limit: 10,
            returned_count: 4,
        };
        assert!(short.is_short());
    }

    #[test]
    fn test_poll_roundtrip_keeps_option_order() {
        let polls: Vec<Poll> = serde_json::from_value(json!([
            {"id": 1, "question": "a", "created_at": "", "owner_id": 1,
             "options": [
                {"id": 10, "text": "first", "poll_id": 1},
                {"id": 11, "text": "second", "poll_id": 1},
                {"id": 12, "text": "third", "poll_id": 1}
             ]}
        ]))
        .unwrap();

        let texts: Vec<&str> = polls[0].options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A comment posted by a user on a stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub content: String,
    pub user_id: i32,
    pub stream_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker, set by the database service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Caller input for creating a comment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateComment {
    pub content: String,
    pub user_id: i32,
    pub stream_id: i32,
}

impl CreateComment {
    pub fn new(content: impl Into<String>, user_id: i32, stream_id: i32) -> Self {
        Self {
            content: content.into(),
            user_id,
            stream_id,
        }
    }
}

/// A validated comment ready to be persisted; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
    pub user_id: i32,
    pub stream_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List query
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommentFilter {
    pub user_id: Option<i32>,
    pub stream_id: Option<i32>,
    pub page: i32,
    pub page_size: i32,
}

/// One page of comments plus the total matching the filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommentPage {
    pub comments: Vec<Comment>,
    pub total_count: i64,
}

/// Whether comments may be created on streams that have already completed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum StreamPolicy {
    /// Completed streams are closed for comments
    #[default]
    RejectCompleted,
    /// Any stream that exists accepts comments
    AllowCompleted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_stream_policy_parsing() {
        assert_eq!(
            StreamPolicy::from_str("reject-completed").unwrap(),
            StreamPolicy::RejectCompleted
        );
        assert_eq!(
            StreamPolicy::from_str("allow-completed").unwrap(),
            StreamPolicy::AllowCompleted
        );
        assert!(StreamPolicy::from_str("sometimes").is_err());
        assert_eq!(StreamPolicy::default().to_string(), "reject-completed");
    }
}

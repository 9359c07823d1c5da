use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

pub const DEFAULT_PAGE: i32 = 1;
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Stream lifecycle status
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum StreamStatus {
    /// Announced, not yet started
    #[default]
    Scheduled,
    Online,
    /// Temporarily off air
    Offline,
    /// Finished; closed for comments
    Complete,
}

/// Stream entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stream {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Secret the broadcaster pushes with
    pub stream_key: String,
    pub resolution: String,
    pub bitrate: String,
    pub frame_rate: String,
    pub codec: String,
    pub view_count: i32,
    pub protocol: String,
    pub status: StreamStatus,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// DTO for creating a stream. An empty key is replaced by a generated one.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStream {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    #[validate(length(min = 10, message = "invalid stream key: at least 10 characters required"))]
    pub stream_key: String,
    #[serde(default)]
    pub resolution: String,
    #[serde(default)]
    pub bitrate: String,
    #[serde(default)]
    pub frame_rate: String,
    #[serde(default)]
    pub codec: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub status: StreamStatus,
    pub user_id: i32,
}

/// A validated stream ready to be persisted; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStream {
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub stream_key: String,
    pub resolution: String,
    pub bitrate: String,
    pub frame_rate: String,
    pub codec: String,
    pub protocol: String,
    pub status: StreamStatus,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewStream {
    pub fn from_input(input: CreateStream, now: DateTime<Utc>) -> Self {
        Self {
            title: input.title,
            description: input.description,
            start_time: input.start_time,
            end_time: input.end_time,
            stream_key: input.stream_key,
            resolution: input.resolution,
            bitrate: input.bitrate,
            frame_rate: input.frame_rate,
            codec: input.codec,
            protocol: input.protocol,
            status: input.status,
            user_id: input.user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for updating a stream; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStream {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub resolution: Option<String>,
    pub bitrate: Option<String>,
    pub frame_rate: Option<String>,
    pub codec: Option<String>,
    pub protocol: Option<String>,
    pub status: Option<StreamStatus>,
}

impl Stream {
    /// Apply updates
    pub fn apply_update(&mut self, update: UpdateStream) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(start_time) = update.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = update.end_time {
            self.end_time = end_time;
        }
        if let Some(resolution) = update.resolution {
            self.resolution = resolution;
        }
        if let Some(bitrate) = update.bitrate {
            self.bitrate = bitrate;
        }
        if let Some(frame_rate) = update.frame_rate {
            self.frame_rate = frame_rate;
        }
        if let Some(codec) = update.codec {
            self.codec = codec;
        }
        if let Some(protocol) = update.protocol {
            self.protocol = protocol;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

/// Criteria for listing streams; `None`/empty means "any"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamFilter {
    pub title_contains: Option<String>,
    pub description_contains: Option<String>,
    pub codec: Option<String>,
    pub protocol: Option<String>,
    pub user_id: Option<i32>,
    pub min_view_count: Option<i32>,
    pub max_view_count: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub end_time_after: Option<DateTime<Utc>>,
    pub end_time_before: Option<DateTime<Utc>>,
    pub status: Vec<StreamStatus>,
}

/// Page, filter and ordering for a list call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamQuery {
    pub page: i32,
    pub page_size: i32,
    pub filter: StreamFilter,
    /// Column name understood by the database service; empty for its default order
    pub sort_by: String,
    pub ascending: bool,
}

impl Default for StreamQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            filter: StreamFilter::default(),
            sort_by: String::new(),
            ascending: false,
        }
    }
}

impl StreamQuery {
    /// Replace a non-positive page or page size with its default
    pub fn normalized(mut self) -> Self {
        if self.page < 1 {
            self.page = DEFAULT_PAGE;
        }
        if self.page_size < 1 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamPage {
    pub streams: Vec<Stream>,
    pub total_count: i64,
    pub page: i32,
    pub page_size: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_names() {
        assert_eq!(StreamStatus::Complete.to_string(), "COMPLETE");
        assert_eq!(StreamStatus::from_str("online").unwrap(), StreamStatus::Online);
        assert_eq!(
            serde_json::to_string(&StreamStatus::Scheduled).unwrap(),
            "\"SCHEDULED\""
        );
        assert!(StreamStatus::from_str("LIVE").is_err());
    }

    #[test]
    fn test_query_defaults() {
        let query = StreamQuery {
            page: 0,
            page_size: -1,
            ..Default::default()
        }
        .normalized();
        assert_eq!((query.page, query.page_size), (1, 10));

        let query = StreamQuery {
            page: 3,
            page_size: 250,
            ..Default::default()
        }
        .normalized();
        assert_eq!((query.page, query.page_size), (3, 250));
    }
}

//! Comment ↔ wire conversions
//!
//! - `db.v1.CommentRecord` (database service) ↔ [`Comment`]
//! - [`Comment`] → `comment.v1.Comment` (public API)
//! - `comment.v1` requests → domain inputs

use grpc_client::conversions::{
    datetime_to_timestamp, opt_datetime_to_timestamp, opt_timestamp_to_datetime,
    timestamp_to_datetime,
};
use rpc::comment::v1 as api;
use rpc::db::v1::{CommentRecord, ListCommentRecordsRequest};

use crate::error::CommentError;
use crate::models::{Comment, CommentFilter, CreateComment, NewComment};

// ============================================================================
// Database records
// ============================================================================

impl TryFrom<CommentRecord> for Comment {
    type Error = CommentError;

    fn try_from(record: CommentRecord) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: record.id,
            content: record.content,
            user_id: record.user_id,
            stream_id: record.stream_id,
            created_at: timestamp_to_datetime(record.created_at)
                .map_err(CommentError::InvalidRecord)?,
            updated_at: timestamp_to_datetime(record.updated_at)
                .map_err(CommentError::InvalidRecord)?,
            deleted_at: opt_timestamp_to_datetime(record.deleted_at)
                .map_err(CommentError::InvalidRecord)?,
        })
    }
}

impl From<NewComment> for CommentRecord {
    fn from(comment: NewComment) -> Self {
        CommentRecord {
            id: 0,
            content: comment.content,
            user_id: comment.user_id,
            stream_id: comment.stream_id,
            created_at: datetime_to_timestamp(comment.created_at),
            updated_at: datetime_to_timestamp(comment.updated_at),
            deleted_at: None,
        }
    }
}

impl From<Comment> for CommentRecord {
    fn from(comment: Comment) -> Self {
        CommentRecord {
            id: comment.id,
            content: comment.content,
            user_id: comment.user_id,
            stream_id: comment.stream_id,
            created_at: datetime_to_timestamp(comment.created_at),
            updated_at: datetime_to_timestamp(comment.updated_at),
            deleted_at: opt_datetime_to_timestamp(comment.deleted_at),
        }
    }
}

impl From<CommentFilter> for ListCommentRecordsRequest {
    fn from(filter: CommentFilter) -> Self {
        ListCommentRecordsRequest {
            user_id: filter.user_id,
            stream_id: filter.stream_id,
            page: filter.page,
            page_size: filter.page_size,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

impl From<Comment> for api::Comment {
    fn from(comment: Comment) -> Self {
        api::Comment {
            id: comment.id,
            content: comment.content,
            user_id: comment.user_id,
            stream_id: comment.stream_id,
            created_at: datetime_to_timestamp(comment.created_at),
            updated_at: datetime_to_timestamp(comment.updated_at),
            deleted_at: opt_datetime_to_timestamp(comment.deleted_at),
        }
    }
}

impl From<api::CreateCommentRequest> for CreateComment {
    fn from(req: api::CreateCommentRequest) -> Self {
        CreateComment {
            content: req.content,
            user_id: req.user_id,
            stream_id: req.stream_id,
        }
    }
}

impl From<api::ListCommentsRequest> for CommentFilter {
    fn from(req: api::ListCommentsRequest) -> Self {
        CommentFilter {
            user_id: req.user_id,
            stream_id: req.stream_id,
            page: req.page,
            page_size: req.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CommentRecord {
        CommentRecord {
            id: 7,
            content: "hello".to_string(),
            user_id: 1,
            stream_id: 2,
            created_at: 1_700_000_000,
            updated_at: 1_700_000_060,
            deleted_at: None,
        }
    }

    #[test]
    fn test_absent_deletion_marker() {
        let comment = Comment::try_from(record()).unwrap();
        assert_eq!(comment.id, 7);
        assert_eq!(comment.deleted_at, None);
        assert_eq!(comment.updated_at.timestamp(), 1_700_000_060);
    }

    #[test]
    fn test_present_deletion_marker() {
        let comment = Comment::try_from(CommentRecord {
            deleted_at: Some(1_700_000_120),
            ..record()
        })
        .unwrap();
        assert_eq!(comment.deleted_at.map(|d| d.timestamp()), Some(1_700_000_120));

        let back = CommentRecord::from(comment);
        assert_eq!(back.deleted_at, Some(1_700_000_120));
    }

    #[test]
    fn test_corrupt_timestamp_is_rejected() {
        let err = Comment::try_from(CommentRecord {
            created_at: i64::MAX,
            ..record()
        })
        .unwrap_err();
        assert!(matches!(err, CommentError::InvalidRecord(_)));
    }

    #[test]
    fn test_new_comment_has_no_id() {
        let now = grpc_client::conversions::wire_now();
        let record = CommentRecord::from(NewComment {
            content: "hi".to_string(),
            user_id: 1,
            stream_id: 2,
            created_at: now,
            updated_at: now,
        });
        assert_eq!(record.id, 0);
        assert_eq!(record.created_at, record.updated_at);
    }
}

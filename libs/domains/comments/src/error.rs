use thiserror::Error;
use tonic::{Code, Status};

#[derive(Debug, Error)]
pub enum CommentError {
    #[error("empty comment")]
    EmptyContent,

    #[error("comment too long: {length} characters, at most {max} allowed")]
    ContentTooLong { length: usize, max: usize },

    #[error("invalid page number: {0}")]
    InvalidPage(i32),

    #[error("comment {0} not found")]
    NotFound(i32),

    #[error("user {0} not found")]
    UserNotFound(i32),

    #[error("stream {0} not found")]
    StreamNotFound(i32),

    #[error("cannot comment on completed stream {0}")]
    StreamCompleted(i32),

    /// A dependency answered with an error status
    #[error("downstream call failed: {}", .0.message())]
    Downstream(#[from] Status),

    /// A dependency answered with data that does not form a valid comment
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

pub type CommentResult<T> = Result<T, CommentError>;

impl CommentError {
    /// gRPC code reported to callers of the comment service.
    pub fn code(&self) -> Code {
        match self {
            CommentError::EmptyContent
            | CommentError::ContentTooLong { .. }
            | CommentError::InvalidPage(_) => Code::InvalidArgument,
            CommentError::NotFound(_)
            | CommentError::UserNotFound(_)
            | CommentError::StreamNotFound(_) => Code::NotFound,
            CommentError::StreamCompleted(_) => Code::FailedPrecondition,
            CommentError::Downstream(_) | CommentError::InvalidRecord(_) => Code::Internal,
        }
    }
}

impl From<CommentError> for Status {
    fn from(err: CommentError) -> Self {
        Status::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_invalid_argument() {
        for err in [
            CommentError::EmptyContent,
            CommentError::ContentTooLong {
                length: 1001,
                max: 1000,
            },
            CommentError::InvalidPage(0),
        ] {
            assert_eq!(Status::from(err).code(), Code::InvalidArgument);
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(Status::from(CommentError::NotFound(1)).code(), Code::NotFound);
        assert_eq!(Status::from(CommentError::UserNotFound(1)).code(), Code::NotFound);
        assert_eq!(Status::from(CommentError::StreamNotFound(1)).code(), Code::NotFound);
        assert_eq!(
            Status::from(CommentError::StreamCompleted(1)).code(),
            Code::FailedPrecondition
        );
        assert_eq!(
            Status::from(CommentError::Downstream(Status::unavailable("db down"))).code(),
            Code::Internal
        );
    }

    #[test]
    fn test_downstream_message_is_kept() {
        let status = Status::from(CommentError::Downstream(Status::unavailable("db down")));
        assert_eq!(status.message(), "downstream call failed: db down");
    }
}

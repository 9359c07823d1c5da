use thiserror::Error;
use tonic::{Code, Status};
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("Stream not found: {0}")]
    NotFound(i32),

    #[error("{0}")]
    Validation(String),

    /// Failure reported by the database service, kept with its original code
    #[error("{}", .0.message())]
    Downstream(#[from] Status),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

pub type StreamResult<T> = Result<T, StreamError>;

impl StreamError {
    pub fn code(&self) -> Code {
        match self {
            StreamError::NotFound(_) => Code::NotFound,
            StreamError::Validation(_) => Code::InvalidArgument,
            StreamError::Downstream(status) => status.code(),
            StreamError::InvalidRecord(_) => Code::Internal,
        }
    }
}

/// Field messages joined with ", " in field order
impl From<ValidationErrors> for StreamError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let issues: Vec<String> = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();

        StreamError::Validation(issues.join(", "))
    }
}

impl From<StreamError> for Status {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::Downstream(status) => status,
            other => Status::new(other.code(), other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downstream_status_passes_through() {
        let status = Status::from(StreamError::Downstream(Status::already_exists(
            "stream key in use",
        )));
        assert_eq!(status.code(), Code::AlreadyExists);
        assert_eq!(status.message(), "stream key in use");
    }

    #[test]
    fn test_local_errors() {
        assert_eq!(Status::from(StreamError::NotFound(3)).code(), Code::NotFound);
        assert_eq!(
            Status::from(StreamError::Validation("title is required".into())).code(),
            Code::InvalidArgument
        );
        assert_eq!(
            Status::from(StreamError::InvalidRecord("bad status".into())).code(),
            Code::Internal
        );
    }
}

use thiserror::Error;
use tonic::{Code, Status};
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(i32),

    #[error("No user with external id '{0}'")]
    ExternalIdNotFound(String),

    #[error("Email '{0}' is already taken")]
    EmailTaken(String),

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid page number: {0}")]
    InvalidPage(i32),

    #[error("Database service error: {}", .0.message())]
    Downstream(#[from] Status),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn code(&self) -> Code {
        match self {
            UserError::NotFound(_) | UserError::ExternalIdNotFound(_) => Code::NotFound,
            UserError::EmailTaken(_) | UserError::UsernameTaken(_) => Code::AlreadyExists,
            UserError::Validation(_) | UserError::InvalidPage(_) => Code::InvalidArgument,
            UserError::Downstream(_) | UserError::InvalidRecord(_) => Code::Internal,
        }
    }
}

impl From<ValidationErrors> for UserError {
    fn from(errors: ValidationErrors) -> Self {
        UserError::Validation(errors.to_string())
    }
}

impl From<UserError> for Status {
    fn from(err: UserError) -> Self {
        Status::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(Status::from(UserError::NotFound(1)).code(), Code::NotFound);
        assert_eq!(
            Status::from(UserError::ExternalIdNotFound("abc".into())).code(),
            Code::NotFound
        );
        assert_eq!(
            Status::from(UserError::EmailTaken("a@b.c".into())).code(),
            Code::AlreadyExists
        );
        assert_eq!(
            Status::from(UserError::UsernameTaken("neo".into())).code(),
            Code::AlreadyExists
        );
        assert_eq!(
            Status::from(UserError::Validation("bad".into())).code(),
            Code::InvalidArgument
        );
        assert_eq!(
            Status::from(UserError::Downstream(Status::unavailable("down"))).code(),
            Code::Internal
        );
    }
}

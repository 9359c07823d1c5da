//! Translation of gRPC outcomes into HTTP terms.

use axum::http::StatusCode;
use tonic::Code;

/// HTTP status for a gRPC status code.
///
/// Codes without a dedicated row collapse to 500.
pub fn http_status_for(code: Code) -> StatusCode {
    match code {
        Code::Ok => StatusCode::OK,
        Code::InvalidArgument => StatusCode::BAD_REQUEST,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::AlreadyExists => StatusCode::CONFLICT,
        Code::PermissionDenied => StatusCode::FORBIDDEN,
        Code::Unauthenticated => StatusCode::UNAUTHORIZED,
        Code::ResourceExhausted => StatusCode::TOO_MANY_REQUESTS,
        Code::FailedPrecondition => StatusCode::PRECONDITION_FAILED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Split an `INVALID_ARGUMENT` message into individual issues.
///
/// Messages shaped like "title is required, stream key too short" split on commas;
/// otherwise on sentence breaks; otherwise the whole message is the single issue.
pub fn parse_validation_errors(message: &str) -> Vec<String> {
    let split = |sep: &str| -> Vec<String> {
        message
            .split(sep)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    };

    let mut issues = split(",");
    if issues.is_empty() && message.contains(". ") {
        issues = split(". ");
    }
    if issues.is_empty() && !message.is_empty() {
        issues.push(message.to_string());
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table() {
        let table = [
            (Code::InvalidArgument, 400),
            (Code::NotFound, 404),
            (Code::AlreadyExists, 409),
            (Code::PermissionDenied, 403),
            (Code::Unauthenticated, 401),
            (Code::ResourceExhausted, 429),
            (Code::FailedPrecondition, 412),
            (Code::Internal, 500),
            (Code::Unavailable, 500),
            (Code::DeadlineExceeded, 500),
            (Code::Unknown, 500),
        ];
        for (code, expected) in table {
            assert_eq!(http_status_for(code).as_u16(), expected, "{code:?}");
        }
    }

    #[test]
    fn test_validation_errors_split_on_commas() {
        assert_eq!(
            parse_validation_errors("page is required, page_size too large,  "),
            vec!["page is required", "page_size too large"]
        );
    }

    #[test]
    fn test_validation_errors_single_message() {
        assert_eq!(parse_validation_errors("Invalid stream key"), vec!["Invalid stream key"]);
        assert!(parse_validation_errors("").is_empty());
    }
}

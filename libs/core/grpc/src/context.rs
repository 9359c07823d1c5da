//! Per-call context propagated from an inbound request to downstream calls.
//!
//! The caller's `grpc-timeout` becomes an absolute deadline at receipt, so time spent in
//! earlier downstream calls is charged against later ones. The `x-request-id` header is
//! carried through unchanged for log correlation.

use std::time::{Duration, Instant};

use tonic::{Request, Status};

pub const REQUEST_ID_HEADER: &str = "x-request-id";
const GRPC_TIMEOUT_HEADER: &str = "grpc-timeout";

#[derive(Debug, Clone, Default)]
pub struct CallContext {
  deadline: Option<Instant>,
  request_id: Option<String>,
}

impl CallContext {
  /// A context with no deadline and no request id.
  pub fn new() -> Self {
    Self::default()
  }

  /// Capture deadline and request id from an inbound request's metadata.
  pub fn from_request<T>(request: &Request<T>) -> Self {
    let metadata = request.metadata();
    let deadline = metadata
      .get(GRPC_TIMEOUT_HEADER)
      .and_then(|value| value.to_str().ok())
      .and_then(parse_grpc_timeout)
      .map(|timeout| Instant::now() + timeout);
    let request_id = metadata
      .get(REQUEST_ID_HEADER)
      .and_then(|value| value.to_str().ok())
      .filter(|value| !value.is_empty())
      .map(str::to_string);

    Self { deadline, request_id }
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.deadline = Some(Instant::now() + timeout);
    self
  }

  pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
    self.request_id = Some(request_id.into());
    self
  }

  pub fn request_id(&self) -> Option<&str> {
    self.request_id.as_deref()
  }

  /// Time left before the caller gives up, `None` when the caller set no deadline.
  pub fn remaining(&self) -> Option<Duration> {
    self
      .deadline
      .map(|deadline| deadline.saturating_duration_since(Instant::now()))
  }

  pub fn is_expired(&self) -> bool {
    self.remaining().is_some_and(|left| left.is_zero())
  }

  /// Wrap `message` in an outbound request carrying this context.
  ///
  /// Fails with `DEADLINE_EXCEEDED` instead of issuing a call the caller no longer waits for.
  pub fn request<T>(&self, message: T) -> Result<Request<T>, Status> {
    let mut request = Request::new(message);
    if let Some(left) = self.remaining() {
      if left.is_zero() {
        return Err(Status::deadline_exceeded("caller deadline exceeded"));
      }
      request.set_timeout(left);
    }
    if let Some(id) = &self.request_id
      && let Ok(value) = id.parse()
    {
      request.metadata_mut().insert(REQUEST_ID_HEADER, value);
    }
    Ok(request)
  }
}

/// Parse a `grpc-timeout` header value: at most 8 digits followed by a unit
/// (`H`, `M`, `S`, `m`, `u`, `n`).
pub fn parse_grpc_timeout(value: &str) -> Option<Duration> {
  if value.len() < 2 || value.len() > 9 {
    return None;
  }
  let (digits, unit) = value.split_at(value.len() - 1);
  if !digits.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  let amount: u64 = digits.parse().ok()?;
  let timeout = match unit {
    "H" => Duration::from_secs(amount * 60 * 60),
    "M" => Duration::from_secs(amount * 60),
    "S" => Duration::from_secs(amount),
    "m" => Duration::from_millis(amount),
    "u" => Duration::from_micros(amount),
    "n" => Duration::from_nanos(amount),
    _ => return None,
  };
  Some(timeout)
}

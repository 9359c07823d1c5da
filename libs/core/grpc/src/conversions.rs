//! Generic protobuf ↔ domain conversions
//!
//! Timestamps travel as `int64` Unix seconds; optional ones use proto3 `optional int64`
//! so that "absent" stays distinct from the epoch.
//!
//! ```ignore
//! use grpc_client::conversions::*;
//!
//! let ts = datetime_to_timestamp(Utc::now());
//! let back = timestamp_to_datetime(ts)?;
//! ```

use chrono::{DateTime, SubsecRound, Utc};

/// Convert DateTime<Utc> to Unix timestamp (seconds since epoch)
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> i64 {
  dt.timestamp()
}

/// Convert Unix timestamp to DateTime<Utc>
///
/// Out-of-range values are rejected rather than replaced, so a corrupt record never
/// shows up with a plausible time.
pub fn timestamp_to_datetime(timestamp: i64) -> Result<DateTime<Utc>, String> {
  DateTime::from_timestamp(timestamp, 0)
    .ok_or_else(|| format!("Invalid timestamp: {}", timestamp))
}

/// Convert optional Unix timestamp to optional DateTime<Utc>
pub fn opt_timestamp_to_datetime(timestamp: Option<i64>) -> Result<Option<DateTime<Utc>>, String> {
  timestamp.map(timestamp_to_datetime).transpose()
}

/// Convert optional DateTime<Utc> to optional Unix timestamp
pub fn opt_datetime_to_timestamp(dt: Option<DateTime<Utc>>) -> Option<i64> {
  dt.map(datetime_to_timestamp)
}

/// Current time at the precision the wire preserves.
///
/// Stamping records with this keeps a value read back from storage equal to the one
/// that was written.
pub fn wire_now() -> DateTime<Utc> {
  Utc::now().trunc_subsecs(0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_timestamp_roundtrip() {
    let now = wire_now();
    let back = timestamp_to_datetime(datetime_to_timestamp(now)).unwrap();
    assert_eq!(now, back);
  }

  #[test]
  fn test_timestamp_out_of_range() {
    assert!(timestamp_to_datetime(i64::MAX).is_err());
  }

  #[test]
  fn test_opt_timestamp_none() {
    assert!(opt_datetime_to_timestamp(None).is_none());
    assert_eq!(opt_timestamp_to_datetime(None).unwrap(), None);
  }

  #[test]
  fn test_opt_timestamp_some() {
    let ts = Some(1_702_209_600);
    let dt = opt_timestamp_to_datetime(ts).unwrap();
    assert_eq!(opt_datetime_to_timestamp(dt), ts);
  }
}

use chrono::{DateTime, Utc};
use std::str::FromStr;
use tracing::warn;

use crate::models::{StreamQuery, StreamStatus};

fn parse_or_warn<T: FromStr>(key: &str, value: &str) -> Option<T> {
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(key, value, "Ignoring invalid query parameter");
            None
        }
    }
}

fn parse_time(key: &str, value: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(time) => Some(time.with_timezone(&Utc)),
        Err(e) => {
            warn!(key, value, error = %e, "Ignoring invalid time in query");
            None
        }
    }
}

/// Build a [`StreamQuery`] from raw query pairs.
///
/// Unknown keys are skipped. Values that fail to parse are logged and
/// ignored, leaving the corresponding default in place. `status` may repeat.
pub fn parse_stream_query(pairs: &[(String, String)]) -> StreamQuery {
    let mut query = StreamQuery::default();

    for (key, value) in pairs {
        match key.as_str() {
            "page" => {
                if let Some(page) = parse_or_warn::<i32>(key, value).filter(|p| *p > 0) {
                    query.page = page;
                }
            }
            "page_size" => {
                if let Some(size) = parse_or_warn::<i32>(key, value).filter(|s| *s > 0) {
                    query.page_size = size;
                }
            }
            "sort_by" => query.sort_by = value.clone(),
            "ascending" => query.ascending = value == "true",
            "title_contains" => query.filter.title_contains = Some(value.clone()),
            "description_contains" => query.filter.description_contains = Some(value.clone()),
            "codec" => query.filter.codec = Some(value.clone()),
            "protocol" => query.filter.protocol = Some(value.clone()),
            "user_id" => query.filter.user_id = parse_or_warn(key, value),
            "min_view_count" => query.filter.min_view_count = parse_or_warn(key, value),
            "max_view_count" => query.filter.max_view_count = parse_or_warn(key, value),
            "start_time" => query.filter.start_time = parse_time(key, value),
            "end_time" => query.filter.end_time = parse_time(key, value),
            "end_time_after" => query.filter.end_time_after = parse_time(key, value),
            "end_time_before" => query.filter.end_time_before = parse_time(key, value),
            "status" => {
                if let Some(status) = parse_or_warn::<StreamStatus>(key, value) {
                    query.filter.status.push(status);
                }
            }
            _ => {}
        }
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        assert_eq!(parse_stream_query(&[]), StreamQuery::default());
    }

    #[test]
    fn test_full_query() {
        let query = parse_stream_query(&pairs(&[
            ("page", "3"),
            ("page_size", "25"),
            ("sort_by", "start_time"),
            ("ascending", "true"),
            ("title_contains", "launch"),
            ("user_id", "7"),
            ("min_view_count", "100"),
            ("end_time_after", "2024-05-01T10:00:00Z"),
            ("status", "ONLINE"),
            ("status", "offline"),
        ]));

        assert_eq!((query.page, query.page_size), (3, 25));
        assert_eq!(query.sort_by, "start_time");
        assert!(query.ascending);
        assert_eq!(query.filter.title_contains.as_deref(), Some("launch"));
        assert_eq!(query.filter.user_id, Some(7));
        assert_eq!(query.filter.min_view_count, Some(100));
        assert_eq!(
            query.filter.end_time_after,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(
            query.filter.status,
            vec![StreamStatus::Online, StreamStatus::Offline]
        );
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let query = parse_stream_query(&pairs(&[
            ("page", "abc"),
            ("page_size", "-4"),
            ("user_id", "seven"),
            ("start_time", "yesterday"),
            ("status", "LIVE"),
            ("ascending", "yes"),
        ]));

        assert_eq!((query.page, query.page_size), (1, 10));
        assert_eq!(query.filter.user_id, None);
        assert_eq!(query.filter.start_time, None);
        assert!(query.filter.status.is_empty());
        assert!(!query.ascending);
    }
}

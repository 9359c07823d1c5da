//! Stream ↔ wire conversions
//!
//! - [`StreamStatus`] ↔ `stream.v1.StreamStatus` (enum) and the database's status string
//! - `db.v1.StreamRecord` ↔ [`Stream`]
//! - `stream.v1` requests ↔ domain inputs and queries

use std::str::FromStr;

use chrono::{DateTime, Utc};
use grpc_client::conversions::{
    datetime_to_timestamp, opt_datetime_to_timestamp, opt_timestamp_to_datetime,
    timestamp_to_datetime,
};
use rpc::db::v1::{ListStreamRecordsRequest, StreamRecord, StreamRecordFilter};
use rpc::stream::v1 as api;

use crate::error::StreamError;
use crate::models::{
    CreateStream, NewStream, Stream, StreamFilter, StreamPage, StreamQuery, StreamStatus,
    UpdateStream,
};

fn invalid(field: &str) -> impl Fn(String) -> StreamError + '_ {
    move |e| StreamError::Validation(format!("{field}: {e}"))
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

// ============================================================================
// Status Conversions
// ============================================================================

impl From<StreamStatus> for api::StreamStatus {
    fn from(status: StreamStatus) -> Self {
        match status {
            StreamStatus::Scheduled => api::StreamStatus::Scheduled,
            StreamStatus::Online => api::StreamStatus::Online,
            StreamStatus::Offline => api::StreamStatus::Offline,
            StreamStatus::Complete => api::StreamStatus::Complete,
        }
    }
}

impl From<StreamStatus> for i32 {
    fn from(status: StreamStatus) -> Self {
        api::StreamStatus::from(status) as i32
    }
}

impl TryFrom<i32> for StreamStatus {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match api::StreamStatus::try_from(value) {
            Ok(api::StreamStatus::Scheduled) => Ok(StreamStatus::Scheduled),
            Ok(api::StreamStatus::Online) => Ok(StreamStatus::Online),
            Ok(api::StreamStatus::Offline) => Ok(StreamStatus::Offline),
            Ok(api::StreamStatus::Complete) => Ok(StreamStatus::Complete),
            Ok(api::StreamStatus::Unspecified) | Err(_) => {
                Err(format!("Invalid stream status: {}", value))
            }
        }
    }
}

// ============================================================================
// Database records
// ============================================================================

impl TryFrom<StreamRecord> for Stream {
    type Error = StreamError;

    fn try_from(record: StreamRecord) -> Result<Self, Self::Error> {
        let status = StreamStatus::from_str(&record.status).map_err(|_| {
            StreamError::InvalidRecord(format!("unknown stream status '{}'", record.status))
        })?;

        Ok(Stream {
            id: record.id,
            title: record.title,
            description: record.description,
            start_time: timestamp_to_datetime(record.start_time)
                .map_err(StreamError::InvalidRecord)?,
            end_time: timestamp_to_datetime(record.end_time).map_err(StreamError::InvalidRecord)?,
            stream_key: record.stream_key,
            resolution: record.resolution,
            bitrate: record.bitrate,
            frame_rate: record.frame_rate,
            codec: record.codec,
            view_count: record.view_count,
            protocol: record.protocol,
            status,
            user_id: record.user_id,
            created_at: timestamp_to_datetime(record.created_at)
                .map_err(StreamError::InvalidRecord)?,
            updated_at: timestamp_to_datetime(record.updated_at)
                .map_err(StreamError::InvalidRecord)?,
            deleted_at: opt_timestamp_to_datetime(record.deleted_at)
                .map_err(StreamError::InvalidRecord)?,
        })
    }
}

impl From<NewStream> for StreamRecord {
    fn from(stream: NewStream) -> Self {
        StreamRecord {
            id: 0,
            title: stream.title,
            description: stream.description,
            start_time: datetime_to_timestamp(stream.start_time),
            end_time: datetime_to_timestamp(stream.end_time),
            stream_key: stream.stream_key,
            resolution: stream.resolution,
            bitrate: stream.bitrate,
            frame_rate: stream.frame_rate,
            codec: stream.codec,
            view_count: 0,
            protocol: stream.protocol,
            status: stream.status.to_string(),
            user_id: stream.user_id,
            created_at: datetime_to_timestamp(stream.created_at),
            updated_at: datetime_to_timestamp(stream.updated_at),
            deleted_at: None,
        }
    }
}

impl From<Stream> for StreamRecord {
    fn from(stream: Stream) -> Self {
        StreamRecord {
            id: stream.id,
            title: stream.title,
            description: stream.description,
            start_time: datetime_to_timestamp(stream.start_time),
            end_time: datetime_to_timestamp(stream.end_time),
            stream_key: stream.stream_key,
            resolution: stream.resolution,
            bitrate: stream.bitrate,
            frame_rate: stream.frame_rate,
            codec: stream.codec,
            view_count: stream.view_count,
            protocol: stream.protocol,
            status: stream.status.to_string(),
            user_id: stream.user_id,
            created_at: datetime_to_timestamp(stream.created_at),
            updated_at: datetime_to_timestamp(stream.updated_at),
            deleted_at: opt_datetime_to_timestamp(stream.deleted_at),
        }
    }
}

impl From<StreamFilter> for StreamRecordFilter {
    fn from(filter: StreamFilter) -> Self {
        StreamRecordFilter {
            title_contains: filter.title_contains.unwrap_or_default(),
            description_contains: filter.description_contains.unwrap_or_default(),
            codec: filter.codec.unwrap_or_default(),
            protocol: filter.protocol.unwrap_or_default(),
            user_id: filter.user_id,
            min_view_count: filter.min_view_count,
            max_view_count: filter.max_view_count,
            start_time: opt_datetime_to_timestamp(filter.start_time),
            end_time: opt_datetime_to_timestamp(filter.end_time),
            end_time_after: opt_datetime_to_timestamp(filter.end_time_after),
            end_time_before: opt_datetime_to_timestamp(filter.end_time_before),
            status: filter.status.iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<StreamQuery> for ListStreamRecordsRequest {
    fn from(query: StreamQuery) -> Self {
        ListStreamRecordsRequest {
            page: query.page,
            page_size: query.page_size,
            filter: Some(query.filter.into()),
            sort_by: query.sort_by,
            ascending: query.ascending,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

impl From<Stream> for api::Stream {
    fn from(stream: Stream) -> Self {
        api::Stream {
            id: stream.id,
            title: stream.title,
            description: stream.description,
            start_time: datetime_to_timestamp(stream.start_time),
            end_time: datetime_to_timestamp(stream.end_time),
            stream_key: stream.stream_key,
            resolution: stream.resolution,
            bitrate: stream.bitrate,
            frame_rate: stream.frame_rate,
            codec: stream.codec,
            view_count: stream.view_count,
            protocol: stream.protocol,
            status: stream.status.into(),
            user_id: stream.user_id,
            created_at: datetime_to_timestamp(stream.created_at),
            updated_at: datetime_to_timestamp(stream.updated_at),
            deleted_at: opt_datetime_to_timestamp(stream.deleted_at),
        }
    }
}

impl From<StreamPage> for api::ListStreamsResponse {
    fn from(page: StreamPage) -> Self {
        api::ListStreamsResponse {
            streams: page.streams.into_iter().map(Into::into).collect(),
            total_count: page.total_count,
            page: page.page,
            page_size: page.page_size,
        }
    }
}

fn opt_time(field: &str, value: Option<i64>) -> Result<Option<DateTime<Utc>>, StreamError> {
    opt_timestamp_to_datetime(value).map_err(invalid(field))
}

impl TryFrom<api::CreateStreamRequest> for CreateStream {
    type Error = StreamError;

    /// An unspecified status means "scheduled"
    fn try_from(req: api::CreateStreamRequest) -> Result<Self, Self::Error> {
        let status = match req.status {
            0 => StreamStatus::default(),
            other => StreamStatus::try_from(other).map_err(invalid("status"))?,
        };

        Ok(CreateStream {
            title: req.title,
            description: req.description,
            start_time: timestamp_to_datetime(req.start_time).map_err(invalid("start_time"))?,
            end_time: timestamp_to_datetime(req.end_time).map_err(invalid("end_time"))?,
            stream_key: req.stream_key,
            resolution: req.resolution,
            bitrate: req.bitrate,
            frame_rate: req.frame_rate,
            codec: req.codec,
            protocol: req.protocol,
            status,
            user_id: req.user_id,
        })
    }
}

impl TryFrom<api::UpdateStreamRequest> for UpdateStream {
    type Error = StreamError;

    fn try_from(req: api::UpdateStreamRequest) -> Result<Self, Self::Error> {
        Ok(UpdateStream {
            title: req.title,
            description: req.description,
            start_time: opt_time("start_time", req.start_time)?,
            end_time: opt_time("end_time", req.end_time)?,
            resolution: req.resolution,
            bitrate: req.bitrate,
            frame_rate: req.frame_rate,
            codec: req.codec,
            protocol: req.protocol,
            status: req
                .status
                .map(StreamStatus::try_from)
                .transpose()
                .map_err(invalid("status"))?,
        })
    }
}

impl TryFrom<api::StreamFilter> for StreamFilter {
    type Error = StreamError;

    /// Unspecified status values are ignored
    fn try_from(filter: api::StreamFilter) -> Result<Self, Self::Error> {
        Ok(StreamFilter {
            title_contains: non_empty(filter.title_contains),
            description_contains: non_empty(filter.description_contains),
            codec: non_empty(filter.codec),
            protocol: non_empty(filter.protocol),
            user_id: filter.user_id,
            min_view_count: filter.min_view_count,
            max_view_count: filter.max_view_count,
            start_time: opt_time("start_time", filter.start_time)?,
            end_time: opt_time("end_time", filter.end_time)?,
            end_time_after: opt_time("end_time_after", filter.end_time_after)?,
            end_time_before: opt_time("end_time_before", filter.end_time_before)?,
            status: filter
                .status
                .into_iter()
                .filter_map(|s| StreamStatus::try_from(s).ok())
                .collect(),
        })
    }
}

impl TryFrom<api::ListStreamsRequest> for StreamQuery {
    type Error = StreamError;

    fn try_from(req: api::ListStreamsRequest) -> Result<Self, Self::Error> {
        Ok(StreamQuery {
            page: req.page,
            page_size: req.page_size,
            filter: req.filter.map(StreamFilter::try_from).transpose()?.unwrap_or_default(),
            sort_by: req.sort_by,
            ascending: req.ascending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> StreamRecord {
        StreamRecord {
            id: 1,
            title: "Launch".into(),
            start_time: 1_700_000_000,
            end_time: 1_700_003_600,
            stream_key: "0123456789abcdef".into(),
            status: "ONLINE".into(),
            user_id: 4,
            created_at: 1_699_990_000,
            updated_at: 1_699_990_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_record_status_string() {
        let stream = Stream::try_from(record()).unwrap();
        assert_eq!(stream.status, StreamStatus::Online);
        assert_eq!(StreamRecord::from(stream).status, "ONLINE");

        let err = Stream::try_from(StreamRecord {
            status: "LIVE".into(),
            ..record()
        })
        .unwrap_err();
        assert!(matches!(err, StreamError::InvalidRecord(_)));
    }

    #[test]
    fn test_status_enum_values() {
        assert_eq!(i32::from(StreamStatus::Complete), api::StreamStatus::Complete as i32);
        assert!(StreamStatus::try_from(0).is_err());
        assert!(StreamStatus::try_from(42).is_err());
    }

    #[test]
    fn test_create_request_defaults_status() {
        let input = CreateStream::try_from(api::CreateStreamRequest {
            title: "Launch".into(),
            start_time: 1_700_000_000,
            end_time: 1_700_003_600,
            user_id: 4,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(input.status, StreamStatus::Scheduled);
        assert!(input.stream_key.is_empty());
    }

    #[test]
    fn test_filter_from_api() {
        let filter = StreamFilter::try_from(api::StreamFilter {
            codec: "h264".into(),
            status: vec![
                api::StreamStatus::Online as i32,
                api::StreamStatus::Unspecified as i32,
                api::StreamStatus::Complete as i32,
            ],
            min_view_count: Some(10),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(filter.codec.as_deref(), Some("h264"));
        assert!(filter.title_contains.is_none());
        assert_eq!(filter.status, vec![StreamStatus::Online, StreamStatus::Complete]);

        let record = StreamRecordFilter::from(filter);
        assert_eq!(record.status, vec!["ONLINE".to_string(), "COMPLETE".to_string()]);
        assert_eq!(record.min_view_count, Some(10));
    }
}

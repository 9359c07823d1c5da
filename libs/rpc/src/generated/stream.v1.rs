// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Stream {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub title: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub description: ::prost::alloc::string::String,
    #[prost(int64, tag = "4")]
    pub start_time: i64,
    #[prost(int64, tag = "5")]
    pub end_time: i64,
    #[prost(string, tag = "6")]
    pub stream_key: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub resolution: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub bitrate: ::prost::alloc::string::String,
    #[prost(string, tag = "9")]
    pub frame_rate: ::prost::alloc::string::String,
    #[prost(string, tag = "10")]
    pub codec: ::prost::alloc::string::String,
    #[prost(int32, tag = "11")]
    pub view_count: i32,
    #[prost(string, tag = "12")]
    pub protocol: ::prost::alloc::string::String,
    #[prost(enumeration = "StreamStatus", tag = "13")]
    pub status: i32,
    #[prost(int32, tag = "14")]
    pub user_id: i32,
    #[prost(int64, tag = "15")]
    pub created_at: i64,
    #[prost(int64, tag = "16")]
    pub updated_at: i64,
    #[prost(int64, optional, tag = "17")]
    pub deleted_at: ::core::option::Option<i64>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CreateStreamRequest {
    #[prost(string, tag = "1")]
    pub title: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
    #[prost(int64, tag = "3")]
    pub start_time: i64,
    #[prost(int64, tag = "4")]
    pub end_time: i64,
    #[prost(string, tag = "5")]
    pub stream_key: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub resolution: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub bitrate: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub frame_rate: ::prost::alloc::string::String,
    #[prost(string, tag = "9")]
    pub codec: ::prost::alloc::string::String,
    #[prost(string, tag = "10")]
    pub protocol: ::prost::alloc::string::String,
    #[prost(enumeration = "StreamStatus", tag = "11")]
    pub status: i32,
    #[prost(int32, tag = "12")]
    pub user_id: i32,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetStreamRequest {
    #[prost(int32, tag = "1")]
    pub id: i32,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct UpdateStreamRequest {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, optional, tag = "2")]
    pub title: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "3")]
    pub description: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int64, optional, tag = "4")]
    pub start_time: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "5")]
    pub end_time: ::core::option::Option<i64>,
    #[prost(string, optional, tag = "6")]
    pub resolution: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "7")]
    pub bitrate: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "8")]
    pub frame_rate: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "9")]
    pub codec: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "10")]
    pub protocol: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(enumeration = "StreamStatus", optional, tag = "11")]
    pub status: ::core::option::Option<i32>,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteStreamRequest {
    #[prost(int32, tag = "1")]
    pub id: i32,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteStreamResponse {}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct StreamFilter {
    #[prost(string, tag = "1")]
    pub title_contains: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub description_contains: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub codec: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub protocol: ::prost::alloc::string::String,
    #[prost(int32, optional, tag = "5")]
    pub user_id: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "6")]
    pub min_view_count: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "7")]
    pub max_view_count: ::core::option::Option<i32>,
    #[prost(int64, optional, tag = "8")]
    pub start_time: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "9")]
    pub end_time: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "10")]
    pub end_time_after: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "11")]
    pub end_time_before: ::core::option::Option<i64>,
    #[prost(enumeration = "StreamStatus", repeated, tag = "12")]
    pub status: ::prost::alloc::vec::Vec<i32>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListStreamsRequest {
    #[prost(int32, tag = "1")]
    pub page: i32,
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    #[prost(message, optional, tag = "3")]
    pub filter: ::core::option::Option<StreamFilter>,
    #[prost(string, tag = "4")]
    pub sort_by: ::prost::alloc::string::String,
    #[prost(bool, tag = "5")]
    pub ascending: bool,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListStreamsResponse {
    #[prost(message, repeated, tag = "1")]
    pub streams: ::prost::alloc::vec::Vec<Stream>,
    #[prost(int64, tag = "2")]
    pub total_count: i64,
    #[prost(int32, tag = "3")]
    pub page: i32,
    #[prost(int32, tag = "4")]
    pub page_size: i32,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum StreamStatus {
    Unspecified = 0,
    Scheduled = 1,
    Online = 2,
    Offline = 3,
    Complete = 4,
}
impl StreamStatus {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "STREAM_STATUS_UNSPECIFIED",
            Self::Scheduled => "STREAM_STATUS_SCHEDULED",
            Self::Online => "STREAM_STATUS_ONLINE",
            Self::Offline => "STREAM_STATUS_OFFLINE",
            Self::Complete => "STREAM_STATUS_COMPLETE",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "STREAM_STATUS_UNSPECIFIED" => Some(Self::Unspecified),
            "STREAM_STATUS_SCHEDULED" => Some(Self::Scheduled),
            "STREAM_STATUS_ONLINE" => Some(Self::Online),
            "STREAM_STATUS_OFFLINE" => Some(Self::Offline),
            "STREAM_STATUS_COMPLETE" => Some(Self::Complete),
            _ => None,
        }
    }
}
include!("stream.v1.tonic.rs");
// @@protoc_insertion_point(module)

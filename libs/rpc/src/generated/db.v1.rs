// @generated
// This file is @generated by prost-build.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct RecordId {
    #[prost(int32, tag = "1")]
    pub id: i32,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteRecordResponse {}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CommentRecord {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub content: ::prost::alloc::string::String,
    #[prost(int32, tag = "3")]
    pub user_id: i32,
    #[prost(int32, tag = "4")]
    pub stream_id: i32,
    #[prost(int64, tag = "5")]
    pub created_at: i64,
    #[prost(int64, tag = "6")]
    pub updated_at: i64,
    #[prost(int64, optional, tag = "7")]
    pub deleted_at: ::core::option::Option<i64>,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListCommentRecordsRequest {
    #[prost(int32, optional, tag = "1")]
    pub user_id: ::core::option::Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub stream_id: ::core::option::Option<i32>,
    #[prost(int32, tag = "3")]
    pub page: i32,
    #[prost(int32, tag = "4")]
    pub page_size: i32,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListCommentRecordsResponse {
    #[prost(message, repeated, tag = "1")]
    pub comments: ::prost::alloc::vec::Vec<CommentRecord>,
    #[prost(int64, tag = "2")]
    pub total_count: i64,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct UserRecord {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub external_id: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub username: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub first_name: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub last_name: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub profile_image_url: ::prost::alloc::string::String,
    #[prost(int64, tag = "8")]
    pub created_at: i64,
    #[prost(int64, tag = "9")]
    pub updated_at: i64,
    #[prost(int64, optional, tag = "10")]
    pub last_login: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "11")]
    pub deleted_at: ::core::option::Option<i64>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ExternalIdLookup {
    #[prost(string, tag = "1")]
    pub external_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct EmailLookup {
    #[prost(string, tag = "1")]
    pub email: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct UsernameLookup {
    #[prost(string, tag = "1")]
    pub username: ::prost::alloc::string::String,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListUserRecordsRequest {
    #[prost(int32, tag = "1")]
    pub page: i32,
    #[prost(int32, tag = "2")]
    pub page_size: i32,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListUserRecordsResponse {
    #[prost(message, repeated, tag = "1")]
    pub users: ::prost::alloc::vec::Vec<UserRecord>,
    #[prost(int64, tag = "2")]
    pub total_count: i64,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct StreamRecord {
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
    #[prost(string, tag = "13")]
    pub status: ::prost::alloc::string::String,
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
pub struct StreamRecordFilter {
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
    #[prost(string, repeated, tag = "12")]
    pub status: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListStreamRecordsRequest {
    #[prost(int32, tag = "1")]
    pub page: i32,
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    #[prost(message, optional, tag = "3")]
    pub filter: ::core::option::Option<StreamRecordFilter>,
    #[prost(string, tag = "4")]
    pub sort_by: ::prost::alloc::string::String,
    #[prost(bool, tag = "5")]
    pub ascending: bool,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListStreamRecordsResponse {
    #[prost(message, repeated, tag = "1")]
    pub streams: ::prost::alloc::vec::Vec<StreamRecord>,
    #[prost(int64, tag = "2")]
    pub total_count: i64,
}
include!("db.v1.tonic.rs");
// @@protoc_insertion_point(module)

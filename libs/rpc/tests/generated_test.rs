//! Every package exposes its messages together with its client and server modules.

use std::any::type_name;

use rpc::{comment, db, stream, user};
use tonic::transport::Channel;

#[test]
fn test_service_names() {
    assert_eq!(
        comment::v1::comment_service_server::SERVICE_NAME,
        "comment.v1.CommentService"
    );
    assert_eq!(user::v1::user_service_server::SERVICE_NAME, "user.v1.UserService");
    assert_eq!(
        stream::v1::stream_service_server::SERVICE_NAME,
        "stream.v1.StreamService"
    );
    assert_eq!(db::v1::database_service_server::SERVICE_NAME, "db.v1.DatabaseService");
}

#[test]
fn test_clients_are_generated() {
    let clients = [
        type_name::<comment::v1::comment_service_client::CommentServiceClient<Channel>>(),
        type_name::<user::v1::user_service_client::UserServiceClient<Channel>>(),
        type_name::<stream::v1::stream_service_client::StreamServiceClient<Channel>>(),
        type_name::<db::v1::database_service_client::DatabaseServiceClient<Channel>>(),
    ];

    for client in clients {
        assert!(client.contains("_service_client::"), "{client}");
    }
}

#[test]
fn test_messages_sit_beside_services() {
    let comment = comment::v1::Comment {
        id: 1,
        content: "hello".to_string(),
        ..Default::default()
    };
    assert_eq!(comment.deleted_at, None);
    assert_eq!(stream::v1::StreamStatus::default(), stream::v1::StreamStatus::Unspecified);
}

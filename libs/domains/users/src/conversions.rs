//! User ↔ wire conversions

use grpc_client::conversions::{
    datetime_to_timestamp, opt_datetime_to_timestamp, opt_timestamp_to_datetime,
    timestamp_to_datetime,
};
use rpc::db::v1::{ListUserRecordsRequest, UserRecord};
use rpc::user::v1 as api;

use crate::error::UserError;
use crate::models::{CreateUser, NewUser, UpdateUser, User, UserFilter};

impl TryFrom<UserRecord> for User {
    type Error = UserError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        Ok(User {
            id: record.id,
            external_id: record.external_id,
            email: record.email,
            username: record.username,
            first_name: record.first_name,
            last_name: record.last_name,
            profile_image_url: record.profile_image_url,
            created_at: timestamp_to_datetime(record.created_at).map_err(UserError::InvalidRecord)?,
            updated_at: timestamp_to_datetime(record.updated_at).map_err(UserError::InvalidRecord)?,
            last_login: opt_timestamp_to_datetime(record.last_login)
                .map_err(UserError::InvalidRecord)?,
        })
    }
}

impl From<NewUser> for UserRecord {
    fn from(user: NewUser) -> Self {
        UserRecord {
            id: 0,
            external_id: user.external_id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            profile_image_url: user.profile_image_url,
            created_at: datetime_to_timestamp(user.created_at),
            updated_at: datetime_to_timestamp(user.updated_at),
            last_login: opt_datetime_to_timestamp(user.last_login),
            deleted_at: None,
        }
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        UserRecord {
            id: user.id,
            external_id: user.external_id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            profile_image_url: user.profile_image_url,
            created_at: datetime_to_timestamp(user.created_at),
            updated_at: datetime_to_timestamp(user.updated_at),
            last_login: opt_datetime_to_timestamp(user.last_login),
            deleted_at: None,
        }
    }
}

impl From<UserFilter> for ListUserRecordsRequest {
    fn from(filter: UserFilter) -> Self {
        ListUserRecordsRequest {
            page: filter.page,
            page_size: filter.page_size,
        }
    }
}

impl From<User> for api::User {
    fn from(user: User) -> Self {
        api::User {
            id: user.id,
            external_id: user.external_id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            profile_image_url: user.profile_image_url,
            created_at: datetime_to_timestamp(user.created_at),
            updated_at: datetime_to_timestamp(user.updated_at),
            last_login: opt_datetime_to_timestamp(user.last_login),
        }
    }
}

impl From<api::CreateUserRequest> for CreateUser {
    fn from(req: api::CreateUserRequest) -> Self {
        CreateUser {
            external_id: req.external_id,
            email: req.email,
            username: req.username,
            first_name: req.first_name,
            last_name: req.last_name,
            profile_image_url: req.profile_image_url,
        }
    }
}

impl From<api::UpdateUserRequest> for UpdateUser {
    fn from(req: api::UpdateUserRequest) -> Self {
        UpdateUser {
            email: req.email,
            username: req.username,
            first_name: req.first_name,
            last_name: req.last_name,
            profile_image_url: req.profile_image_url,
        }
    }
}

impl From<api::ListUsersRequest> for UserFilter {
    fn from(req: api::ListUsersRequest) -> Self {
        UserFilter {
            page: req.page,
            page_size: req.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_last_login() {
        let user = User::try_from(UserRecord {
            id: 3,
            external_id: "ext".into(),
            email: "a@b.io".into(),
            username: "abc".into(),
            created_at: 1_700_000_000,
            updated_at: 1_700_000_000,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(user.id, 3);
        assert!(user.last_login.is_none());
        assert_eq!(api::User::from(user).last_login, None);
    }
}

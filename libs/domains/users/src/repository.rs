use async_trait::async_trait;
use grpc_client::CallContext;

use crate::error::UserResult;
use crate::models::{NewUser, User, UserFilter, UserPage};

/// Data access for users. Lookups return `None` when nothing matches.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, ctx: &CallContext, user: NewUser) -> UserResult<User>;

    async fn get_by_id(&self, ctx: &CallContext, id: i32) -> UserResult<Option<User>>;

    async fn get_by_external_id(
        &self,
        ctx: &CallContext,
        external_id: &str,
    ) -> UserResult<Option<User>>;

    async fn get_by_email(&self, ctx: &CallContext, email: &str) -> UserResult<Option<User>>;

    async fn get_by_username(&self, ctx: &CallContext, username: &str) -> UserResult<Option<User>>;

    async fn update(&self, ctx: &CallContext, user: User) -> UserResult<User>;

    /// `false` when no user has this id
    async fn delete(&self, ctx: &CallContext, id: i32) -> UserResult<bool>;

    async fn list(&self, ctx: &CallContext, filter: UserFilter) -> UserResult<UserPage>;
}

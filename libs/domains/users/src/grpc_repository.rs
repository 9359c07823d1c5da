use async_trait::async_trait;
use grpc_client::{CallContext, TracingInterceptor, configure_client};
use rpc::db::v1::database_service_client::DatabaseServiceClient;
use rpc::db::v1::{
    EmailLookup, ExternalIdLookup, ListUserRecordsRequest, RecordId, UserRecord, UsernameLookup,
};
use tonic::Code;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Channel;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User, UserFilter, UserPage};
use crate::repository::UserRepository;

/// [`UserRepository`] backed by `db.v1.DatabaseService`
#[derive(Clone)]
pub struct GrpcUserRepository {
    client: DatabaseServiceClient<InterceptedService<Channel, TracingInterceptor>>,
}

impl GrpcUserRepository {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: configure_client!(DatabaseServiceClient::with_interceptor(
                channel,
                TracingInterceptor::new()
            )),
        }
    }
}

fn lookup(result: Result<tonic::Response<UserRecord>, tonic::Status>) -> UserResult<Option<User>> {
    match result {
        Ok(response) => User::try_from(response.into_inner()).map(Some),
        Err(status) if status.code() == Code::NotFound => Ok(None),
        Err(status) => Err(UserError::Downstream(status)),
    }
}

#[async_trait]
impl UserRepository for GrpcUserRepository {
    #[instrument(skip(self, ctx, user), fields(username = %user.username))]
    async fn create(&self, ctx: &CallContext, user: NewUser) -> UserResult<User> {
        let record = self
            .client
            .clone()
            .create_user(ctx.request(UserRecord::from(user))?)
            .await?
            .into_inner();
        User::try_from(record)
    }

    #[instrument(skip(self, ctx))]
    async fn get_by_id(&self, ctx: &CallContext, id: i32) -> UserResult<Option<User>> {
        lookup(self.client.clone().get_user(ctx.request(RecordId { id })?).await)
    }

    #[instrument(skip(self, ctx))]
    async fn get_by_external_id(
        &self,
        ctx: &CallContext,
        external_id: &str,
    ) -> UserResult<Option<User>> {
        let request = ctx.request(ExternalIdLookup {
            external_id: external_id.to_string(),
        })?;
        lookup(self.client.clone().get_user_by_external_id(request).await)
    }

    #[instrument(skip(self, ctx))]
    async fn get_by_email(&self, ctx: &CallContext, email: &str) -> UserResult<Option<User>> {
        let request = ctx.request(EmailLookup {
            email: email.to_string(),
        })?;
        lookup(self.client.clone().get_user_by_email(request).await)
    }

    #[instrument(skip(self, ctx))]
    async fn get_by_username(&self, ctx: &CallContext, username: &str) -> UserResult<Option<User>> {
        let request = ctx.request(UsernameLookup {
            username: username.to_string(),
        })?;
        lookup(self.client.clone().get_user_by_username(request).await)
    }

    #[instrument(skip(self, ctx, user), fields(id = user.id))]
    async fn update(&self, ctx: &CallContext, user: User) -> UserResult<User> {
        let record = self
            .client
            .clone()
            .update_user(ctx.request(UserRecord::from(user))?)
            .await?
            .into_inner();
        User::try_from(record)
    }

    #[instrument(skip(self, ctx))]
    async fn delete(&self, ctx: &CallContext, id: i32) -> UserResult<bool> {
        match self.client.clone().delete_user(ctx.request(RecordId { id })?).await {
            Ok(_) => Ok(true),
            Err(status) if status.code() == Code::NotFound => Ok(false),
            Err(status) => Err(UserError::Downstream(status)),
        }
    }

    #[instrument(skip(self, ctx))]
    async fn list(&self, ctx: &CallContext, filter: UserFilter) -> UserResult<UserPage> {
        let response = self
            .client
            .clone()
            .list_users(ctx.request(ListUserRecordsRequest::from(filter))?)
            .await?
            .into_inner();

        let users = response
            .users
            .into_iter()
            .map(User::try_from)
            .collect::<UserResult<Vec<_>>>()?;

        Ok(UserPage {
            users,
            total_count: response.total_count,
        })
    }
}

//! User gRPC service implementation

use std::sync::Arc;

use domain_users::{CreateUser, UpdateUser, UserFilter, UserRepository, UserService};
use grpc_client::{CallContext, ToTonicOption};
use rpc::user::v1::{
    CreateUserRequest, DeleteUserRequest, DeleteUserResponse, GetUserByExternalIdRequest,
    GetUserRequest, ListUsersRequest, ListUsersResponse, UpdateUserRequest, User,
    user_service_server::UserService as UserApi,
};
use tonic::{Code, Request, Response, Status};
use tracing::{error, info, warn};

fn reported(operation: &str, status: Status) -> Status {
    if status.code() == Code::Internal {
        error!(operation, "{}", status.message());
    } else {
        warn!(operation, code = ?status.code(), "{}", status.message());
    }
    status
}

/// gRPC service implementation for users
pub struct UserServiceImpl<R>
where
    R: UserRepository + 'static,
{
    service: Arc<UserService<R>>,
}

impl<R> UserServiceImpl<R>
where
    R: UserRepository + 'static,
{
    pub fn new(service: UserService<R>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

#[tonic::async_trait]
impl<R> UserApi for UserServiceImpl<R>
where
    R: UserRepository + 'static,
{
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<User>, Status> {
        let ctx = CallContext::from_request(&request);
        let input = CreateUser::from(request.into_inner());

        let user = self
            .service
            .create_user(&ctx, input)
            .await
            .map_err(|e| reported("create_user", e.into()))?;

        info!(id = user.id, "Created user");
        Ok(Response::new(user.into()))
    }

    async fn get_user(&self, request: Request<GetUserRequest>) -> Result<Response<User>, Status> {
        let ctx = CallContext::from_request(&request);
        let id = request.into_inner().id;

        let user = self
            .service
            .get_user(&ctx, id)
            .await
            .map_err(|e| reported("get_user", e.into()))?;

        Ok(Response::new(user.into()))
    }

    async fn get_user_by_external_id(
        &self,
        request: Request<GetUserByExternalIdRequest>,
    ) -> Result<Response<User>, Status> {
        let ctx = CallContext::from_request(&request);
        let external_id = Some(request.into_inner().external_id)
            .filter(|id| !id.is_empty())
            .ok_or_invalid("external_id is required")?;

        let user = self
            .service
            .get_user_by_external_id(&ctx, &external_id)
            .await
            .map_err(|e| reported("get_user_by_external_id", e.into()))?;

        Ok(Response::new(user.into()))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<User>, Status> {
        let ctx = CallContext::from_request(&request);
        let req = request.into_inner();
        let id = req.id;

        let user = self
            .service
            .update_user(&ctx, id, UpdateUser::from(req))
            .await
            .map_err(|e| reported("update_user", e.into()))?;

        Ok(Response::new(user.into()))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        let ctx = CallContext::from_request(&request);
        let id = request.into_inner().id;

        self.service
            .delete_user(&ctx, id)
            .await
            .map_err(|e| reported("delete_user", e.into()))?;

        info!(id, "Deleted user");
        Ok(Response::new(DeleteUserResponse {}))
    }

    async fn list_users(
        &self,
        request: Request<ListUsersRequest>,
    ) -> Result<Response<ListUsersResponse>, Status> {
        let ctx = CallContext::from_request(&request);
        let filter = UserFilter::from(request.into_inner());

        let page = self
            .service
            .list_users(&ctx, filter)
            .await
            .map_err(|e| reported("list_users", e.into()))?;

        Ok(Response::new(ListUsersResponse {
            users: page.users.into_iter().map(Into::into).collect(),
            total_count: page.total_count,
        }))
    }
}

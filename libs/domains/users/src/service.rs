use std::sync::Arc;

use grpc_client::CallContext;
use grpc_client::conversions::wire_now;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, NewUser, UpdateUser, User, UserFilter, UserPage};
use crate::repository::UserRepository;

/// Service layer for User business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a user after validation and uniqueness checks on email and username
    #[instrument(skip(self, ctx, input), fields(username = %input.username))]
    pub async fn create_user(&self, ctx: &CallContext, input: CreateUser) -> UserResult<User> {
        input.validate()?;

        self.ensure_email_free(ctx, &input.email).await?;
        self.ensure_username_free(ctx, &input.username).await?;

        self.repository
            .create(ctx, NewUser::from_input(input, wire_now()))
            .await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_user(&self, ctx: &CallContext, id: i32) -> UserResult<User> {
        self.repository
            .get_by_id(ctx, id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_user_by_external_id(
        &self,
        ctx: &CallContext,
        external_id: &str,
    ) -> UserResult<User> {
        self.repository
            .get_by_external_id(ctx, external_id)
            .await?
            .ok_or_else(|| UserError::ExternalIdNotFound(external_id.to_string()))
    }

    /// Apply the non-empty fields of `input` to an existing user
    #[instrument(skip(self, ctx, input))]
    pub async fn update_user(
        &self,
        ctx: &CallContext,
        id: i32,
        input: UpdateUser,
    ) -> UserResult<User> {
        let input = input.without_empty();
        input.validate()?;

        let mut user = self
            .repository
            .get_by_id(ctx, id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        if let Some(email) = input.email.as_deref().filter(|e| *e != user.email) {
            self.ensure_email_free(ctx, email).await?;
        }
        if let Some(username) = input.username.as_deref().filter(|u| *u != user.username) {
            self.ensure_username_free(ctx, username).await?;
        }

        user.apply_update(input);
        user.updated_at = wire_now();

        self.repository.update(ctx, user).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn delete_user(&self, ctx: &CallContext, id: i32) -> UserResult<()> {
        let deleted = self.repository.delete(ctx, id).await?;

        if !deleted {
            return Err(UserError::NotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self, ctx))]
    pub async fn list_users(&self, ctx: &CallContext, filter: UserFilter) -> UserResult<UserPage> {
        let filter = filter.normalized().map_err(UserError::InvalidPage)?;
        self.repository.list(ctx, filter).await
    }

    async fn ensure_email_free(&self, ctx: &CallContext, email: &str) -> UserResult<()> {
        match self.repository.get_by_email(ctx, email).await? {
            Some(_) => Err(UserError::EmailTaken(email.to_string())),
            None => Ok(()),
        }
    }

    async fn ensure_username_free(&self, ctx: &CallContext, username: &str) -> UserResult<()> {
        match self.repository.get_by_username(ctx, username).await? {
            Some(_) => Err(UserError::UsernameTaken(username.to_string())),
            None => Ok(()),
        }
    }
}

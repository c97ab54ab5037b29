use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::{
    domain::entities::UserId,
    ports::outgoing::{UserQuery, UserQueryError},
};

#[derive(Clone, Debug)]
pub struct FetchUserOutput {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error, Clone)]
pub enum FetchUserError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

#[async_trait]
pub trait FetchUserProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<FetchUserOutput, FetchUserError>;
}

pub struct FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchUserProfileUseCase for FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, user_id: UserId) -> Result<FetchUserOutput, FetchUserError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(FetchUserError::UserNotFound(user_id))?;

        Ok(FetchUserOutput {
            user_id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        })
    }
}

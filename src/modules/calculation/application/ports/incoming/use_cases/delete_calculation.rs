use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::ports::outgoing::calculation_repository::CalculationRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCalculationError {
    #[error("Calculation not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CalculationRepositoryError> for DeleteCalculationError {
    fn from(err: CalculationRepositoryError) -> Self {
        match err {
            CalculationRepositoryError::NotFound => DeleteCalculationError::NotFound,
            other => DeleteCalculationError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteCalculationUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), DeleteCalculationError>;
}

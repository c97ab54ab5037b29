use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::ports::outgoing::calculation_repository::CalculationRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ClearHistoryError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CalculationRepositoryError> for ClearHistoryError {
    fn from(err: CalculationRepositoryError) -> Self {
        ClearHistoryError::RepositoryError(err.to_string())
    }
}

/// Removes every calculation the user owns. Clearing an empty history
/// succeeds and reports zero.
#[async_trait]
pub trait ClearHistoryUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<u64, ClearHistoryError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::entities::Calculation;
use crate::modules::calculation::application::ports::outgoing::calculation_query::CalculationQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleCalculationError {
    /// Also returned when the row exists but belongs to someone else.
    #[error("Calculation not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<CalculationQueryError> for GetSingleCalculationError {
    fn from(err: CalculationQueryError) -> Self {
        match err {
            CalculationQueryError::NotFound => GetSingleCalculationError::NotFound,
            other => GetSingleCalculationError::QueryFailed(other.to_string()),
        }
    }
}

#[async_trait]
pub trait GetSingleCalculationUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
    ) -> Result<Calculation, GetSingleCalculationError>;
}

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::ports::outgoing::calculation_query::CalculationQueryError;
use crate::modules::history::application::domain::statistics::CalculationStatistics;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetStatisticsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<CalculationQueryError> for GetStatisticsError {
    fn from(err: CalculationQueryError) -> Self {
        GetStatisticsError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetStatisticsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<CalculationStatistics, GetStatisticsError>;
}

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::entities::Calculation;
use crate::modules::calculation::application::ports::outgoing::calculation_query::{
    CalculationQueryError, PageRequest, PageResult,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCalculationsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<CalculationQueryError> for GetCalculationsError {
    fn from(err: CalculationQueryError) -> Self {
        GetCalculationsError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetCalculationsUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<Calculation>, GetCalculationsError>;
}

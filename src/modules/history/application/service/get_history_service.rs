use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::ports::outgoing::CalculationQuery;
use crate::modules::history::application::ports::incoming::use_cases::{
    CalculationHistory, GetHistoryError, GetHistoryUseCase, HistoryRequest,
};

pub struct GetHistoryService<Q>
where
    Q: CalculationQuery,
{
    query: Q,
}

impl<Q> GetHistoryService<Q>
where
    Q: CalculationQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetHistoryUseCase for GetHistoryService<Q>
where
    Q: CalculationQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        request: HistoryRequest,
    ) -> Result<CalculationHistory, GetHistoryError> {
        let calculations = self.query.recent(owner, request.limit).await?;

        Ok(CalculationHistory {
            total_calculations: calculations.len() as u64,
            calculations,
        })
    }
}

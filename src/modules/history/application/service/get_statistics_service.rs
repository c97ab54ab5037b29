use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::ports::outgoing::CalculationQuery;
use crate::modules::history::application::domain::statistics::{summarize, CalculationStatistics};
use crate::modules::history::application::ports::incoming::use_cases::{
    GetStatisticsError, GetStatisticsUseCase,
};

/// Recomputes statistics on every call from the owner's rows, oldest first.
pub struct GetStatisticsService<Q>
where
    Q: CalculationQuery,
{
    query: Q,
}

impl<Q> GetStatisticsService<Q>
where
    Q: CalculationQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetStatisticsUseCase for GetStatisticsService<Q>
where
    Q: CalculationQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<CalculationStatistics, GetStatisticsError> {
        let records = self.query.all(owner).await?;
        Ok(summarize(&records))
    }
}

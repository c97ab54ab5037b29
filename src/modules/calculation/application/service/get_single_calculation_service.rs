use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::entities::Calculation;
use crate::modules::calculation::application::ports::incoming::use_cases::{
    GetSingleCalculationError, GetSingleCalculationUseCase,
};
use crate::modules::calculation::application::ports::outgoing::calculation_query::CalculationQuery;

pub struct GetSingleCalculationService<Q>
where
    Q: CalculationQuery,
{
    query: Q,
}

impl<Q> GetSingleCalculationService<Q>
where
    Q: CalculationQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleCalculationUseCase for GetSingleCalculationService<Q>
where
    Q: CalculationQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
    ) -> Result<Calculation, GetSingleCalculationError> {
        Ok(self.query.get_by_id(owner, id).await?)
    }
}

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::entities::Calculation;
use crate::modules::calculation::application::ports::incoming::use_cases::{
    GetCalculationsError, GetCalculationsUseCase,
};
use crate::modules::calculation::application::ports::outgoing::calculation_query::{
    CalculationQuery, PageRequest, PageResult,
};

pub struct GetCalculationsService<Q>
where
    Q: CalculationQuery,
{
    query: Q,
}

impl<Q> GetCalculationsService<Q>
where
    Q: CalculationQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCalculationsUseCase for GetCalculationsService<Q>
where
    Q: CalculationQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<Calculation>, GetCalculationsError> {
        Ok(self.query.list(owner, page).await?)
    }
}

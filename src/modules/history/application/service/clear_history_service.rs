use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::ports::outgoing::CalculationRepository;
use crate::modules::history::application::ports::incoming::use_cases::{
    ClearHistoryError, ClearHistoryUseCase,
};

pub struct ClearHistoryService<R>
where
    R: CalculationRepository,
{
    repository: R,
}

impl<R> ClearHistoryService<R>
where
    R: CalculationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ClearHistoryUseCase for ClearHistoryService<R>
where
    R: CalculationRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<u64, ClearHistoryError> {
        Ok(self.repository.delete_all_by_owner(owner).await?)
    }
}

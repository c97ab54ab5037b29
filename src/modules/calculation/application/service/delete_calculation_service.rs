use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::ports::incoming::use_cases::{
    DeleteCalculationError, DeleteCalculationUseCase,
};
use crate::modules::calculation::application::ports::outgoing::calculation_repository::CalculationRepository;

pub struct DeleteCalculationService<R>
where
    R: CalculationRepository,
{
    repository: R,
}

impl<R> DeleteCalculationService<R>
where
    R: CalculationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCalculationUseCase for DeleteCalculationService<R>
where
    R: CalculationRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), DeleteCalculationError> {
        Ok(self.repository.delete(owner, id).await?)
    }
}

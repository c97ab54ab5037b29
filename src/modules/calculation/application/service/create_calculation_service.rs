use async_trait::async_trait;

use crate::modules::calculation::application::domain::calculator;
use crate::modules::calculation::application::domain::entities::{Calculation, Operation};
use crate::modules::calculation::application::ports::incoming::use_cases::{
    CreateCalculationCommand, CreateCalculationError, CreateCalculationUseCase,
};
use crate::modules::calculation::application::ports::outgoing::calculation_repository::{
    CalculationRepository, CalculationRepositoryError, NewCalculation,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateCalculationService<R>
where
    R: CalculationRepository,
{
    repository: R,
}

impl<R> CreateCalculationService<R>
where
    R: CalculationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCalculationUseCase for CreateCalculationService<R>
where
    R: CalculationRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCalculationCommand,
    ) -> Result<Calculation, CreateCalculationError> {
        // Nothing is stored unless the engine accepts the input
        let result = calculator::perform(&command.operation, command.operand1, command.operand2)?;
        let operation = command
            .operation
            .parse::<Operation>()
            .map_err(calculator::CalculationError::from)?;

        self.repository
            .insert(NewCalculation {
                owner: command.owner,
                operation,
                operand1: command.operand1,
                operand2: command.operand2,
                result,
            })
            .await
            .map_err(|e| match e {
                CalculationRepositoryError::OwnerNotFound => CreateCalculationError::OwnerNotFound,
                other => CreateCalculationError::RepositoryError(other.to_string()),
            })
    }
}

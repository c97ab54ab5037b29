use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::calculator::CalculationError;
use crate::modules::calculation::application::domain::entities::Calculation;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Raw request; the operation name is validated by the engine so an unknown
/// value can be reported back verbatim.
#[derive(Debug, Clone)]
pub struct CreateCalculationCommand {
    pub owner: UserId,
    pub operation: String,
    pub operand1: f64,
    pub operand2: f64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateCalculationError {
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Operands must be finite numbers")]
    InvalidOperand,

    #[error("Result is out of range")]
    ResultOutOfRange,

    #[error("Owner no longer exists")]
    OwnerNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CalculationError> for CreateCalculationError {
    fn from(err: CalculationError) -> Self {
        match err {
            CalculationError::InvalidOperation(op) => CreateCalculationError::InvalidOperation(op),
            CalculationError::DivisionByZero => CreateCalculationError::DivisionByZero,
            CalculationError::InvalidOperand => CreateCalculationError::InvalidOperand,
            CalculationError::NonFiniteResult => CreateCalculationError::ResultOutOfRange,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCalculationUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateCalculationCommand,
    ) -> Result<Calculation, CreateCalculationError>;
}

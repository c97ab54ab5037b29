use super::entities::{Operation, UnknownOperation};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculationError {
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Operands must be finite numbers")]
    InvalidOperand,

    #[error("Result is out of range")]
    NonFiniteResult,
}

impl From<UnknownOperation> for CalculationError {
    fn from(err: UnknownOperation) -> Self {
        CalculationError::InvalidOperation(err.0)
    }
}

/// Parses `operation` and applies it to the operands.
pub fn perform(operation: &str, operand1: f64, operand2: f64) -> Result<f64, CalculationError> {
    let operation: Operation = operation.parse()?;
    apply(operation, operand1, operand2)
}

fn apply(operation: Operation, operand1: f64, operand2: f64) -> Result<f64, CalculationError> {
    if !operand1.is_finite() || !operand2.is_finite() {
        return Err(CalculationError::InvalidOperand);
    }

    let result = match operation {
        Operation::Add => operand1 + operand2,
        Operation::Subtract => operand1 - operand2,
        Operation::Multiply => operand1 * operand2,
        Operation::Divide => {
            if operand2 == 0.0 {
                return Err(CalculationError::DivisionByZero);
            }
            operand1 / operand2
        }
    };

    if !result.is_finite() {
        return Err(CalculationError::NonFiniteResult);
    }

    Ok(result)
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::entities::{Calculation, Operation};

/// A calculation that has already been evaluated and is ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCalculation {
    pub owner: UserId,
    pub operation: Operation,
    pub operand1: f64,
    pub operand2: f64,
    pub result: f64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CalculationRepositoryError {
    #[error("Calculation not found")]
    NotFound,

    #[error("Owner does not exist")]
    OwnerNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write side. Every operation is scoped to an owner.
#[async_trait]
pub trait CalculationRepository: Send + Sync {
    async fn insert(&self, data: NewCalculation) -> Result<Calculation, CalculationRepositoryError>;

    /// Fails with `NotFound` when no row matches both `id` and `owner`.
    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), CalculationRepositoryError>;

    /// Returns the number of rows removed.
    async fn delete_all_by_owner(&self, owner: UserId) -> Result<u64, CalculationRepositoryError>;
}

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::entities::Calculation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: u64,
    pub limit: u64,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u64 = 100;
    pub const MAX_LIMIT: u64 = 100;
    /// Postgres binds OFFSET as a signed BIGINT.
    pub const MAX_SKIP: u64 = i64::MAX as u64;

    /// Applies defaults, clamps `limit` to `1..=MAX_LIMIT` and `skip` to `MAX_SKIP`.
    pub fn new(skip: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            skip: skip.unwrap_or(0).min(Self::MAX_SKIP),
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub skip: u64,
    pub limit: u64,
    pub total: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CalculationQueryError {
    #[error("Calculation not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt calculation row: {0}")]
    CorruptRow(String),
}

/// Read side. Nothing here ever returns another owner's rows.
#[async_trait]
pub trait CalculationQuery: Send + Sync {
    async fn get_by_id(
        &self,
        owner: UserId,
        id: Uuid,
    ) -> Result<Calculation, CalculationQueryError>;

    /// Oldest first (`created_at`, then `id`).
    async fn list(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<Calculation>, CalculationQueryError>;

    /// Newest first, at most `limit` rows.
    async fn recent(
        &self,
        owner: UserId,
        limit: u64,
    ) -> Result<Vec<Calculation>, CalculationQueryError>;

    /// Every row of the owner, oldest first.
    async fn all(&self, owner: UserId) -> Result<Vec<Calculation>, CalculationQueryError>;
}

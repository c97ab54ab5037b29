use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;
use crate::modules::calculation::application::domain::entities::Calculation;
use crate::modules::calculation::application::ports::outgoing::calculation_query::CalculationQueryError;

//
// ──────────────────────────────────────────────────────────
// Request
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRequest {
    pub limit: u64,
}

impl HistoryRequest {
    pub const DEFAULT_LIMIT: u64 = 50;
    pub const MAX_LIMIT: u64 = 500;

    pub fn new(limit: Option<u64>) -> Self {
        Self {
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
        }
    }
}

impl Default for HistoryRequest {
    fn default() -> Self {
        Self::new(None)
    }
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

/// Most recent calculations first. `total_calculations` counts the rows
/// returned, not every row the user owns.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationHistory {
    pub total_calculations: u64,
    pub calculations: Vec<Calculation>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetHistoryError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<CalculationQueryError> for GetHistoryError {
    fn from(err: CalculationQueryError) -> Self {
        GetHistoryError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetHistoryUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        request: HistoryRequest,
    ) -> Result<CalculationHistory, GetHistoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_limit_defaults_and_clamps() {
        assert_eq!(HistoryRequest::default().limit, 50);
        assert_eq!(HistoryRequest::new(Some(0)).limit, 1);
        assert_eq!(HistoryRequest::new(Some(10_000)).limit, 500);
        assert_eq!(HistoryRequest::new(Some(20)).limit, 20);
    }
}

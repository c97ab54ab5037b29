use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::modules::calculation::application::domain::entities::Calculation;
use crate::modules::calculation::application::ports::outgoing::calculation_query::{
    PageRequest, PageResult,
};

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCalculationRequest {
    /// One of `add`, `subtract`, `multiply`, `divide`
    #[schema(example = "add")]
    pub operation: String,

    #[schema(example = 10.0)]
    pub operand1: f64,

    #[schema(example = 5.0)]
    pub operand2: f64,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Rows to skip (default 0)
    pub skip: Option<u64>,

    /// Page size, clamped to 1..=100 (default 100)
    pub limit: Option<u64>,
}

impl From<PaginationQuery> for PageRequest {
    fn from(q: PaginationQuery) -> Self {
        PageRequest::new(q.skip, q.limit)
    }
}

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculationResponse {
    #[schema(example = "9b2f4c1e-7d7a-4a8e-9f57-3c2b1a0d9e8f")]
    pub id: Uuid,

    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub user_id: Uuid,

    #[schema(example = "add")]
    pub operation: String,

    #[schema(example = 10.0)]
    pub operand1: f64,

    #[schema(example = 5.0)]
    pub operand2: f64,

    #[schema(example = 15.0)]
    pub result: f64,

    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

impl From<Calculation> for CalculationResponse {
    fn from(c: Calculation) -> Self {
        Self {
            id: c.id,
            user_id: c.owner.into(),
            operation: c.operation.as_str().to_string(),
            operand1: c.operand1,
            operand2: c.operand2,
            result: c.result,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CalculationPageResponse {
    pub items: Vec<CalculationResponse>,
    #[schema(example = 0)]
    pub skip: u64,
    #[schema(example = 100)]
    pub limit: u64,
    #[schema(example = 2)]
    pub total: u64,
}

impl From<PageResult<Calculation>> for CalculationPageResponse {
    fn from(page: PageResult<Calculation>) -> Self {
        Self {
            items: page.items.into_iter().map(CalculationResponse::from).collect(),
            skip: page.skip,
            limit: page.limit,
            total: page.total,
        }
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

use crate::modules::calculation::adapter::incoming::web::routes::dto::CalculationResponse;
use crate::modules::history::application::domain::statistics::CalculationStatistics;
use crate::modules::history::application::ports::incoming::use_cases::{
    CalculationHistory, HistoryRequest,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// Maximum rows, clamped to 1..=500 (default 50)
    pub limit: Option<u64>,
}

impl From<HistoryQuery> for HistoryRequest {
    fn from(q: HistoryQuery) -> Self {
        HistoryRequest::new(q.limit)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponse {
    #[schema(example = 2)]
    pub total_calculations: u64,
    pub calculations: Vec<CalculationResponse>,
}

impl From<CalculationHistory> for HistoryResponse {
    fn from(h: CalculationHistory) -> Self {
        Self {
            total_calculations: h.total_calculations,
            calculations: h
                .calculations
                .into_iter()
                .map(CalculationResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatisticsResponse {
    #[schema(example = 2)]
    pub total_calculations: u64,

    #[schema(example = json!({ "add": 1, "multiply": 1 }))]
    pub operations_count: BTreeMap<String, u64>,

    #[schema(example = 6.5)]
    pub average_operand1: Option<f64>,

    #[schema(example = 4.5)]
    pub average_operand2: Option<f64>,

    #[schema(example = 13.5)]
    pub average_result: Option<f64>,

    #[schema(example = "add")]
    pub most_used_operation: Option<String>,

    pub latest_calculation: Option<CalculationResponse>,
}

impl From<CalculationStatistics> for StatisticsResponse {
    fn from(s: CalculationStatistics) -> Self {
        Self {
            total_calculations: s.total_calculations,
            operations_count: s
                .operations_count
                .into_iter()
                .map(|(op, n)| (op.as_str().to_string(), n))
                .collect(),
            average_operand1: s.average_operand1,
            average_operand2: s.average_operand2,
            average_result: s.average_result,
            most_used_operation: s.most_used_operation.map(|op| op.as_str().to_string()),
            latest_calculation: s.latest_calculation.map(CalculationResponse::from),
        }
    }
}

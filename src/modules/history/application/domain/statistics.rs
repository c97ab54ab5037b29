use serde::Serialize;
use std::collections::BTreeMap;

use crate::modules::calculation::application::domain::entities::{Calculation, Operation};

/// Summary of a user's calculations. Every optional field is `None` when
/// there is nothing to summarise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationStatistics {
    pub total_calculations: u64,
    pub operations_count: BTreeMap<Operation, u64>,
    pub average_operand1: Option<f64>,
    pub average_operand2: Option<f64>,
    pub average_result: Option<f64>,
    pub most_used_operation: Option<Operation>,
    pub latest_calculation: Option<Calculation>,
}

impl CalculationStatistics {
    pub fn empty() -> Self {
        Self {
            total_calculations: 0,
            operations_count: BTreeMap::new(),
            average_operand1: None,
            average_operand2: None,
            average_result: None,
            most_used_operation: None,
            latest_calculation: None,
        }
    }
}

/// Aggregates `records` in the order given.
///
/// Ties on the most used operation go to the operation seen first; ties on
/// `created_at` go to the earliest record in the slice.
pub fn summarize(records: &[Calculation]) -> CalculationStatistics {
    if records.is_empty() {
        return CalculationStatistics::empty();
    }

    let mut operations_count: BTreeMap<Operation, u64> = BTreeMap::new();
    let mut first_seen: Vec<Operation> = Vec::with_capacity(Operation::ALL.len());
    let (mut sum1, mut sum2, mut sum_result) = (0.0_f64, 0.0_f64, 0.0_f64);
    let mut latest = &records[0];

    for record in records {
        let count = operations_count.entry(record.operation).or_insert(0);
        if *count == 0 {
            first_seen.push(record.operation);
        }
        *count += 1;

        sum1 += record.operand1;
        sum2 += record.operand2;
        sum_result += record.result;

        if record.created_at > latest.created_at {
            latest = record;
        }
    }

    let mut most_used: Option<(Operation, u64)> = None;
    for op in first_seen {
        let count = operations_count[&op];
        if most_used.map_or(true, |(_, best)| count > best) {
            most_used = Some((op, count));
        }
    }

    let n = records.len() as f64;

    CalculationStatistics {
        total_calculations: records.len() as u64,
        operations_count,
        average_operand1: Some(round2(sum1 / n)),
        average_operand2: Some(round2(sum2 / n)),
        average_result: Some(round2(sum_result / n)),
        most_used_operation: most_used.map(|(op, _)| op),
        latest_calculation: Some(latest.clone()),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

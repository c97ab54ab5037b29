pub mod statistics;

pub use statistics::{summarize, CalculationStatistics};

mod clear_history;
mod get_history;
mod get_statistics;

pub use clear_history::{ClearHistoryError, ClearHistoryUseCase};
pub use get_history::{CalculationHistory, GetHistoryError, GetHistoryUseCase, HistoryRequest};
pub use get_statistics::{GetStatisticsError, GetStatisticsUseCase};

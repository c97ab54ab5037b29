pub mod dto;

mod clear_history;
mod get_history;
mod get_statistics;

pub use clear_history::{__path_clear_history_handler, clear_history_handler};
pub use dto::{HistoryQuery, HistoryResponse, StatisticsResponse};
pub use get_history::{__path_get_history_handler, get_history_handler};
pub use get_statistics::{__path_get_statistics_handler, get_statistics_handler};

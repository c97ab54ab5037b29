pub mod clear_history_service;
pub mod get_history_service;
pub mod get_statistics_service;

pub use clear_history_service::ClearHistoryService;
pub use get_history_service::GetHistoryService;
pub use get_statistics_service::GetStatisticsService;

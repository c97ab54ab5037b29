use std::sync::Arc;

use crate::modules::history::application::ports::incoming::use_cases::{
    ClearHistoryUseCase, GetHistoryUseCase, GetStatisticsUseCase,
};

#[derive(Clone)]
pub struct HistoryUseCases {
    pub get_history: Arc<dyn GetHistoryUseCase + Send + Sync>,
    pub get_statistics: Arc<dyn GetStatisticsUseCase + Send + Sync>,
    pub clear: Arc<dyn ClearHistoryUseCase + Send + Sync>,
}

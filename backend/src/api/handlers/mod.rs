use crate::config::settings::AppConfig;
use crate::dataset::Dataset;

pub mod dashboard;
pub mod players;
pub mod teams;

/// Shared, read-only state handed to every request
pub struct AppState {
    pub dataset: Dataset,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(dataset: Dataset, config: AppConfig) -> Self {
        Self { dataset, config }
    }

    pub fn top_n(&self) -> usize {
        self.config.dashboard.top_n
    }
}

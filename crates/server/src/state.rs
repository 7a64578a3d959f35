use std::sync::Arc;

use configs::PaginationConfig;
use service::settings::SettingsService;

/// Per-process state shared by all handlers. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<SettingsService>,
    pub pagination: PaginationConfig,
}

impl AppState {
    pub fn new(settings: Arc<SettingsService>, pagination: PaginationConfig) -> Self {
        Self { settings, pagination }
    }
}

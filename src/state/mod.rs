use crate::application::RecordService;
use crate::infra::app_config::AppConfig;
use crate::infra::db::Database;
use anyhow::Result;

/// Everything the presentation layer needs after startup.
pub struct AppState {
    pub config: AppConfig,
    pub records: RecordService,
}

impl AppState {
    /// Provision the store described by `config`.
    pub fn new(config: AppConfig) -> Result<Self> {
        let db = Database::open(&config)?;
        Ok(Self {
            config,
            records: RecordService::new(db),
        })
    }
}

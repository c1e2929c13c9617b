use std::sync::Arc;

use club_api::{ApiClient, ApiError};
use club_config::ClubConfig;
use club_engine::SyncOptions;

/// Shared state handed to every command handler.
pub struct AppContext {
    pub config: ClubConfig,
    pub client: Arc<ApiClient>,
}

impl AppContext {
    pub fn init(config: ClubConfig) -> Result<Self, ApiError> {
        let client = Arc::new(ApiClient::new(&config.api)?);
        tracing::debug!(base_url = client.base_url(), "club backend client ready");
        Ok(Self { config, client })
    }

    /// Batch persistence settings from the `[sync]` section.
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            concurrency: self.config.sync.concurrency,
            call_timeout: self.config.sync.call_timeout(),
        }
    }

    pub fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }
}

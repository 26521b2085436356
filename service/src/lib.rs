use config::Config;
use sse::Manager;
use std::sync::Arc;

pub mod config;
pub mod logging;

// Process-wide state handed to the router
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sse_manager: Arc<Manager>,
}

impl AppState {
    pub fn new(app_config: Config) -> Self {
        let sse_manager = Arc::new(Manager::new(app_config.tick_interval()));

        Self {
            config: app_config,
            sse_manager,
        }
    }
}

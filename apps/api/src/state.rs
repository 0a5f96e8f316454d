use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::form::FormState;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one form this process edits. Handlers hold the lock for a whole
    /// mutate-and-render step, so renders never interleave.
    pub form: Arc<Mutex<FormState>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            form: Arc::new(Mutex::new(FormState::new())),
            config,
        }
    }
}

//! Application state for the web layer.

use std::sync::Arc;

use crate::backend::Backend;
use crate::planner::PlanConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Station resolver and route provider
    pub backend: Arc<Backend>,

    /// Default planning thresholds; requests may override them
    pub config: Arc<PlanConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(backend: Backend, config: PlanConfig) -> Self {
        Self {
            backend: Arc::new(backend),
            config: Arc::new(config),
        }
    }
}

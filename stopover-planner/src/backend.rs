//! Selection of the route data source at startup.

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::cache::{CacheConfig, CachedNavitimeClient};
use crate::domain::{RouteResult, StationId};
use crate::navitime::{MockNavitimeClient, NavitimeClient, NavitimeConfig, NavitimeError};
use crate::planner::{RouteProvider, StationResolver};
use crate::settings::Settings;

/// Station resolver and route provider used by the binaries.
pub enum Backend {
    /// Live NAVITIME API behind a response cache.
    Live(CachedNavitimeClient),
    /// Fixture data from disk.
    Mock(MockNavitimeClient),
}

impl Backend {
    /// Build the backend described by `settings`.
    ///
    /// A mock directory takes precedence over an API key. With neither, the
    /// live client is built with an empty key and every request will fail.
    pub fn from_settings(settings: &Settings) -> Result<Self, NavitimeError> {
        if let Some(dir) = &settings.mock_dir {
            info!(dir = %dir.display(), "using mock NAVITIME data");
            return MockNavitimeClient::from_dir(dir).map(Backend::Mock);
        }

        let api_key = settings.api_key.clone().unwrap_or_else(|| {
            warn!("RAPIDAPI_KEY not set. API calls will fail.");
            String::new()
        });

        let client = NavitimeClient::new(NavitimeConfig::new(api_key))?;
        Ok(Backend::Live(CachedNavitimeClient::new(
            client,
            &CacheConfig::default(),
        )))
    }
}

impl StationResolver for Backend {
    async fn resolve(&self, name: &str) -> Option<StationId> {
        match self {
            Backend::Live(client) => client.resolve(name).await,
            Backend::Mock(client) => client.resolve(name).await,
        }
    }
}

impl RouteProvider for Backend {
    async fn route(
        &self,
        origin: &StationId,
        destination: &StationId,
        departure: NaiveDateTime,
    ) -> RouteResult {
        match self {
            Backend::Live(client) => client.route(origin, destination, departure).await,
            Backend::Mock(client) => client.route(origin, destination, departure).await,
        }
    }
}

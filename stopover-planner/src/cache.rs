//! Caching layer for NAVITIME API responses.
//!
//! Station ids are stable, so name lookups are cached for a long time. Route
//! answers change with the timetable and are cached briefly, keyed by the
//! exact query. Failed requests are never cached: a transient error must not
//! pin a "no route" answer.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use moka::future::Cache as MokaCache;
use tracing::{debug, warn};

use crate::domain::{RouteResult, StationId};
use crate::navitime::{NavitimeClient, NavitimeError};
use crate::planner::{RouteProvider, StationResolver};

/// Cache key for routes: (origin, destination, departure).
type RouteKey = (StationId, StationId, NaiveDateTime);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for station name lookups.
    pub station_ttl: Duration,

    /// TTL for route answers.
    pub route_ttl: Duration,

    /// Maximum number of cached entries per cache.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            station_ttl: Duration::from_secs(24 * 60 * 60),
            route_ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

/// NAVITIME client with caching.
///
/// Wraps a `NavitimeClient` and caches successful responses.
pub struct CachedNavitimeClient {
    client: NavitimeClient,
    stations: MokaCache<String, StationId>,
    routes: MokaCache<RouteKey, Arc<RouteResult>>,
}

impl CachedNavitimeClient {
    /// Create a new cached client.
    pub fn new(client: NavitimeClient, config: &CacheConfig) -> Self {
        Self {
            client,
            stations: MokaCache::builder()
                .time_to_live(config.station_ttl)
                .max_capacity(config.max_capacity)
                .build(),
            routes: MokaCache::builder()
                .time_to_live(config.route_ttl)
                .max_capacity(config.max_capacity)
                .build(),
        }
    }

    /// Look up a station id, using the cache if available.
    ///
    /// Unknown names are not cached.
    pub async fn find_station(&self, name: &str) -> Result<Option<StationId>, NavitimeError> {
        if let Some(id) = self.stations.get(name).await {
            debug!(name, "station cache hit");
            return Ok(Some(id));
        }

        let found = self.client.find_station(name).await?;
        if let Some(id) = &found {
            self.stations.insert(name.to_string(), id.clone()).await;
        }
        Ok(found)
    }

    /// Search a route, using the cache if available.
    pub async fn search_route(
        &self,
        origin: &StationId,
        destination: &StationId,
        departure: NaiveDateTime,
    ) -> Result<Arc<RouteResult>, NavitimeError> {
        let key = (origin.clone(), destination.clone(), departure);

        if let Some(cached) = self.routes.get(&key).await {
            debug!(%origin, %destination, %departure, "route cache hit");
            return Ok(cached);
        }

        let route = Arc::new(
            self.client
                .search_route(origin, destination, departure)
                .await?,
        );
        self.routes.insert(key, route.clone()).await;

        Ok(route)
    }
}

impl StationResolver for CachedNavitimeClient {
    async fn resolve(&self, name: &str) -> Option<StationId> {
        match self.find_station(name).await {
            Ok(found) => {
                if found.is_none() {
                    warn!(name, "station not found");
                }
                found
            }
            Err(e) => {
                warn!(name, error = %e, "station lookup failed");
                None
            }
        }
    }
}

impl RouteProvider for CachedNavitimeClient {
    async fn route(
        &self,
        origin: &StationId,
        destination: &StationId,
        departure: NaiveDateTime,
    ) -> RouteResult {
        match self.search_route(origin, destination, departure).await {
            Ok(route) => RouteResult::clone(&route),
            Err(e) => {
                warn!(%origin, %destination, error = %e, "route search failed");
                RouteResult::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.station_ttl, Duration::from_secs(86400));
        assert_eq!(config.route_ttl, Duration::from_secs(600));
        assert_eq!(config.max_capacity, 1000);
    }
}

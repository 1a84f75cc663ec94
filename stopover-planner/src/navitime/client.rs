//! NAVITIME HTTP client (via RapidAPI).
//!
//! Two RapidAPI products are used: `navitime-transport` for station name
//! lookup and `navitime-route-totalnavi` for route search. Both take the
//! same API key but a different `X-RapidAPI-Host` header.

use std::sync::Arc;

use chrono::NaiveDateTime;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::domain::{RouteResult, StationId, format_wire_time};
use crate::planner::{RouteProvider, StationResolver};

use super::convert::{convert_route, first_station_id};
use super::error::NavitimeError;
use super::types::{RouteResponse, TransportNodeResponse};

/// RapidAPI host of the station search product.
pub const TRANSPORT_HOST: &str = "navitime-transport.p.rapidapi.com";

/// RapidAPI host of the route search product.
pub const ROUTE_HOST: &str = "navitime-route-totalnavi.p.rapidapi.com";

/// Vehicle types excluded from route search: local trains only.
const UNUSED_TRANSPORT: &str = "domestic_flight.superexpress_train.sleeper_ultraexpress.\
ultraexpress_train.express_train.semiexpress_train.shuttle_bus";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the NAVITIME client.
#[derive(Debug, Clone)]
pub struct NavitimeConfig {
    /// RapidAPI key
    pub api_key: String,
    /// Base URL for station search (defaults to RapidAPI)
    pub transport_base_url: String,
    /// Base URL for route search (defaults to RapidAPI)
    pub route_base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NavitimeConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            transport_base_url: format!("https://{TRANSPORT_HOST}"),
            route_base_url: format!("https://{ROUTE_HOST}"),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom station search base URL (for testing).
    pub fn with_transport_base_url(mut self, url: impl Into<String>) -> Self {
        self.transport_base_url = url.into();
        self
    }

    /// Set a custom route search base URL (for testing).
    pub fn with_route_base_url(mut self, url: impl Into<String>) -> Self {
        self.route_base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// NAVITIME API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct NavitimeClient {
    http: reqwest::Client,
    transport_base_url: String,
    route_base_url: String,
    semaphore: Arc<Semaphore>,
}

impl NavitimeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NavitimeConfig) -> Result<Self, NavitimeError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| NavitimeError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert("X-RapidAPI-Key", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            transport_base_url: config.transport_base_url,
            route_base_url: config.route_base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Look up a station id by name.
    ///
    /// Returns `Ok(None)` if the search succeeded but matched nothing.
    pub async fn find_station(&self, name: &str) -> Result<Option<StationId>, NavitimeError> {
        let url = format!("{}/transport_node", self.transport_base_url);
        let response: TransportNodeResponse = self
            .get_json(&url, TRANSPORT_HOST, &[("word", name.to_string())])
            .await?;

        Ok(first_station_id(response.items.as_deref().unwrap_or(&[])))
    }

    /// Search the best local-train route between two stations.
    ///
    /// Returns an empty route if NAVITIME found none.
    pub async fn search_route(
        &self,
        origin: &StationId,
        destination: &StationId,
        departure: NaiveDateTime,
    ) -> Result<RouteResult, NavitimeError> {
        let url = format!("{}/route_transit", self.route_base_url);
        let response: RouteResponse = self
            .get_json(
                &url,
                ROUTE_HOST,
                &[
                    ("start", origin.as_str().to_string()),
                    ("goal", destination.as_str().to_string()),
                    ("start_time", format_wire_time(departure)),
                    ("unuse", UNUSED_TRANSPORT.to_string()),
                    ("options", "railway_calling_at".to_string()),
                ],
            )
            .await?;

        Ok(convert_route(&response))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        host: &'static str,
        query: &[(&str, String)],
    ) -> Result<T, NavitimeError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| NavitimeError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        debug!(url, "NAVITIME request");

        let response = self
            .http
            .get(url)
            .header("X-RapidAPI-Host", host)
            .query(query)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(NavitimeError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(NavitimeError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NavitimeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| NavitimeError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl StationResolver for NavitimeClient {
    async fn resolve(&self, name: &str) -> Option<StationId> {
        match self.find_station(name).await {
            Ok(Some(id)) => Some(id),
            Ok(None) => {
                warn!(name, "station not found");
                None
            }
            Err(e) => {
                warn!(name, error = %e, "station lookup failed");
                None
            }
        }
    }
}

impl RouteProvider for NavitimeClient {
    async fn route(
        &self,
        origin: &StationId,
        destination: &StationId,
        departure: NaiveDateTime,
    ) -> RouteResult {
        self.search_route(origin, destination, departure)
            .await
            .unwrap_or_else(|e| {
                warn!(%origin, %destination, error = %e, "route search failed");
                RouteResult::empty()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = NavitimeConfig::new("test-key")
            .with_transport_base_url("http://localhost:8080")
            .with_route_base_url("http://localhost:8081")
            .with_max_concurrent(10)
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.transport_base_url, "http://localhost:8080");
        assert_eq!(config.route_base_url, "http://localhost:8081");
        assert_eq!(config.max_concurrent, 10);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = NavitimeConfig::new("test-key");

        assert_eq!(
            config.transport_base_url,
            "https://navitime-transport.p.rapidapi.com"
        );
        assert_eq!(
            config.route_base_url,
            "https://navitime-route-totalnavi.p.rapidapi.com"
        );
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn unused_transport_excludes_express_services() {
        let excluded: Vec<&str> = UNUSED_TRANSPORT.split('.').collect();
        assert_eq!(excluded.len(), 7);
        assert!(excluded.contains(&"superexpress_train"));
        assert!(excluded.contains(&"shuttle_bus"));
        assert!(!UNUSED_TRANSPORT.contains(' '));
    }

    #[test]
    fn client_creation() {
        assert!(NavitimeClient::new(NavitimeConfig::new("test-key")).is_ok());
        assert!(NavitimeClient::new(NavitimeConfig::new("bad\nkey")).is_err());
    }
}

//! Mock NAVITIME client for development without API access.
//!
//! Loads station names and canned route responses from a directory:
//!
//! ```text
//! <dir>/stations.json          {"品川": "00007965", ...}
//! <dir>/routes/<origin>.json   a route_transit response
//! ```
//!
//! Routes are keyed by origin only. The requested destination and
//! departure time are ignored, since mock data is static.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::domain::{RouteResult, StationId};
use crate::planner::{RouteProvider, StationResolver};

use super::convert::convert_route;
use super::error::NavitimeError;
use super::types::RouteResponse;

/// Mock client that serves data from JSON files.
#[derive(Debug, Clone)]
pub struct MockNavitimeClient {
    stations: Arc<HashMap<String, StationId>>,
    routes: Arc<HashMap<StationId, RouteResult>>,
}

impl MockNavitimeClient {
    /// Load mock data from `data_dir`.
    ///
    /// `stations.json` is required; the `routes` directory may be missing,
    /// in which case every route query returns no route.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, NavitimeError> {
        let data_dir = data_dir.as_ref();

        let stations_path = data_dir.join("stations.json");
        let json = std::fs::read_to_string(&stations_path).map_err(|e| {
            NavitimeError::MockData(format!("failed to read {}: {e}", stations_path.display()))
        })?;
        let raw: HashMap<String, String> = serde_json::from_str(&json).map_err(|e| {
            NavitimeError::MockData(format!("failed to parse {}: {e}", stations_path.display()))
        })?;

        let mut stations = HashMap::with_capacity(raw.len());
        for (name, id) in raw {
            let id = StationId::parse(&id)
                .map_err(|e| NavitimeError::MockData(format!("station {name}: {e}")))?;
            stations.insert(name, id);
        }

        let routes = load_routes(&data_dir.join("routes"))?;

        info!(
            dir = %data_dir.display(),
            stations = stations.len(),
            routes = routes.len(),
            "loaded mock NAVITIME data"
        );

        Ok(Self {
            stations: Arc::new(stations),
            routes: Arc::new(routes),
        })
    }
}

fn load_routes(dir: &Path) -> Result<HashMap<StationId, RouteResult>, NavitimeError> {
    let mut routes = HashMap::new();
    if !dir.is_dir() {
        return Ok(routes);
    }

    let entries = std::fs::read_dir(dir).map_err(|e| {
        NavitimeError::MockData(format!("failed to read {}: {e}", dir.display()))
    })?;

    for entry in entries {
        let path = entry
            .map_err(|e| NavitimeError::MockData(format!("failed to read directory entry: {e}")))?
            .path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }

        let origin = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| StationId::parse(s).ok())
            .ok_or_else(|| {
                NavitimeError::MockData(format!("invalid route filename: {}", path.display()))
            })?;

        let json = std::fs::read_to_string(&path).map_err(|e| {
            NavitimeError::MockData(format!("failed to read {}: {e}", path.display()))
        })?;
        let response: RouteResponse = serde_json::from_str(&json).map_err(|e| {
            NavitimeError::MockData(format!("failed to parse {}: {e}", path.display()))
        })?;

        routes.insert(origin, convert_route(&response));
    }

    Ok(routes)
}

impl StationResolver for MockNavitimeClient {
    async fn resolve(&self, name: &str) -> Option<StationId> {
        self.stations.get(name).cloned()
    }
}

impl RouteProvider for MockNavitimeClient {
    async fn route(
        &self,
        origin: &StationId,
        _destination: &StationId,
        departure: NaiveDateTime,
    ) -> RouteResult {
        debug!(%origin, %departure, "mock route query");
        self.routes.get(origin).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn loads_stations_and_routes() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("stations.json"), r#"{"品川": "00007965"}"#).unwrap();
        std::fs::create_dir(dir.path().join("routes")).unwrap();
        std::fs::write(
            dir.path().join("routes/00007965.json"),
            r#"{"items": [{"sections": [{"type": "point"}]}]}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("routes/README.txt"), "ignored").unwrap();

        let mock = MockNavitimeClient::from_dir(dir.path()).unwrap();
        let id = mock.resolve("品川").await.unwrap();
        assert_eq!(id.as_str(), "00007965");
        assert!(mock.resolve("仙台").await.is_none());

        let departure = chrono::NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(mock.route(&id, &id, departure).await.segments.len(), 1);

        let other = StationId::parse("1").unwrap();
        assert!(mock.route(&other, &id, departure).await.is_empty());
    }

    #[test]
    fn missing_stations_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = MockNavitimeClient::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, NavitimeError::MockData(_)));
    }

    #[test]
    fn routes_directory_is_optional() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("stations.json"), "{}").unwrap();
        assert!(MockNavitimeClient::from_dir(dir.path()).is_ok());
    }
}

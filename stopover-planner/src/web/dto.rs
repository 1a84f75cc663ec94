//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::DayPlan;

/// Request to resolve a station name.
#[derive(Debug, Deserialize)]
pub struct ResolveStationRequest {
    /// Station name, e.g. "品川"
    pub name: String,
}

/// A resolved station.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveStationResponse {
    pub name: String,
    pub node_id: String,
}

/// Request to plan a multi-day trip.
#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    /// Origin station name
    pub origin: String,

    /// Destination station name
    pub destination: String,

    /// First-day departure, `YYYY-MM-DDTHH:MM:SS` (optional `+09:00`)
    pub start_time: String,

    /// Daily travel limit in minutes (defaults to server config)
    pub max_travel_time: Option<i64>,

    /// Latest arrival hour (defaults to server config)
    pub latest_stop_time: Option<u32>,
}

/// Planned trip: one list of stopover candidates per night.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanTripResponse {
    pub days: Vec<DayPlan>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

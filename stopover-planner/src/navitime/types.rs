//! NAVITIME API response DTOs.
//!
//! These types map directly to the JSON returned by the route search and
//! transport node endpoints. Almost every field is optional: the service
//! omits keys freely, and the converter decides what is usable.

use serde::{Deserialize, Serialize};

/// Response from `route_transit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteResponse {
    /// Candidate routes, best first. Only the first is used.
    pub items: Option<Vec<RouteItem>>,
}

/// One candidate route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteItem {
    pub sections: Option<Vec<SectionDto>>,
}

/// A section of a route: a move or a point (station, transfer, walk end).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionDto {
    /// `"move"` for travel sections; anything else is a point.
    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub departure: Option<PointDto>,

    pub arrival: Option<PointDto>,

    /// Present on move sections when `railway_calling_at` was requested.
    pub transport: Option<TransportDto>,
}

/// Departure or arrival end of a section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointDto {
    pub name: Option<String>,

    pub node_id: Option<String>,

    pub coord: Option<CoordDto>,

    /// ISO 8601, usually with a `+09:00` offset.
    pub time: Option<String>,
}

/// Geographic position.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CoordDto {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Vehicle details of a move section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransportDto {
    /// Line or train name, e.g. "JR宇都宮線".
    pub name: Option<String>,

    pub calling_at: Option<Vec<CallingAtDto>>,
}

/// An intermediate station the vehicle calls at.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallingAtDto {
    pub name: Option<String>,

    pub node_id: Option<String>,

    pub coord: Option<CoordDto>,

    /// Time the vehicle reaches this station.
    pub to_time: Option<String>,

    /// Fallback timestamp used by some responses instead of `to_time`.
    pub time: Option<String>,
}

/// Response from `transport_node`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransportNodeResponse {
    /// Matching stations, best match first.
    pub items: Option<Vec<NodeDto>>,
}

/// A station returned by the transport node search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeDto {
    pub id: Option<String>,
    pub name: Option<String>,
}

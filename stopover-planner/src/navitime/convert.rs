//! Conversion from NAVITIME DTOs to domain types.
//!
//! Conversion never fails outright. Positions in the section list matter to
//! the segmenter, so a malformed section is kept with the unusable parts
//! dropped rather than removed from the route.

use tracing::warn;

use crate::domain::{
    CallingAt, Coord, Endpoint, RouteResult, RouteSegment, SegmentKind, Station, StationId,
    TransportDescriptor, parse_wire_time,
};

use super::types::{
    CallingAtDto, CoordDto, NodeDto, PointDto, RouteResponse, SectionDto, TransportDto,
};

/// Convert a route search response, keeping only the best route.
///
/// Returns an empty route if the response has no items.
pub fn convert_route(response: &RouteResponse) -> RouteResult {
    let Some(best) = response.items.as_deref().and_then(|items| items.first()) else {
        return RouteResult::empty();
    };

    let sections = best.sections.as_deref().unwrap_or(&[]);
    RouteResult::new(sections.iter().map(convert_section).collect())
}

/// Pick the first usable station id from a transport node response.
pub fn first_station_id(nodes: &[NodeDto]) -> Option<StationId> {
    let id = nodes.first()?.id.as_deref()?;
    match StationId::parse(id) {
        Ok(id) => Some(id),
        Err(e) => {
            warn!(id, error = %e, "ignoring invalid station id from transport node search");
            None
        }
    }
}

fn convert_section(section: &SectionDto) -> RouteSegment {
    RouteSegment {
        kind: SegmentKind::from_wire(section.kind.as_deref()),
        departure: section.departure.as_ref().map(convert_point).unwrap_or_default(),
        arrival: section.arrival.as_ref().map(convert_point).unwrap_or_default(),
        transport: section.transport.as_ref().map(convert_transport),
    }
}

fn convert_point(point: &PointDto) -> Endpoint {
    Endpoint::new(
        station(point.node_id.as_deref(), point.name.as_deref(), point.coord),
        parse_time(point.time.as_deref()),
    )
}

fn convert_transport(transport: &TransportDto) -> TransportDescriptor {
    TransportDescriptor {
        name: transport.name.clone(),
        calling_at: transport
            .calling_at
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .filter_map(convert_calling_at)
            .collect(),
    }
}

fn convert_calling_at(stop: &CallingAtDto) -> Option<CallingAt> {
    let station = station(stop.node_id.as_deref(), stop.name.as_deref(), stop.coord)?;
    let time = parse_time(stop.to_time.as_deref().or(stop.time.as_deref()));
    Some(CallingAt { station, time })
}

/// Build a station if both id and name are present and the id is valid.
/// A blank name counts as missing.
fn station(node_id: Option<&str>, name: Option<&str>, coord: Option<CoordDto>) -> Option<Station> {
    let name = name.filter(|n| !n.trim().is_empty())?;
    let node_id = node_id?;
    let id = match StationId::parse(node_id) {
        Ok(id) => id,
        Err(e) => {
            warn!(node_id, name, error = %e, "dropping station with invalid id");
            return None;
        }
    };
    let coord = coord
        .map(|c| Coord {
            lat: c.lat,
            lon: c.lon,
        })
        .unwrap_or_default();
    Some(Station::new(id, name, coord))
}

fn parse_time(raw: Option<&str>) -> Option<chrono::NaiveDateTime> {
    let raw = raw?;
    match parse_wire_time(raw) {
        Ok(t) => Some(t),
        Err(e) => {
            warn!(error = %e, "dropping unparseable timestamp");
            None
        }
    }
}

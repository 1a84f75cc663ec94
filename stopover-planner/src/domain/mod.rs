//! Domain types for the stopover planner.
//!
//! These types represent validated provider data. Identifiers are checked
//! at construction, and partial provider payloads are modelled with
//! explicit `Option`s rather than sentinel values.

mod plan;
mod route;
mod station;
mod time;

pub use plan::DayPlan;
pub use route::{
    CallingAt, Endpoint, RouteResult, RouteSegment, SegmentKind, TransportDescriptor,
};
pub use station::{Coord, InvalidStationId, Station, StationId, StopCandidate, dedup_candidates};
pub use time::{TimeError, floor_minutes_between, format_wire_time, next_day_start, parse_wire_time};

//! Route types: one ranked origin-to-destination option from the provider.
//!
//! A `RouteResult` keeps every segment the provider returned, in order,
//! including non-move and malformed ones. The segmenter addresses segments
//! by position (the segment before the one that overshoots, and the one
//! before that), so dropping entries here would shift those positions.

use chrono::NaiveDateTime;

use super::station::Station;

/// Whether a segment represents vehicle movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A `move` section: riding a train or other vehicle.
    Move,
    /// Anything else the provider reports (points, transfers, walks).
    Other,
}

impl SegmentKind {
    /// Classify a provider section `type` string.
    pub fn from_wire(kind: Option<&str>) -> Self {
        match kind {
            Some("move") => SegmentKind::Move,
            _ => SegmentKind::Other,
        }
    }
}

/// One end of a segment.
///
/// Either half may be missing from a partial provider payload: `station` is
/// `None` if the name or id was absent, `time` is `None` if the timestamp was
/// absent or unparseable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Endpoint {
    pub station: Option<Station>,
    pub time: Option<NaiveDateTime>,
}

impl Endpoint {
    pub fn new(station: Option<Station>, time: Option<NaiveDateTime>) -> Self {
        Self { station, time }
    }
}

/// An intermediate station a vehicle passes through.
#[derive(Debug, Clone, PartialEq)]
pub struct CallingAt {
    pub station: Station,
    /// When the vehicle passes this station, if reported.
    pub time: Option<NaiveDateTime>,
}

/// Details of the vehicle used for a move segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportDescriptor {
    /// Line or train name, for logging only.
    pub name: Option<String>,
    /// Intermediate stops in travel order.
    pub calling_at: Vec<CallingAt>,
}

/// A single section of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    pub kind: SegmentKind,
    pub departure: Endpoint,
    pub arrival: Endpoint,
    pub transport: Option<TransportDescriptor>,
}

impl RouteSegment {
    /// Returns true for move segments.
    pub fn is_move(&self) -> bool {
        self.kind == SegmentKind::Move
    }

    /// Returns the arrival time, but only if the segment has both a
    /// departure and an arrival timestamp.
    ///
    /// Segments missing either timestamp take no part in elapsed-time
    /// accounting.
    pub fn timed_arrival(&self) -> Option<NaiveDateTime> {
        self.departure.time?;
        self.arrival.time
    }
}

/// One complete origin-to-destination route.
///
/// An empty route is the "no route found" marker: the provider had nothing,
/// the payload was malformed, or the request failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteResult {
    pub segments: Vec<RouteSegment>,
}

impl RouteResult {
    pub fn new(segments: Vec<RouteSegment>) -> Self {
        Self { segments }
    }

    /// The "no route" marker.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment at `index`, if in range.
    pub fn segment(&self, index: usize) -> Option<&RouteSegment> {
        self.segments.get(index)
    }
}

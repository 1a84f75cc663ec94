//! Station identity and stopover candidate types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A provider-assigned station identifier (NAVITIME `node_id`).
///
/// The value is opaque to us: we never interpret its structure, we only
/// require that it is non-empty and carries no surrounding whitespace.
///
/// # Examples
///
/// ```
/// use stopover_planner::domain::StationId;
///
/// let shinagawa = StationId::parse("00007965").unwrap();
/// assert_eq!(shinagawa.as_str(), "00007965");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse(" 00007965").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidStationId {
                reason: "must not have leading or trailing whitespace",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = InvalidStationId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StationId::parse(&value)
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> Self {
        id.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A geographic coordinate where either component may be unknown.
///
/// Unknown components serialize as JSON `null`; the hotel ranking stage
/// relies on that to fall back to name-based lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl Coord {
    /// A coordinate with both components known.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat: Some(lat),
            lon: Some(lon),
        }
    }

    /// A coordinate with both components unknown.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Returns true if both latitude and longitude are present.
    pub fn is_known(&self) -> bool {
        self.lat.is_some() && self.lon.is_some()
    }
}

/// A station as reported by the routing provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub coord: Coord,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>, coord: Coord) -> Self {
        Self {
            id,
            name: name.into(),
            coord,
        }
    }
}

/// A station where the traveller could stop for the night.
///
/// This is the record handed to the stopover ranking stage, so its JSON
/// field names (`name`, `node_id`, `coord`) are part of the output contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopCandidate {
    pub name: String,
    #[serde(rename = "node_id")]
    pub id: StationId,
    pub coord: Coord,
}

impl From<&Station> for StopCandidate {
    fn from(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            id: station.id.clone(),
            coord: station.coord,
        }
    }
}

/// Remove duplicate candidates, keeping the first occurrence of each.
///
/// Equality is over every field (name, id and coordinate), so two entries for
/// the same station id with different coordinates are both kept.
pub fn dedup_candidates(candidates: Vec<StopCandidate>) -> Vec<StopCandidate> {
    let mut unique: Vec<StopCandidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !unique.contains(&candidate) {
            unique.push(candidate);
        }
    }
    unique
}

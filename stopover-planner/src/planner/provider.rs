//! Collaborator traits the planner depends on.
//!
//! These abstractions let the planner be driven by the live NAVITIME client,
//! the caching wrapper, fixture data, or test doubles. Implementations own
//! their failure handling: neither trait can return an error, so transport
//! and parse failures must be degraded to "not found" / "no route" before
//! they reach the planner.

use chrono::NaiveDateTime;

use crate::domain::{RouteResult, StationId};

/// Maps a human-readable station name to a provider station id.
pub trait StationResolver {
    /// Resolve `name` to a station id.
    ///
    /// Returns `None` if the station is unknown or the lookup failed.
    async fn resolve(&self, name: &str) -> Option<StationId>;
}

/// Answers point-to-point route queries.
pub trait RouteProvider {
    /// Get the best route from `origin` to `destination` departing at
    /// `departure` (local time).
    ///
    /// Returns `RouteResult::empty()` if there is no route or the query
    /// failed.
    async fn route(
        &self,
        origin: &StationId,
        destination: &StationId,
        departure: NaiveDateTime,
    ) -> RouteResult;
}

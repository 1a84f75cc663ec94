//! Multi-day trip driver.
//!
//! Repeatedly queries a route from the current origin to the destination,
//! cuts it into today's leg, and restarts from the day's terminal station
//! the next morning. Each iteration depends on the previous one's terminal
//! and date, so the loop is strictly sequential.

use chrono::NaiveDateTime;
use futures::future::join;
use tracing::{debug, info, warn};

use crate::domain::{DayPlan, StationId, StopCandidate, next_day_start};

use super::config::{ConfigError, DAY_START_HOUR, PlanConfig};
use super::provider::{RouteProvider, StationResolver};
use super::segment::{DayLeg, segment_day};

/// Error from trip planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// One or both station names did not resolve to an id.
    #[error("could not resolve station: {}", .0.join(", "))]
    UnresolvedStations(Vec<String>),

    /// Planning thresholds are out of range.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A trip between two resolved stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    pub origin: StationId,
    pub destination: StationId,
    /// Departure time on the first day (local time).
    pub start: NaiveDateTime,
}

impl TripRequest {
    /// Create a request from already-resolved station ids.
    pub fn new(origin: StationId, destination: StationId, start: NaiveDateTime) -> Self {
        Self {
            origin,
            destination,
            start,
        }
    }

    /// Resolve both station names, then build the request.
    ///
    /// The two lookups are independent and run concurrently. Fails with
    /// [`PlanError::UnresolvedStations`] listing every name that did not
    /// resolve.
    pub async fn resolve<R: StationResolver>(
        resolver: &R,
        origin_name: &str,
        destination_name: &str,
        start: NaiveDateTime,
    ) -> Result<Self, PlanError> {
        let (origin, destination) = join(
            resolver.resolve(origin_name),
            resolver.resolve(destination_name),
        )
        .await;

        match (origin, destination) {
            (Some(origin), Some(destination)) => Ok(Self::new(origin, destination, start)),
            (origin, destination) => {
                let mut missing = Vec::new();
                if origin.is_none() {
                    missing.push(origin_name.to_string());
                }
                if destination.is_none() {
                    missing.push(destination_name.to_string());
                }
                Err(PlanError::UnresolvedStations(missing))
            }
        }
    }
}

/// Mutable state threaded through the day loop.
#[derive(Debug)]
struct TripState {
    origin: StationId,
    cursor: NaiveDateTime,
    days: Vec<DayPlan>,
}

impl TripState {
    fn new(request: &TripRequest) -> Self {
        Self {
            origin: request.origin.clone(),
            cursor: request.start,
            days: Vec::new(),
        }
    }

    /// Record a finished day and move to the next morning at the terminal.
    ///
    /// Returns false if the calendar cannot advance any further.
    fn advance(&mut self, terminal: StationId, candidates: Vec<StopCandidate>) -> bool {
        self.days.push(DayPlan::new(candidates));
        self.origin = terminal;
        match next_day_start(self.cursor, DAY_START_HOUR) {
            Some(next) => {
                self.cursor = next;
                true
            }
            None => false,
        }
    }
}

/// Plans the day-by-day legs of a trip.
pub struct TripPlanner<'a, P: RouteProvider> {
    provider: &'a P,
    config: &'a PlanConfig,
}

impl<'a, P: RouteProvider> TripPlanner<'a, P> {
    /// Create a new planner.
    pub fn new(provider: &'a P, config: &'a PlanConfig) -> Self {
        Self { provider, config }
    }

    /// Plan every overnight stop between the request's stations.
    ///
    /// Returns one `DayPlan` per night; an empty result means the
    /// destination is reachable on the first day or no route exists.
    pub async fn plan(&self, request: &TripRequest) -> Vec<DayPlan> {
        let mut state = TripState::new(request);

        loop {
            if state.days.len() >= self.config.max_days {
                warn!(
                    max_days = self.config.max_days,
                    origin = %state.origin,
                    "trip exceeded maximum length, stopping"
                );
                break;
            }

            let route = self
                .provider
                .route(&state.origin, &request.destination, state.cursor)
                .await;

            let leg = segment_day(&route, state.cursor, self.config);

            if leg.is_final() {
                debug!(
                    days = state.days.len(),
                    origin = %state.origin,
                    "no further overnight stop"
                );
                break;
            }
            let DayLeg {
                candidates,
                terminal: Some(terminal),
            } = leg
            else {
                break;
            };

            info!(
                day = state.days.len() + 1,
                from = %state.origin,
                terminal = %terminal,
                candidates = candidates.len(),
                "planned day"
            );

            if !state.advance(terminal, candidates) {
                warn!(cursor = %state.cursor, "date overflow, stopping");
                break;
            }
        }

        state.days
    }
}

/// Resolve station names and plan a trip.
///
/// Fails before any route query if the config is invalid or either name
/// does not resolve.
pub async fn plan_trip<R, P>(
    resolver: &R,
    provider: &P,
    config: &PlanConfig,
    origin_name: &str,
    destination_name: &str,
    start: NaiveDateTime,
) -> Result<Vec<DayPlan>, PlanError>
where
    R: StationResolver,
    P: RouteProvider,
{
    config.validate()?;

    let request = TripRequest::resolve(resolver, origin_name, destination_name, start).await?;

    info!(
        origin = %request.origin,
        destination = %request.destination,
        start = %request.start,
        "planning trip"
    );

    Ok(TripPlanner::new(provider, config).plan(&request).await)
}

//! Daily-leg segmentation.
//!
//! Given a full origin-to-destination route, decides where the current
//! day's travel stops and which stations are worth considering for the
//! night.
//!
//! Elapsed time is counted from the start of the day, not from the first
//! departure, so waiting at the origin counts towards the daily limit. A cut
//! happens at the first move segment whose arrival pushes elapsed time
//! strictly over the limit or arrives in an hour strictly after the latest
//! stop hour. That segment overshoots, so the day ends at the arrival
//! station of the segment before it.

use chrono::{Duration, NaiveDateTime, Timelike};
use tracing::{debug, trace};

use crate::domain::{
    RouteResult, RouteSegment, StationId, StopCandidate, dedup_candidates, floor_minutes_between,
};

use super::config::PlanConfig;

/// Outcome of segmenting one route for one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayLeg {
    /// Stopover candidates, terminal station first, without duplicates.
    pub candidates: Vec<StopCandidate>,

    /// Station the day's travel ends at; the next day's origin.
    pub terminal: Option<StationId>,
}

impl DayLeg {
    /// A leg that ends the trip: the destination is reachable today, there
    /// is no route, or no valid cut point exists.
    pub fn finished() -> Self {
        Self::default()
    }

    /// Returns true if no further day should be planned after this one.
    pub fn is_final(&self) -> bool {
        self.candidates.is_empty() || self.terminal.is_none()
    }
}

/// Segment `route` for a day starting at `day_start`.
///
/// Never fails: an empty or malformed route, or a route that reaches the
/// destination within the day's limits, yields [`DayLeg::finished`].
pub fn segment_day(route: &RouteResult, day_start: NaiveDateTime, config: &PlanConfig) -> DayLeg {
    if route.is_empty() {
        debug!("empty route, nothing to segment");
        return DayLeg::finished();
    }

    let Some(trigger) = find_cut(route, day_start, config) else {
        debug!(
            segments = route.segments.len(),
            "destination reachable within the day"
        );
        return DayLeg::finished();
    };

    // The overshooting segment's predecessor carries the terminus. If the
    // very first segment overshoots there is nowhere to stop.
    let Some(terminus) = trigger
        .checked_sub(1)
        .and_then(|i| route.segment(i))
        .and_then(|s| s.arrival.station.as_ref())
    else {
        debug!(trigger, "no usable station before the cut");
        return DayLeg::finished();
    };

    let mut candidates = vec![StopCandidate::from(terminus)];

    if let Some(enrichment) = trigger.checked_sub(2).and_then(|i| route.segment(i)) {
        candidates.extend(calling_at_candidates(
            enrichment,
            config.calling_at_window(),
        ));
    }

    let candidates = dedup_candidates(candidates);

    debug!(
        trigger,
        terminal = %terminus.id,
        terminal_name = %terminus.name,
        candidates = candidates.len(),
        "cut day"
    );

    DayLeg {
        candidates,
        terminal: Some(terminus.id.clone()),
    }
}

/// Find the index of the first move segment that overshoots the day.
fn find_cut(route: &RouteResult, day_start: NaiveDateTime, config: &PlanConfig) -> Option<usize> {
    let mut elapsed_mins: i64 = 0;
    let mut previous = day_start;

    for (index, segment) in route.segments.iter().enumerate() {
        if !segment.is_move() {
            continue;
        }

        let Some(arrival) = segment.timed_arrival() else {
            trace!(index, "skipping move segment without timestamps");
            continue;
        };

        elapsed_mins += floor_minutes_between(arrival, previous);
        previous = arrival;

        trace!(index, elapsed_mins, arrival = %arrival, "accumulated segment");

        if elapsed_mins > config.max_travel_time_mins || arrival.hour() > config.latest_stop_hour {
            return Some(index);
        }
    }

    None
}

/// Calling-at stations of `segment` passed within `window` of its arrival.
///
/// Stations without a pass-through time are ignored, as is everything if the
/// segment itself has no arrival time.
fn calling_at_candidates(segment: &RouteSegment, window: Duration) -> Vec<StopCandidate> {
    let (Some(reference), Some(transport)) = (segment.arrival.time, segment.transport.as_ref())
    else {
        return Vec::new();
    };

    transport
        .calling_at
        .iter()
        .filter(|stop| {
            stop.time
                .is_some_and(|passed| reference.signed_duration_since(passed) < window)
        })
        .map(|stop| StopCandidate::from(&stop.station))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Coord, Endpoint, SegmentKind, Station};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn day_start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn station(i: usize) -> Station {
        Station::new(
            StationId::parse(&format!("S{i}")).unwrap(),
            format!("Station {i}"),
            Coord::unknown(),
        )
    }

    /// Back-to-back move segments with the given durations, starting at 09:00.
    fn chain(durations: &[i64]) -> RouteResult {
        let mut t = day_start();
        let segments = durations
            .iter()
            .enumerate()
            .map(|(i, mins)| {
                let dep = t;
                t += Duration::minutes(*mins);
                RouteSegment {
                    kind: SegmentKind::Move,
                    departure: Endpoint::new(Some(station(i)), Some(dep)),
                    arrival: Endpoint::new(Some(station(i + 1)), Some(t)),
                    transport: None,
                }
            })
            .collect();
        RouteResult::new(segments)
    }

    proptest! {
        /// The terminal is the arrival station of the segment before the
        /// first one to break either limit.
        #[test]
        fn terminal_precedes_first_overshoot(
            durations in prop::collection::vec(1i64..150, 1..8),
            max_travel in 60i64..600,
            latest in 10u32..23,
        ) {
            let config = PlanConfig::new(max_travel, latest);
            let leg = segment_day(&chain(&durations), day_start(), &config);

            let mut elapsed = 0;
            let mut expected = None;
            for (i, mins) in durations.iter().enumerate() {
                elapsed += mins;
                let arrival = day_start() + Duration::minutes(elapsed);
                if elapsed > max_travel || arrival.hour() > latest {
                    expected = Some(i);
                    break;
                }
            }

            match expected {
                Some(i) if i >= 1 => {
                    prop_assert_eq!(leg.terminal, Some(station(i).id));
                    prop_assert_eq!(leg.candidates.len(), 1);
                }
                _ => prop_assert!(leg.is_final()),
            }
        }

        /// A returned terminal is always the first candidate.
        #[test]
        fn terminal_is_first_candidate(
            durations in prop::collection::vec(1i64..150, 1..8),
        ) {
            let leg = segment_day(&chain(&durations), day_start(), &PlanConfig::default());
            if let Some(terminal) = &leg.terminal {
                prop_assert_eq!(&leg.candidates[0].id, terminal);
            } else {
                prop_assert!(leg.candidates.is_empty());
            }
        }
    }
}

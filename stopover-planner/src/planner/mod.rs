//! Multi-day trip planning.
//!
//! The planner splits a long train route into daily legs. Each day it asks
//! a [`RouteProvider`] for the best route from the current position to the
//! destination, cuts that route where the day's travel limits are exceeded,
//! and restarts from the chosen stop the following morning.

mod config;
mod driver;
mod provider;
mod segment;

pub use config::{CALLING_AT_WINDOW_MINS, ConfigError, DAY_START_HOUR, PlanConfig};
pub use driver::{PlanError, TripPlanner, TripRequest, plan_trip};
pub use provider::{RouteProvider, StationResolver};
pub use segment::{DayLeg, segment_day};

//! Web layer for the stopover planner.
//!
//! Provides JSON endpoints for station lookup and trip planning.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

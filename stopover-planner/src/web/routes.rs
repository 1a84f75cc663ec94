//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::parse_wire_time;
use crate::planner::{PlanError, StationResolver, plan_trip};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations/resolve", get(resolve_station))
        .route("/trip/plan", post(plan_trip_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Resolve a station name to its NAVITIME id.
async fn resolve_station(
    State(state): State<AppState>,
    Query(req): Query<ResolveStationRequest>,
) -> Result<Json<ResolveStationResponse>, AppError> {
    let id = state
        .backend
        .resolve(&req.name)
        .await
        .ok_or_else(|| AppError::NotFound {
            message: format!("Station not found: {}", req.name),
        })?;

    Ok(Json(ResolveStationResponse {
        name: req.name,
        node_id: id.as_str().to_string(),
    }))
}

/// Plan the overnight stops of a multi-day trip.
async fn plan_trip_handler(
    State(state): State<AppState>,
    Json(req): Json<PlanTripRequest>,
) -> Result<Json<PlanTripResponse>, AppError> {
    let start = parse_wire_time(&req.start_time).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let mut config = (*state.config).clone();
    if let Some(mins) = req.max_travel_time {
        config = config.with_max_travel_time(mins);
    }
    if let Some(hour) = req.latest_stop_time {
        config = config.with_latest_stop_hour(hour);
    }

    let days = plan_trip(
        state.backend.as_ref(),
        state.backend.as_ref(),
        &config,
        &req.origin,
        &req.destination,
        start,
    )
    .await?;

    Ok(Json(PlanTripResponse { days }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::UnresolvedStations(_) => AppError::NotFound {
                message: e.to_string(),
            },
            PlanError::Config(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request rejected");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

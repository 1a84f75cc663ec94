//! NAVITIME route search client.
//!
//! This module provides an HTTP client for the NAVITIME APIs on RapidAPI,
//! plus a file-backed mock with the same interface.
//!
//! Key characteristics of NAVITIME:
//! - Station ids (`node_id`) are opaque strings, e.g. `"00007965"`
//! - Times are Japan local time, usually with a `+09:00` suffix
//! - Route sections alternate between points and `move` sections; calling
//!   points are only included when `options=railway_calling_at` is sent

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{NavitimeClient, NavitimeConfig, ROUTE_HOST, TRANSPORT_HOST};
pub use convert::convert_route;
pub use error::NavitimeError;
pub use mock::MockNavitimeClient;
pub use types::RouteResponse;

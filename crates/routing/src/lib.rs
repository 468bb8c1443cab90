//! Driving-route resolution for the Sedayu Sehat navigator.
//!
//! This crate provides:
//! - `OsrmClient`, a thin routing-service client that always yields a
//!   renderable path: a full road polyline when the service answers, a
//!   two-point straight line otherwise
//! - `RouteTracker`, the route state machine with stale-response suppression
//! - A coarse driving-time estimate used in facility detail views
//!
//! One attempt per (origin, destination) pair; there is no retry or backoff.
//! A new attempt happens only when the pair changes.

mod client;
mod config;
mod error;
mod state;

pub use client::{straight_line, OsrmClient, RouteResolution};
pub use config::{RoutingConfig, DEFAULT_OSRM_URL};
pub use error::{RouteError, RouteResult};
pub use state::{RouteState, RouteTracker};

use sehat_geo::Coordinate;

/// An ordered polyline from origin to destination, length >= 2.
pub type RoutePath = Vec<Coordinate>;

/// Coarse driving-time estimate for an urban road network: three minutes per
/// kilometer, rounded up.
#[must_use]
pub fn estimate_drive_minutes(distance_km: f64) -> u32 {
    (distance_km * 3.0).ceil() as u32
}

//! The session state machine.

use crate::location::{LocationError, LocationStatus};
use sehat_analysis::{AnalysisState, AnalysisTracker, GeminiClient};
use sehat_catalog::{
    available_filters, filter_facilities, rank, CategoryFilter, Facility, FacilityCatalog,
};
use sehat_geo::Coordinate;
use sehat_routing::{estimate_drive_minutes, OsrmClient, RouteState, RouteTracker};
use tracing::debug;

/// One user session over the facility catalog.
///
/// Holds the read-only source catalog and every derived view: the ranked
/// list, the current selection, and the route and analysis slots. Derived
/// state is recomputed in full on each dependency change rather than patched
/// incrementally.
#[derive(Debug)]
pub struct Session {
    catalog: FacilityCatalog,
    origin: Option<Coordinate>,
    location_status: LocationStatus,
    ranked: Vec<Facility>,
    selected: Option<Facility>,
    route: RouteTracker,
    analysis: AnalysisTracker,
}

impl Session {
    /// Creates a session over the given catalog. The ranked view starts as
    /// an unannotated copy in source order.
    #[must_use]
    pub fn new(catalog: FacilityCatalog) -> Self {
        let ranked = rank(&catalog, None);
        Self {
            catalog,
            origin: None,
            location_status: LocationStatus::Waiting,
            ranked,
            selected: None,
            route: RouteTracker::new(),
            analysis: AnalysisTracker::new(),
        }
    }

    /// Creates a session over the embedded Yogyakarta catalog.
    #[must_use]
    pub fn with_embedded_catalog() -> Self {
        Self::new(sehat_catalog::catalog().clone())
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    /// The user origin, when known.
    #[must_use]
    pub fn origin(&self) -> Option<Coordinate> {
        self.origin
    }

    /// Current location acquisition status.
    #[must_use]
    pub fn location_status(&self) -> LocationStatus {
        self.location_status
    }

    /// The full ranked view: distance-annotated and nearest-first once an
    /// origin is known, source order otherwise.
    #[must_use]
    pub fn ranked(&self) -> &[Facility] {
        &self.ranked
    }

    /// The currently selected facility.
    #[must_use]
    pub fn selected(&self) -> Option<&Facility> {
        self.selected.as_ref()
    }

    /// Applies search and category filtering over the ranked view.
    #[must_use]
    pub fn visible(&self, query: &str, filter: &CategoryFilter) -> Vec<Facility> {
        filter_facilities(&self.ranked, query, filter)
    }

    /// The category filter choices for this catalog.
    #[must_use]
    pub fn filters(&self) -> Vec<CategoryFilter> {
        available_filters(&self.catalog)
    }

    /// Current state of the route slot.
    #[must_use]
    pub fn route_state(&self) -> &RouteState {
        self.route.state()
    }

    /// Current state of the analysis slot.
    #[must_use]
    pub fn analysis_state(&self) -> &AnalysisState {
        self.analysis.state()
    }

    /// Coarse driving time to the selected facility, when its distance is
    /// known.
    #[must_use]
    pub fn selected_eta_minutes(&self) -> Option<u32> {
        self.selected
            .as_ref()
            .and_then(|facility| facility.distance_km)
            .map(estimate_drive_minutes)
    }

    // -------------------------------------------------------------------------
    // State transitions
    // -------------------------------------------------------------------------

    /// Consumes the one-shot geolocation outcome and re-derives the ranked
    /// view in full. Losing the origin clears the route instead of leaving
    /// stale data.
    pub fn apply_location_fix(&mut self, fix: Result<Coordinate, LocationError>) {
        match fix {
            Ok(coordinate) => {
                self.origin = Some(coordinate);
                self.location_status = LocationStatus::Located;
            }
            Err(error) => {
                self.origin = None;
                self.location_status = LocationStatus::from(error);
            }
        }
        debug!(status = %self.location_status, "location fix applied");

        self.rerank();

        if self.origin.is_none() {
            self.route.clear();
        }
    }

    /// Selects a facility from the ranked view by id. Returns the selected
    /// facility, or `None` (leaving the previous selection) for an unknown
    /// id.
    pub fn select(&mut self, facility_id: u32) -> Option<&Facility> {
        let facility = self.ranked.iter().find(|f| f.id == facility_id)?.clone();
        debug!(facility = %facility.name, "facility selected");
        self.selected = Some(facility);
        self.selected.as_ref()
    }

    /// Clears the selection; both slots return to Idle and any in-flight
    /// results are invalidated.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.route.clear();
        self.analysis.clear();
    }

    /// Drives one route request for the current (origin, selection) pair.
    ///
    /// With either endpoint absent the route clears to Idle. The tracker's
    /// token discipline drops this request's result if a newer one was
    /// issued while it was in flight.
    pub async fn refresh_route(&mut self, client: &OsrmClient) {
        let (Some(origin), Some(facility)) = (self.origin, self.selected.as_ref()) else {
            self.route.clear();
            return;
        };

        let destination = facility.coordinates;
        let token = self.route.begin();
        let resolution = client.route(origin, destination).await;
        self.route.complete(token, resolution);
    }

    /// Drives one analysis request for the current selection.
    pub async fn refresh_analysis(&mut self, client: &GeminiClient) {
        let Some(facility) = self.selected.clone() else {
            self.analysis.clear();
            return;
        };

        let token = self.analysis.begin();
        let result = client.analyze(&facility).await;
        self.analysis.complete(token, result);
    }

    /// Mutable access to the route slot, for drivers that schedule requests
    /// themselves.
    pub fn route_tracker(&mut self) -> &mut RouteTracker {
        &mut self.route
    }

    /// Mutable access to the analysis slot.
    pub fn analysis_tracker(&mut self) -> &mut AnalysisTracker {
        &mut self.analysis
    }

    /// Re-derives the ranked view and keeps the selection's annotation in
    /// step with the new origin.
    fn rerank(&mut self) {
        self.ranked = rank(&self.catalog, self.origin);

        if let Some(selected) = &mut self.selected {
            if let Some(updated) = self.ranked.iter().find(|f| f.id == selected.id) {
                *selected = updated.clone();
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_embedded_catalog()
    }
}

//! OSRM routing client with straight-line fallback.

use crate::config::RoutingConfig;
use crate::error::{RouteError, RouteResult};
use crate::RoutePath;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use sehat_geo::Coordinate;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Status code OSRM uses for a successful routing answer
const OSRM_CODE_OK: &str = "Ok";

/// How a route request was resolved.
///
/// The caller always receives a renderable path once both endpoints are
/// known; this enum records whether it is a road polyline or the degraded
/// two-point straight line.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteResolution {
    /// Full road geometry from the routing service
    Road(RoutePath),
    /// Straight-line fallback after a failure or "no route" answer
    StraightLine(RoutePath),
}

impl RouteResolution {
    /// The resolved polyline, regardless of how it was obtained.
    #[must_use]
    pub fn path(&self) -> &RoutePath {
        match self {
            Self::Road(path) | Self::StraightLine(path) => path,
        }
    }

    /// Consumes the resolution, yielding the polyline.
    #[must_use]
    pub fn into_path(self) -> RoutePath {
        match self {
            Self::Road(path) | Self::StraightLine(path) => path,
        }
    }

    /// True when the service could not provide a road route.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::StraightLine(_))
    }
}

/// Driving-route client for an OSRM-compatible service.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    inner: Client,
    config: RoutingConfig,
}

impl OsrmClient {
    /// Create a new client with configuration from the environment.
    pub fn new() -> RouteResult<Self> {
        Self::with_config(RoutingConfig::from_env()?)
    }

    /// Create a new client with specific configuration.
    pub fn with_config(config: RoutingConfig) -> RouteResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static("sehat-routing/0.5"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(RouteError::Request)?;

        Ok(Self { inner, config })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Resolve a driving route between two coordinates.
    ///
    /// Never fails: network errors, malformed responses and "no route"
    /// answers all degrade to the two-point straight line, so the caller
    /// always has a renderable (possibly degenerate) path.
    #[instrument(skip(self))]
    pub async fn route(&self, origin: Coordinate, destination: Coordinate) -> RouteResolution {
        match self.try_route(origin, destination).await {
            Ok(path) => {
                debug!(points = path.len(), "road route resolved");
                RouteResolution::Road(path)
            }
            Err(e) => {
                warn!(error = %e, "route request failed, using straight line");
                RouteResolution::StraightLine(straight_line(origin, destination))
            }
        }
    }

    /// Perform a single route request without the fallback.
    ///
    /// One attempt only; the caller decides what a failure means.
    pub async fn try_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> RouteResult<RoutePath> {
        let request_id = Uuid::new_v4().to_string();
        // OSRM addresses coordinates as lon,lat pairs
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson",
            self.config.base_url.trim_end_matches('/'),
            origin.longitude,
            origin.latitude,
            destination.longitude,
            destination.latitude,
        );

        debug!(request_id = %request_id, url = %url, "requesting driving route");

        let response = self
            .inner
            .get(&url)
            .header(X_REQUEST_ID, &request_id)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RouteError::api_response(status.as_u16(), message));
        }

        let body: OsrmRouteResponse = response.json().await?;
        path_from_response(&body).ok_or(RouteError::NoRoute)
    }
}

/// Synthesizes the degraded two-point path `[origin, destination]`.
#[must_use]
pub fn straight_line(origin: Coordinate, destination: Coordinate) -> RoutePath {
    vec![origin, destination]
}

/// Route response from the OSRM HTTP API
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OsrmRouteResponse {
    /// Status code; "Ok" on success
    pub code: String,
    /// Candidate routes, best first
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

/// A single candidate route
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OsrmRoute {
    pub geometry: OsrmGeometry,
}

/// GeoJSON-style route geometry
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OsrmGeometry {
    /// Coordinates in GeoJSON `[longitude, latitude]` order
    pub coordinates: Vec<[f64; 2]>,
}

/// Extracts the best route's polyline, swapping GeoJSON `[lon, lat]` pairs
/// into the `{latitude, longitude}` order the rest of the system expects.
///
/// Returns `None` for a non-"Ok" status, an empty route list, or a geometry
/// too short to draw; all of those mean "no route".
fn path_from_response(response: &OsrmRouteResponse) -> Option<RoutePath> {
    if response.code != OSRM_CODE_OK {
        return None;
    }

    let route = response.routes.first()?;
    if route.geometry.coordinates.len() < 2 {
        return None;
    }

    Some(
        route
            .geometry
            .coordinates
            .iter()
            .map(|&[lon, lat]| Coordinate::new(lat, lon))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const ORIGIN: Coordinate = Coordinate { latitude: -7.80, longitude: 110.36 };
    const DESTINATION: Coordinate = Coordinate { latitude: -7.82, longitude: 110.40 };

    fn response_from_json(json: &str) -> OsrmRouteResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_successful_response_swaps_coordinate_order() {
        let response = response_from_json(
            r#"{
                "code": "Ok",
                "routes": [
                    { "geometry": { "coordinates": [[110.36, -7.80], [110.40, -7.82]] } }
                ]
            }"#,
        );

        let path = path_from_response(&response).unwrap();
        assert_eq!(path, vec![ORIGIN, DESTINATION]);
    }

    #[test]
    fn test_no_route_code_yields_none() {
        let response = response_from_json(r#"{ "code": "NoRoute", "routes": [] }"#);
        assert!(path_from_response(&response).is_none());
    }

    #[test]
    fn test_ok_with_empty_route_list_yields_none() {
        let response = response_from_json(r#"{ "code": "Ok", "routes": [] }"#);
        assert!(path_from_response(&response).is_none());
    }

    #[test]
    fn test_missing_routes_field_yields_none() {
        let response = response_from_json(r#"{ "code": "Ok" }"#);
        assert!(path_from_response(&response).is_none());
    }

    #[test]
    fn test_degenerate_geometry_yields_none() {
        let response = response_from_json(
            r#"{ "code": "Ok", "routes": [ { "geometry": { "coordinates": [[110.36, -7.80]] } } ] }"#,
        );
        assert!(path_from_response(&response).is_none());
    }

    #[test]
    fn test_first_candidate_route_wins() {
        let response = response_from_json(
            r#"{
                "code": "Ok",
                "routes": [
                    { "geometry": { "coordinates": [[110.36, -7.80], [110.38, -7.81], [110.40, -7.82]] } },
                    { "geometry": { "coordinates": [[0.0, 0.0], [1.0, 1.0]] } }
                ]
            }"#,
        );

        let path = path_from_response(&response).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], ORIGIN);
        assert_eq!(path[2], DESTINATION);
    }

    #[test]
    fn test_straight_line_is_exactly_origin_destination() {
        assert_eq!(straight_line(ORIGIN, DESTINATION), vec![ORIGIN, DESTINATION]);
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back_to_straight_line() {
        // Nothing listens on the discard port; the connection is refused
        let config = RoutingConfig::default()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(1));
        let client = OsrmClient::with_config(config).unwrap();

        let resolution = client.route(ORIGIN, DESTINATION).await;
        assert!(resolution.is_fallback());
        assert_eq!(resolution.path(), &vec![ORIGIN, DESTINATION]);
    }

    #[test]
    fn test_client_creation() {
        let client = OsrmClient::with_config(RoutingConfig::default());
        assert!(client.is_ok());
    }
}

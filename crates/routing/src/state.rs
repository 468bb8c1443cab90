//! Route state machine with stale-response suppression.
//!
//! Idle -> Requesting -> Resolved | Fallback, and back to Idle when either
//! endpoint becomes absent. In-flight requests cannot be aborted, so
//! completions carry the token captured at `begin` time and a stale token is
//! discarded instead of overwriting a newer request's outcome.

use crate::client::RouteResolution;
use crate::RoutePath;
use sehat_core::generation::{Generation, Token};

/// Current state of the route slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RouteState {
    /// No selection; nothing to route
    #[default]
    Idle,
    /// A network request is in flight
    Requesting,
    /// Road polyline available
    Resolved(RoutePath),
    /// Straight-line fallback in effect
    Fallback(RoutePath),
}

impl RouteState {
    /// The current polyline, if any.
    #[must_use]
    pub fn path(&self) -> Option<&RoutePath> {
        match self {
            Self::Resolved(path) | Self::Fallback(path) => Some(path),
            Self::Idle | Self::Requesting => None,
        }
    }
}

/// Tracks the route slot across request lifecycles.
#[derive(Debug, Default)]
pub struct RouteTracker {
    generation: Generation,
    state: RouteState,
}

impl RouteTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the slot.
    #[must_use]
    pub fn state(&self) -> &RouteState {
        &self.state
    }

    /// True while a request is outstanding.
    #[must_use]
    pub fn is_requesting(&self) -> bool {
        matches!(self.state, RouteState::Requesting)
    }

    /// Enters Requesting and issues the token identifying this request.
    /// Any previously issued token is superseded.
    pub fn begin(&mut self) -> Token {
        self.state = RouteState::Requesting;
        self.generation.next()
    }

    /// Applies a resolution if `token` still identifies the latest request.
    ///
    /// Returns false (and leaves the state untouched) for a superseded
    /// token; the late result is silently dropped per last-write-wins.
    pub fn complete(&mut self, token: Token, resolution: RouteResolution) -> bool {
        if !self.generation.is_current(token) {
            return false;
        }

        self.state = match resolution {
            RouteResolution::Road(path) => RouteState::Resolved(path),
            RouteResolution::StraightLine(path) => RouteState::Fallback(path),
        };
        true
    }

    /// Clears the slot to Idle and invalidates outstanding tokens, so a
    /// late-arriving response cannot resurrect stale data.
    pub fn clear(&mut self) {
        self.generation.invalidate();
        self.state = RouteState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::straight_line;
    use sehat_geo::Coordinate;

    const ORIGIN: Coordinate = Coordinate { latitude: -7.80, longitude: 110.36 };
    const DESTINATION: Coordinate = Coordinate { latitude: -7.82, longitude: 110.40 };

    fn road() -> RouteResolution {
        RouteResolution::Road(vec![
            ORIGIN,
            Coordinate::new(-7.81, 110.38),
            DESTINATION,
        ])
    }

    #[test]
    fn test_initial_state_is_idle() {
        let tracker = RouteTracker::new();
        assert_eq!(tracker.state(), &RouteState::Idle);
        assert!(tracker.state().path().is_none());
    }

    #[test]
    fn test_resolve_happy_path() {
        let mut tracker = RouteTracker::new();
        let token = tracker.begin();
        assert!(tracker.is_requesting());

        assert!(tracker.complete(token, road()));
        match tracker.state() {
            RouteState::Resolved(path) => assert_eq!(path.len(), 3),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn test_fallback_resolution() {
        let mut tracker = RouteTracker::new();
        let token = tracker.begin();

        let fallback = RouteResolution::StraightLine(straight_line(ORIGIN, DESTINATION));
        assert!(tracker.complete(token, fallback));
        assert_eq!(
            tracker.state(),
            &RouteState::Fallback(vec![ORIGIN, DESTINATION])
        );
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut tracker = RouteTracker::new();
        let stale = tracker.begin();
        let fresh = tracker.begin();

        // The older request resolves late; it must not win
        assert!(!tracker.complete(stale, RouteResolution::StraightLine(straight_line(ORIGIN, DESTINATION))));
        assert!(tracker.is_requesting());

        assert!(tracker.complete(fresh, road()));
        assert!(matches!(tracker.state(), RouteState::Resolved(_)));
    }

    #[test]
    fn test_clear_returns_to_idle_and_drops_late_result() {
        let mut tracker = RouteTracker::new();
        let token = tracker.begin();
        tracker.clear();

        assert_eq!(tracker.state(), &RouteState::Idle);
        assert!(!tracker.complete(token, road()));
        assert_eq!(tracker.state(), &RouteState::Idle);
    }
}

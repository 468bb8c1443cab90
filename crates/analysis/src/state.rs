//! Analysis slot with stale-response suppression.
//!
//! Same token discipline as the route tracker: a facility selection change
//! while a request is outstanding supersedes it, and the late result is
//! dropped instead of being shown against the newly selected facility.

use crate::AnalysisResult;
use sehat_core::generation::{Generation, Token};

/// Current state of the analysis slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisState {
    /// No selection; nothing to analyze
    #[default]
    Idle,
    /// A request is in flight (the caller's loading indicator)
    Requesting,
    /// A brief is available (possibly one of the fixed fallbacks)
    Ready(AnalysisResult),
}

impl AnalysisState {
    /// The current brief, if one is available.
    #[must_use]
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Ready(result) => Some(result),
            Self::Idle | Self::Requesting => None,
        }
    }
}

/// Tracks the analysis slot across request lifecycles.
#[derive(Debug, Default)]
pub struct AnalysisTracker {
    generation: Generation,
    state: AnalysisState,
}

impl AnalysisTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the slot.
    #[must_use]
    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// True while a request is outstanding.
    #[must_use]
    pub fn is_requesting(&self) -> bool {
        matches!(self.state, AnalysisState::Requesting)
    }

    /// Enters Requesting and issues the token identifying this request.
    /// Any previously issued token is superseded.
    pub fn begin(&mut self) -> Token {
        self.state = AnalysisState::Requesting;
        self.generation.next()
    }

    /// Applies a result if `token` still identifies the latest request.
    ///
    /// Returns false (and leaves the state untouched) for a superseded
    /// token.
    pub fn complete(&mut self, token: Token, result: AnalysisResult) -> bool {
        if !self.generation.is_current(token) {
            return false;
        }

        self.state = AnalysisState::Ready(result);
        true
    }

    /// Clears the slot to Idle and invalidates outstanding tokens.
    pub fn clear(&mut self) {
        self.generation.invalidate();
        self.state = AnalysisState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief(summary: &str) -> AnalysisResult {
        AnalysisResult {
            summary: summary.to_string(),
            activities: vec!["Layanan Umum".to_string()],
            tips: "Datang pagi.".to_string(),
            sources: Vec::new(),
        }
    }

    #[test]
    fn test_happy_path() {
        let mut tracker = AnalysisTracker::new();
        let token = tracker.begin();
        assert!(tracker.is_requesting());

        assert!(tracker.complete(token, brief("ok")));
        assert_eq!(tracker.state().result().unwrap().summary, "ok");
    }

    #[test]
    fn test_newer_selection_wins_over_stale_result() {
        let mut tracker = AnalysisTracker::new();

        // Facility A selected, then B before A's request resolves
        let token_a = tracker.begin();
        let token_b = tracker.begin();

        // A resolves late and must be dropped
        assert!(!tracker.complete(token_a, brief("fasilitas A")));
        assert!(tracker.is_requesting());

        assert!(tracker.complete(token_b, brief("fasilitas B")));
        assert_eq!(tracker.state().result().unwrap().summary, "fasilitas B");
    }

    #[test]
    fn test_clear_drops_late_result() {
        let mut tracker = AnalysisTracker::new();
        let token = tracker.begin();
        tracker.clear();

        assert!(!tracker.complete(token, brief("late")));
        assert_eq!(tracker.state(), &AnalysisState::Idle);
    }
}

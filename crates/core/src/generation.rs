//! Request-generation tokens for stale-response suppression.
//!
//! A `Generation` issues monotonically increasing tokens, one per logical
//! request. When a response arrives, the caller checks its captured token
//! against the current one; a mismatch means the request was superseded and
//! the response must be discarded. This is portable across runtimes, unlike
//! platform cancellation primitives.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// An opaque request-identity token captured at request issuance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Token(u64);

/// Monotonically increasing generation counter for one logical slot
/// (e.g. "the route" or "the analysis").
#[derive(Debug, Default)]
pub struct Generation {
    counter: AtomicU64,
}

impl Generation {
    /// Creates a fresh generation counter. No token is current until the
    /// first call to [`Generation::next`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next token, superseding all previously issued ones.
    pub fn next(&self) -> Token {
        Token(self.counter.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Returns true if `token` is the most recently issued one.
    #[must_use]
    pub fn is_current(&self, token: Token) -> bool {
        self.counter.load(Ordering::Relaxed) == token.0
    }

    /// Invalidates every outstanding token without issuing a new one.
    ///
    /// Used when a slot is cleared: late responses for any in-flight request
    /// must not resurrect state that the caller already discarded.
    pub fn invalidate(&self) {
        self.counter.fetch_add(1, Ordering::Relaxed);
    }
}

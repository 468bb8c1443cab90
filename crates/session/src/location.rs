//! Geolocation boundary types.
//!
//! The device geolocation source is a one-shot request whose outcome is
//! injected into the session as plain data: a coordinate on success, a
//! status signal on failure. The pipeline operates correctly with the
//! origin permanently absent.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why no coordinate is available.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationError {
    /// The user denied the location permission
    #[error("location access denied")]
    Denied,
    /// The platform offers no geolocation source
    #[error("geolocation not supported")]
    Unsupported,
}

/// User-facing location acquisition status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LocationStatus {
    /// Waiting for the permission prompt / first fix
    #[default]
    Waiting,
    /// A coordinate was acquired
    Located,
    /// Permission denied
    Denied,
    /// No geolocation source available
    Unsupported,
}

impl LocationStatus {
    /// Status line shown to the user (Bahasa Indonesia).
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Waiting => "Menunggu izin lokasi...",
            Self::Located => "Lokasi ditemukan",
            Self::Denied => "Akses lokasi ditolak",
            Self::Unsupported => "Geolocation tidak didukung",
        }
    }
}

impl From<LocationError> for LocationStatus {
    fn from(error: LocationError) -> Self {
        match error {
            LocationError::Denied => Self::Denied,
            LocationError::Unsupported => Self::Unsupported,
        }
    }
}

impl fmt::Display for LocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

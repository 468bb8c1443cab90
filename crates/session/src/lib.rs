//! Control-flow wiring for the Sedayu Sehat navigator.
//!
//! Ties the pipeline together without any rendering concern: the one-shot
//! geolocation outcome feeds the ranker, the ranked view feeds search and
//! filtering, and a facility selection drives the route and analysis slots
//! concurrently and independently.
//!
//! # Example
//!
//! ```
//! use sehat_session::Session;
//! use sehat_catalog::YOGYAKARTA_CENTER;
//!
//! let mut session = Session::with_embedded_catalog();
//! session.apply_location_fix(Ok(YOGYAKARTA_CENTER));
//!
//! // Nearest facility first once the origin is known
//! assert!(session.ranked()[0].distance_km.is_some());
//! ```

mod location;
mod session;

pub use location::{LocationError, LocationStatus};
pub use session::Session;

//! Shared infrastructure for the Sedayu Sehat facility navigator.
//!
//! Currently this is the request-generation machinery used to discard stale
//! in-flight results: routing and analysis requests cannot be forcibly
//! aborted, so a newer request must win over a late-arriving older one.
//!
//! # Example
//!
//! ```
//! use sehat_core::generation::Generation;
//!
//! let generation = Generation::new();
//!
//! let first = generation.next();
//! let second = generation.next();
//!
//! assert!(!generation.is_current(first));
//! assert!(generation.is_current(second));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod generation;

pub use generation::{Generation, Token};

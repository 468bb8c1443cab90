//! Health facility catalog for the Sedayu Sehat navigator.
//!
//! This crate provides:
//! - The `Facility` domain type and the read-only `FacilityCatalog`
//! - Keyword-based category classification (runs once at load time)
//! - Distance ranking against a user origin
//! - Free-text search and category filtering over ranked views
//! - The embedded Yogyakarta facility catalog
//!
//! The catalog is the single source of truth: ranking and filtering always
//! produce derived copies, never mutations of the source.
//!
//! # Example
//!
//! ```
//! use sehat_catalog::{catalog, rank, YOGYAKARTA_CENTER};
//!
//! let ranked = rank(catalog(), Some(YOGYAKARTA_CENTER));
//! assert_eq!(ranked.len(), catalog().len());
//! assert!(ranked[0].distance_km.is_some());
//! ```

mod category;
mod data;
mod filter;
mod rank;

pub use category::{classify, Category};
pub use data::{catalog, YOGYAKARTA_CENTER};
pub use filter::{available_filters, filter_facilities, CategoryFilter};
pub use rank::rank;

use sehat_geo::Coordinate;
use serde::{Deserialize, Serialize};

/// A single health facility entry.
///
/// `category` is derived from `name` once at load time and is stable for the
/// process lifetime. `distance_km` is `None` until a user origin is known;
/// the ranker attaches it wholesale on every origin change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// Globally unique identifier across the catalog
    pub id: u32,
    /// Sequence number from the source register
    pub sequence: u32,
    /// Facility name as registered
    pub name: String,
    /// Street address
    pub address: String,
    /// Category derived from the name
    pub category: Category,
    /// Geographic position
    pub coordinates: Coordinate,
    /// Distance from the user origin in kilometers, when known
    pub distance_km: Option<f64>,
}

/// The ordered, read-only facility catalog loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityCatalog {
    entries: Vec<Facility>,
}

impl FacilityCatalog {
    /// Wraps a list of already-classified facilities.
    #[must_use]
    pub fn new(entries: Vec<Facility>) -> Self {
        Self { entries }
    }

    /// Number of facilities in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The catalog entries in source order.
    #[must_use]
    pub fn entries(&self) -> &[Facility] {
        &self.entries
    }

    /// Iterates over the catalog entries.
    pub fn iter(&self) -> impl Iterator<Item = &Facility> {
        self.entries.iter()
    }

    /// The distinct categories observed in the catalog, sorted by label.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut seen: Vec<Category> = Vec::new();
        for facility in &self.entries {
            if !seen.contains(&facility.category) {
                seen.push(facility.category);
            }
        }
        seen.sort_by_key(|c| c.label());
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_catalog() -> FacilityCatalog {
        FacilityCatalog::new(vec![
            Facility {
                id: 1,
                sequence: 1,
                name: "Klinik Contoh".to_string(),
                address: "Jl. Contoh 1".to_string(),
                category: classify("Klinik Contoh"),
                coordinates: Coordinate::new(-7.80, 110.36),
                distance_km: None,
            },
            Facility {
                id: 2,
                sequence: 2,
                name: "RS Contoh".to_string(),
                address: "Jl. Contoh 2".to_string(),
                category: classify("RS Contoh"),
                coordinates: Coordinate::new(-7.82, 110.40),
                distance_km: None,
            },
        ])
    }

    #[test]
    fn test_categories_distinct_and_sorted() {
        let catalog = toy_catalog();
        assert_eq!(
            catalog.categories(),
            vec![Category::Clinic, Category::Hospital]
        );
    }

    #[test]
    fn test_len_and_entries() {
        let catalog = toy_catalog();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.entries()[0].id, 1);
    }
}

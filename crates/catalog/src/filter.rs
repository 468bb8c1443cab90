//! Free-text search and category filtering over ranked facility views.
//!
//! Filtering is pure and synchronous; it is intended to be re-evaluated on
//! every keystroke or filter change. The catalog is small and in-memory, so
//! no debouncing or indexing is needed.

use crate::{Category, Facility, FacilityCatalog};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A category filter selection: either the `All` sentinel or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Match every category
    All,
    /// Match exactly one category
    Only(Category),
}

impl CategoryFilter {
    fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(category) => f.write_str(category.label()),
        }
    }
}

/// Applies the search predicate over a ranked view, producing a subset copy.
///
/// The predicate is a case-insensitive substring match on the facility name,
/// combined with the category filter. An empty query matches everything. A
/// category no catalog entry carries yields an empty result; that is intended
/// behavior, not an error.
#[must_use]
pub fn filter_facilities(
    view: &[Facility],
    query: &str,
    filter: &CategoryFilter,
) -> Vec<Facility> {
    let needle = query.to_lowercase();
    view.iter()
        .filter(|facility| {
            facility.name.to_lowercase().contains(&needle) && filter.matches(facility.category)
        })
        .cloned()
        .collect()
}

/// The filter choices to offer for a catalog: the distinct label-sorted
/// categories observed in the full catalog, with the `All` sentinel
/// prepended.
#[must_use]
pub fn available_filters(catalog: &FacilityCatalog) -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter::All];
    filters.extend(catalog.categories().into_iter().map(CategoryFilter::Only));
    filters
}

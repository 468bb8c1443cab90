//! Distance ranking of the facility catalog against a user origin.
//!
//! Ranking is a pure derivation: every origin change recomputes the whole
//! view rather than patching a previous ranking, so the result can never be
//! partially stale.

use crate::{Facility, FacilityCatalog};
use sehat_geo::{haversine_distance, Coordinate};

/// Produces a distance-annotated, distance-sorted copy of the catalog.
///
/// With no origin the catalog is returned unchanged: original order, no
/// distance field. With an origin, every entry gets its haversine distance
/// attached (rounded to two decimal places, display-ready) and the view is
/// stable-sorted ascending by it, so entries at equal distance keep their
/// catalog order.
///
/// # Example
/// ```
/// use sehat_catalog::{catalog, rank, YOGYAKARTA_CENTER};
///
/// let ranked = rank(catalog(), Some(YOGYAKARTA_CENTER));
/// for pair in ranked.windows(2) {
///     assert!(pair[0].distance_km <= pair[1].distance_km);
/// }
/// ```
#[must_use]
pub fn rank(catalog: &FacilityCatalog, origin: Option<Coordinate>) -> Vec<Facility> {
    let Some(origin) = origin else {
        return catalog.entries().to_vec();
    };

    let mut ranked = annotate(catalog.entries(), &origin);

    ranked.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}

fn annotate(entries: &[Facility], origin: &Coordinate) -> Vec<Facility> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        entries
            .par_iter()
            .map(|facility| annotate_single(facility, origin))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        entries
            .iter()
            .map(|facility| annotate_single(facility, origin))
            .collect()
    }
}

#[inline]
fn annotate_single(facility: &Facility, origin: &Coordinate) -> Facility {
    let distance = haversine_distance(origin, &facility.coordinates);
    Facility {
        distance_km: Some(round_km(distance)),
        ..facility.clone()
    }
}

/// Rounds a distance to two decimal places for display.
#[inline]
fn round_km(distance: f64) -> f64 {
    (distance * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn facility(id: u32, name: &str, lat: f64, lng: f64) -> Facility {
        Facility {
            id,
            sequence: id,
            name: name.to_string(),
            address: format!("Jl. Uji No. {id}"),
            category: classify(name),
            coordinates: Coordinate::new(lat, lng),
            distance_km: None,
        }
    }

    fn test_catalog() -> FacilityCatalog {
        FacilityCatalog::new(vec![
            facility(1, "RS Siloam Yogyakarta", -7.78329, 110.39069),
            facility(2, "Puskesmas Tegalrejo", -7.772547077, 110.3589277),
            facility(3, "RS PKU Muhammadiyah Yogyakarta", -7.80088, 110.36231),
            facility(4, "Puskesmas Kotagede I", -7.822080131, 110.400625),
        ])
    }

    const ORIGIN: Coordinate = Coordinate { latitude: -7.8014, longitude: 110.3647 };

    #[test]
    fn test_no_origin_returns_catalog_unchanged() {
        let catalog = test_catalog();
        let view = rank(&catalog, None);

        assert_eq!(view.len(), catalog.len());
        for (ranked, source) in view.iter().zip(catalog.iter()) {
            assert_eq!(ranked.id, source.id);
            assert!(ranked.distance_km.is_none());
        }
    }

    #[test]
    fn test_rank_preserves_every_id_exactly_once() {
        let catalog = test_catalog();
        let view = rank(&catalog, Some(ORIGIN));

        assert_eq!(view.len(), catalog.len());
        let ids: HashSet<u32> = view.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_rank_is_non_decreasing() {
        let view = rank(&test_catalog(), Some(ORIGIN));
        for pair in view.windows(2) {
            assert!(pair[0].distance_km.unwrap() <= pair[1].distance_km.unwrap());
        }
    }

    #[test]
    fn test_nearest_first() {
        let view = rank(&test_catalog(), Some(ORIGIN));
        // RS PKU is ~0.27 km from the city center, by far the closest
        assert_eq!(view[0].id, 3);
        assert!((view[0].distance_km.unwrap() - 0.27).abs() < 0.01);
    }

    #[test]
    fn test_distances_are_display_rounded() {
        let view = rank(&test_catalog(), Some(ORIGIN));
        for entry in &view {
            let d = entry.distance_km.unwrap();
            assert!((d * 100.0 - (d * 100.0).round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_equal_distance_keeps_catalog_order() {
        let catalog = FacilityCatalog::new(vec![
            facility(10, "Klinik A", -7.80, 110.36),
            facility(11, "Klinik B", -7.80, 110.36),
        ]);
        let view = rank(&catalog, Some(ORIGIN));
        assert_eq!(view[0].id, 10);
        assert_eq!(view[1].id, 11);
    }

    #[test]
    fn test_source_catalog_is_untouched() {
        let catalog = test_catalog();
        let _ = rank(&catalog, Some(ORIGIN));
        assert!(catalog.iter().all(|f| f.distance_km.is_none()));
    }

    proptest! {
        #[test]
        fn prop_rank_is_a_permutation(
            lat in -90.0f64..90.0,
            lng in -180.0f64..180.0,
        ) {
            let catalog = test_catalog();
            let view = rank(&catalog, Some(Coordinate::new(lat, lng)));

            let mut ranked_ids: Vec<u32> = view.iter().map(|f| f.id).collect();
            let mut source_ids: Vec<u32> = catalog.iter().map(|f| f.id).collect();
            ranked_ids.sort_unstable();
            source_ids.sort_unstable();
            prop_assert_eq!(ranked_ids, source_ids);

            for pair in view.windows(2) {
                prop_assert!(pair[0].distance_km <= pair[1].distance_km);
            }
        }
    }
}

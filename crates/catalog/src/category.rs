//! Keyword-based facility category classification.
//!
//! Categories are derived from the registered facility name by an ordered
//! list of case-insensitive substring rules. The first matching rule wins;
//! rule order is load-bearing because some names match several keywords
//! (e.g. "Optik RS Mata dr. Yap" matches both the hospital and the optical
//! rule) and must be preserved for reproducibility.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Facility category derived from the registered name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Hospitals ("RS", "Rumah Sakit")
    Hospital,
    /// Community health centers ("Puskesmas")
    CommunityHealthCenter,
    /// Auxiliary health posts ("Pustu")
    AuxiliaryHealthPost,
    /// Clinics ("Klinik", "Clinic")
    Clinic,
    /// Private physician practices ("Praktik")
    PrivatePractice,
    /// Medical laboratories ("Laboratorium", "Lab")
    Laboratory,
    /// Optical providers ("Optik")
    Optical,
    /// Pharmacies ("Apotek")
    Pharmacy,
    /// Catch-all for names matching no rule
    Other,
}

impl Category {
    /// Human-readable label for display and sorting.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hospital => "Hospital",
            Self::CommunityHealthCenter => "Community Health Center",
            Self::AuxiliaryHealthPost => "Auxiliary Health Post",
            Self::Clinic => "Clinic",
            Self::PrivatePractice => "Private Practice",
            Self::Laboratory => "Laboratory",
            Self::Optical => "Optical",
            Self::Pharmacy => "Pharmacy",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification rules, evaluated top to bottom. First match wins.
///
/// The trailing spaces in "rs " and "lab " are deliberate: they keep the
/// abbreviation rules from firing inside unrelated words.
const RULES: &[(&[&str], Category)] = &[
    (&["rs ", "rumah sakit"], Category::Hospital),
    (&["puskesmas"], Category::CommunityHealthCenter),
    (&["pustu"], Category::AuxiliaryHealthPost),
    (&["klinik", "clinic"], Category::Clinic),
    (&["praktik"], Category::PrivatePractice),
    (&["laboratorium", "lab "], Category::Laboratory),
    (&["optik"], Category::Optical),
    (&["apotek"], Category::Pharmacy),
];

/// Classifies a facility name into a category.
///
/// Runs once per catalog entry at load time; the result is cached on the
/// entity and never recomputed.
#[must_use]
pub fn classify(name: &str) -> Category {
    let name = name.to_lowercase();
    for (keywords, category) in RULES {
        if keywords.iter().any(|keyword| name.contains(keyword)) {
            return *category;
        }
    }
    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hospital_markers() {
        assert_eq!(classify("RS Islam Hidayatullah Yogyakarta"), Category::Hospital);
        assert_eq!(classify("Rumah Sakit Umum Daerah"), Category::Hospital);
    }

    #[test]
    fn test_community_health_center() {
        assert_eq!(classify("Puskesmas Tegalrejo"), Category::CommunityHealthCenter);
    }

    #[test]
    fn test_clinic_markers() {
        assert_eq!(classify("Klinik Utama Prodia Health Care"), Category::Clinic);
        assert_eq!(classify("Natasha Skin Clinic Center"), Category::Clinic);
    }

    #[test]
    fn test_private_practice() {
        assert_eq!(classify("Praktik drg. Abdul Kadir"), Category::PrivatePractice);
    }

    #[test]
    fn test_laboratory_markers() {
        assert_eq!(classify("Laboratorium Medis Umum Utama CITO"), Category::Laboratory);
        assert_eq!(classify("Lab Kesehatan Dinas Kesehatan"), Category::Laboratory);
    }

    #[test]
    fn test_optical() {
        assert_eq!(classify("Optik Melawai Urip Sumoharjo"), Category::Optical);
    }

    #[test]
    fn test_pharmacy() {
        assert_eq!(classify("Apotek K-24 Gondomanan"), Category::Pharmacy);
    }

    #[test]
    fn test_fallback_other() {
        assert_eq!(classify("Unknown Shop"), Category::Other);
        // "Optic" is not "Optik"; no rule matches
        assert_eq!(classify("Pranoto Optic Jl. C Simanjuntak"), Category::Other);
    }

    #[test]
    fn test_rule_order_first_match_wins() {
        // Contains both "rs " and "optik"; the hospital rule runs first.
        assert_eq!(classify("Optik RS Mata dr. Yap"), Category::Hospital);
        // Contains both "klinik" and "laboratorium"; the clinic rule runs first.
        assert_eq!(classify("Klinik Laboratorium Sejahtera"), Category::Clinic);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("OPTIK TELKOMEDIKA"), Category::Optical);
        assert_eq!(classify("puskesmas jetis"), Category::CommunityHealthCenter);
    }
}

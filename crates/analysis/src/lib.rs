//! AI-generated facility briefings for the Sedayu Sehat navigator.
//!
//! This crate provides:
//! - `GeminiClient`, requesting a natural-language facility brief from a
//!   generative-AI service with web-search grounding enabled
//! - Defensive extraction of structured data from the loosely-structured
//!   response text (grounding rules out strict structured output)
//! - Citation extraction from grounding metadata
//! - `AnalysisTracker`, the analysis slot with stale-response suppression
//!
//! Every failure path degrades to a fixed, well-defined fallback brief;
//! callers never see an error, only a valid `AnalysisResult` or the
//! in-flight state.

mod client;
mod config;
mod error;
mod extract;
mod prompt;
mod state;

pub use client::GeminiClient;
pub use config::{AnalysisConfig, DEFAULT_GEMINI_URL, DEFAULT_MODEL};
pub use error::AnalysisError;
pub use extract::{extract_json_block, parse_brief, ParsedBrief};
pub use prompt::build_prompt;
pub use state::{AnalysisState, AnalysisTracker};

use serde::{Deserialize, Serialize};

/// A cited web source backing the brief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Page title as reported by the grounding metadata
    pub title: String,
    /// Page URI
    pub uri: String,
}

/// A complete facility brief, produced fresh per selection.
///
/// A new selection's result supersedes (never merges with) the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Multi-sentence descriptive summary
    pub summary: String,
    /// Highlighted services, in the order the model listed them
    pub activities: Vec<String>,
    /// One practical visitor tip
    pub tips: String,
    /// Web citations in grounding order, uncapped
    pub sources: Vec<Source>,
}

impl AnalysisResult {
    /// Fixed brief for the "no API key configured" state. A degraded but
    /// defined configuration, not an error.
    #[must_use]
    pub fn not_configured() -> Self {
        Self {
            summary: "API Key hilang. Mohon konfigurasi environment variable.".to_string(),
            activities: vec!["Data tidak tersedia".to_string()],
            tips: "Aktifkan Gemini API untuk wawasan pintar.".to_string(),
            sources: Vec::new(),
        }
    }

    /// Fixed brief for request, transport or parsing failures.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            summary: "Maaf, analisis tidak dapat dilakukan saat ini. Pastikan koneksi internet lancar."
                .to_string(),
            activities: vec!["Layanan Umum Medis".to_string()],
            tips: "Bawa KTP dan kartu asuransi/BPJS saat berkunjung.".to_string(),
            sources: Vec::new(),
        }
    }

    /// The first three sources, for display. Read-only truncation; the
    /// underlying result keeps every citation.
    #[must_use]
    pub fn display_sources(&self) -> &[Source] {
        &self.sources[..self.sources.len().min(3)]
    }
}

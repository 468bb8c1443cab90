//! Defensive extraction of structured data from model output.
//!
//! Grounding disables the service's strict structured-output mode, so the
//! response is free-form text that is merely expected to contain a JSON
//! object. The model may wrap it in a fenced code block, prepend commentary,
//! or append pleasantries; this module peels those layers off before
//! parsing. Everything here is pure and separate from the network call.

use serde::Deserialize;

/// The structured portion of a brief as emitted by the model.
///
/// Missing fields are treated as malformed output: the original contract
/// asks for all three, and a partial brief is worse than the defined
/// fallback.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParsedBrief {
    /// Multi-sentence descriptive summary
    pub summary: String,
    /// Highlighted services in model order
    pub activities: Vec<String>,
    /// One practical visitor tip
    pub tips: String,
}

/// Isolates the JSON object embedded in model output.
///
/// First strips a leading/trailing fenced code-block marker (triple
/// backticks with an optional `json` tag), trimming whitespace. Then takes
/// the span from the first `{` to the last `}`; if no braces are found the
/// stripped text is returned as-is.
#[must_use]
pub fn extract_json_block(text: &str) -> &str {
    brace_span(strip_code_fence(text))
}

/// Parses a raw model reply into a [`ParsedBrief`].
///
/// Malformed JSON surfaces as an error for the caller to map onto the
/// standard failure fallback; it never panics and never yields a partial
/// result.
pub fn parse_brief(text: &str) -> serde_json::Result<ParsedBrief> {
    serde_json::from_str(extract_json_block(text))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

fn brace_span(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start <= end => &text[start..=end],
        _ => text,
    }
}

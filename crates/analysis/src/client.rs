//! Gemini client for grounded facility briefings.

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, ApiResult};
use crate::extract::parse_brief;
use crate::prompt::build_prompt;
use crate::{AnalysisResult, Source};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use sehat_catalog::Facility;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// API key header for the Gemini REST API
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Generative-AI client producing facility briefings.
///
/// `analyze` is total: configuration absence and every failure mode map to
/// fixed fallback briefs, so the caller always receives a valid
/// [`AnalysisResult`].
#[derive(Debug, Clone)]
pub struct GeminiClient {
    inner: Client,
    config: AnalysisConfig,
}

impl GeminiClient {
    /// Create a new client with configuration from the environment.
    pub fn new() -> ApiResult<Self> {
        Self::with_config(AnalysisConfig::from_env()?)
    }

    /// Create a new client with specific configuration.
    pub fn with_config(config: AnalysisConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static("sehat-analysis/0.5"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(AnalysisError::Request)?;

        Ok(Self { inner, config })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Produce a brief for the given facility.
    ///
    /// Without a credential this short-circuits synchronously to the
    /// "not configured" brief. Any request, transport or parsing failure
    /// yields the "unavailable" brief. Never returns an error.
    #[instrument(skip(self, facility), fields(facility = %facility.name))]
    pub async fn analyze(&self, facility: &Facility) -> AnalysisResult {
        if !self.config.is_configured() {
            debug!("no API key configured, serving fixed fallback brief");
            return AnalysisResult::not_configured();
        }

        match self.try_analyze(facility).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "analysis failed, serving fallback brief");
                AnalysisResult::unavailable()
            }
        }
    }

    /// Perform a single analysis request without the fallback mapping.
    pub async fn try_analyze(&self, facility: &Facility) -> ApiResult<AnalysisResult> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AnalysisError::config("api_key is not set"))?;

        let request_id = Uuid::new_v4().to_string();
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
        );

        let body = GenerateContentRequest::grounded(build_prompt(facility));

        debug!(request_id = %request_id, model = %self.config.model, "requesting facility brief");

        let response = self
            .inner
            .post(&url)
            .header(API_KEY_HEADER, key)
            .header(X_REQUEST_ID, &request_id)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AnalysisError::api_response(status.as_u16(), message));
        }

        let reply: GenerateContentResponse = response.json().await?;
        brief_from_response(&reply)
    }
}

/// Assembles an [`AnalysisResult`] from the service reply.
///
/// Text parsing and source extraction are independent: citations come from
/// the grounding metadata even though the brief comes from the free-form
/// text.
fn brief_from_response(reply: &GenerateContentResponse) -> ApiResult<AnalysisResult> {
    let candidate = reply
        .candidates
        .first()
        .ok_or(AnalysisError::EmptyResponse)?;

    let sources = candidate
        .grounding_metadata
        .as_ref()
        .map(|metadata| sources_from_chunks(&metadata.grounding_chunks))
        .unwrap_or_default();

    let brief = parse_brief(&candidate.joined_text())?;

    Ok(AnalysisResult {
        summary: brief.summary,
        activities: brief.activities,
        tips: brief.tips,
        sources,
    })
}

/// Extracts web citations from grounding chunks, preserving order and
/// dropping chunks without a web citation. No cap is applied here; showing
/// only the first few is a display concern.
fn sources_from_chunks(chunks: &[GroundingChunk]) -> Vec<Source> {
    chunks
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .map(|web| Source {
            title: web.title.clone(),
            uri: web.uri.clone(),
        })
        .collect()
}

// --- Wire types -----------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    tools: Vec<Tool>,
}

impl GenerateContentRequest {
    /// A single-turn request with the web-search grounding tool enabled.
    /// Grounding rules out the strict structured-output mode, so no response
    /// schema is attached.
    fn grounded(prompt: String) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

impl Candidate {
    /// Concatenates the candidate's text parts, skipping non-text parts.
    fn joined_text(&self) -> String {
        self.content
            .as_ref()
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<Vec<_>>()
                    .concat()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebCitation>,
}

#[derive(Debug, Deserialize)]
struct WebCitation {
    #[serde(default)]
    title: String,
    #[serde(default)]
    uri: String,
}

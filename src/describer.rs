// src/describer.rs

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::domain::form::split_amenities;
use crate::domain::property::PropertyType;

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Amenities assumed when the user left the field blank, so the prompt
/// always has something to work with.
const FALLBACK_AMENITIES: [&str; 3] = ["Modern", "Spacious", "Prime Location"];

#[derive(Debug)]
pub enum DescriberError {
    RequestFailed(String),
    ApiError(String),
}

impl fmt::Display for DescriberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriberError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            DescriberError::ApiError(msg) => write!(f, "API error: {}", msg),
        }
    }
}

impl Error for DescriberError {}

/// Thin client over the Gemini text-generation API: one prompt in,
/// one description out. No retries and no recovery; a failure is
/// reported to the user as-is.
pub struct GeminiDescriber {
    api_key: String,
    client: Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

impl GeminiDescriber {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: Client::new(),
        }
    }

    /// Reads the API key from the environment. A missing key disables
    /// the feature rather than failing startup.
    pub fn from_env() -> Option<Self> {
        match std::env::var(GEMINI_API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Some(Self::new(key)),
            _ => None,
        }
    }

    pub fn generate_description(
        &self,
        title: &str,
        property_type: PropertyType,
        location: &str,
        amenities_input: &str,
    ) -> Result<String, DescriberError> {
        let prompt = build_prompt(title, property_type, location, amenities_input);

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        let url = format!(
            "{GEMINI_BASE_URL}/{GEMINI_MODEL}:generateContent?key={}",
            self.api_key
        );

        let response = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(30))
            .json(&body)
            .send()
            .map_err(|e| DescriberError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(DescriberError::ApiError(format!("{} - {}", status, text)));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| DescriberError::ApiError(format!("unreadable response: {e}")))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| DescriberError::ApiError("empty candidate list".to_string()))?;

        Ok(text)
    }
}

fn build_prompt(
    title: &str,
    property_type: PropertyType,
    location: &str,
    amenities_input: &str,
) -> String {
    let mut amenities = split_amenities(amenities_input);
    if amenities.is_empty() {
        amenities = FALLBACK_AMENITIES.iter().map(|s| s.to_string()).collect();
    }

    format!(
        "Write an appealing 50-60 word real estate listing description for \
         \"{title}\", a {property_type} located in {location}. \
         Highlight these amenities: {}. \
         Return only the description text, no headings.",
        amenities.join(", ")
    )
}

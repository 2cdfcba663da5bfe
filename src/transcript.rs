use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::TranscriptError;

// @module: Transcript input model and text normalization

// @const: Whitespace run regex used for normalization
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// @struct: Single transcript segment from the recognizer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawSegment {
    // @field: Segment text
    pub text: String,

    // @field: Advisory start time in seconds
    #[serde(default)]
    pub start: Option<f64>,

    // @field: Advisory end time in seconds
    #[serde(default)]
    pub end: Option<f64>,

    // @field: Tone markers attached by the upstream analyzer, passed through untouched
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tone_markers: Vec<String>,
}

impl RawSegment {
    /// Creates a new segment with advisory timing
    pub fn new(text: impl Into<String>, start: Option<f64>, end: Option<f64>) -> Self {
        RawSegment {
            text: text.into(),
            start,
            end,
            tone_markers: Vec::new(),
        }
    }

    /// Segment text with whitespace runs collapsed to single spaces and ends trimmed
    pub fn normalized_text(&self) -> String {
        normalize_text(&self.text)
    }

    /// Advisory segment span in seconds, floored at zero for malformed timing
    pub fn advisory_duration(&self) -> f64 {
        match (self.start, self.end) {
            (Some(start), Some(end)) => (end - start).max(0.0),
            _ => 0.0,
        }
    }
}

/// Full transcript payload produced by the transcription collaborator
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Transcript {
    /// Full transcript text
    #[serde(default)]
    pub text: Option<String>,

    /// Ordered transcript segments
    #[serde(default)]
    pub segments: Vec<RawSegment>,

    /// Total audio duration in seconds
    #[serde(default)]
    pub duration: f64,

    /// Detected language code
    #[serde(default)]
    pub language: Option<String>,
}

impl Transcript {
    /// Create a transcript from segments and a total duration
    pub fn new(segments: Vec<RawSegment>, duration: f64) -> Self {
        Transcript {
            text: None,
            segments,
            duration,
            language: None,
        }
    }

    /// Parse a transcript from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| TranscriptError::ParseError(e.to_string()))
            .context("Failed to parse transcript JSON")
    }

    /// Load a transcript from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript file: {}", path.display()))?;

        Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse transcript file: {}", path.display()))
    }

    /// Full transcript text, falling back to joining the segment texts
    pub fn full_text(&self) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => {
                let joined: Vec<String> =
                    self.segments.iter().map(|s| s.normalized_text()).collect();
                joined.join(" ")
            }
        }
    }
}

/// Collapse whitespace runs to single spaces and trim both ends
pub fn normalize_text(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text.trim(), " ").into_owned()
}

/*!
 * Common test utilities for the srtforge test suite
 */

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use srtforge::transcript::{RawSegment, Transcript};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Two-segment French transcript used across scenario tests
pub fn sample_transcript() -> Transcript {
    let mut transcript = Transcript::new(
        vec![
            RawSegment::new("Bonjour, comment allez-vous ?", Some(0.0), Some(2.5)),
            RawSegment::new("Je vais bien, merci !", Some(3.0), Some(5.0)),
        ],
        5.0,
    );
    transcript.language = Some("fr".to_string());
    transcript
}

/// Raw recognizer JSON matching `sample_transcript`
pub fn sample_transcript_json() -> &'static str {
    r#"{
        "text": "Bonjour, comment allez-vous ? Je vais bien, merci !",
        "segments": [
            {"text": "Bonjour, comment allez-vous ?", "start": 0.0, "end": 2.5},
            {"text": "Je vais bien, merci !", "start": 3.0, "end": 5.0}
        ],
        "duration": 5.0,
        "language": "fr"
    }"#
}

/// Builds a transcript of `count` identical segments, 2.5 seconds apart
pub fn repeated_transcript(count: usize, text: &str, total_duration: f64) -> Transcript {
    let segments = (0..count)
        .map(|i| {
            let start = i as f64 * 2.5;
            RawSegment::new(text, Some(start), Some(start + 2.5))
        })
        .collect();
    Transcript::new(segments, total_duration)
}

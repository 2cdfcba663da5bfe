use std::fmt;

use serde::Serialize;

use crate::srt_renderer::SubtitleTrack;
use crate::transcript::Transcript;

// @module: Derived transcript statistics

/// Read-only statistics derived from a transcript and its generated track
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TranscriptStatistics {
    /// Total audio duration in seconds
    pub duration: f64,

    /// Words in the full transcript text
    pub word_count: usize,

    /// Characters in the full transcript text
    pub char_count: usize,

    /// Number of input segments
    pub segment_count: usize,

    /// Number of cues in the generated track
    pub estimated_subtitle_count: usize,

    /// Mean advisory segment span in seconds
    pub avg_segment_duration: f64,

    /// Speech rate in words per minute, rounded to one decimal
    pub speech_rate_wpm: f64,

    /// Language reported by the recognizer
    pub language: String,
}

impl TranscriptStatistics {
    /// Compute statistics for a transcript and the track generated from it.
    ///
    /// Returns `None` for a transcript with no segments, matching the
    /// "nothing to emit" contract of generation itself.
    pub fn compute(transcript: &Transcript, track: &SubtitleTrack) -> Option<Self> {
        if transcript.segments.is_empty() {
            return None;
        }

        let text = transcript.full_text();
        let word_count = text.split_whitespace().count();
        let char_count = text.chars().count();
        let segment_count = transcript.segments.len();

        // The advisory timestamps' only use: they never feed cue timing
        let advisory_total: f64 = transcript
            .segments
            .iter()
            .map(|s| s.advisory_duration())
            .sum();
        let avg_segment_duration = advisory_total / segment_count as f64;

        let speech_rate_wpm = if transcript.duration > 0.0 {
            let wpm = word_count as f64 / transcript.duration * 60.0;
            (wpm * 10.0).round() / 10.0
        } else {
            0.0
        };

        Some(TranscriptStatistics {
            duration: transcript.duration,
            word_count,
            char_count,
            segment_count,
            estimated_subtitle_count: track.len(),
            avg_segment_duration,
            speech_rate_wpm,
            language: transcript
                .language
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }
}

impl fmt::Display for TranscriptStatistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Transcript statistics")?;
        writeln!(f, "Duration: {}", format_duration(self.duration))?;
        writeln!(f, "Words: {}", self.word_count)?;
        writeln!(f, "Characters: {}", self.char_count)?;
        writeln!(f, "Segments: {}", self.segment_count)?;
        writeln!(f, "Subtitles: {}", self.estimated_subtitle_count)?;
        writeln!(
            f,
            "Average segment duration: {:.2}s",
            self.avg_segment_duration
        )?;
        writeln!(f, "Speech rate: {} wpm", self.speech_rate_wpm)?;
        write!(f, "Language: {}", self.language.to_uppercase())
    }
}

/// Format a duration in seconds as a short human-readable string
pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{:.1}s", seconds)
    } else if seconds < 3600.0 {
        let minutes = (seconds / 60.0) as u64;
        let secs = seconds % 60.0;
        format!("{}m{:.0}s", minutes, secs)
    } else {
        let hours = (seconds / 3600.0) as u64;
        let minutes = ((seconds % 3600.0) / 60.0) as u64;
        format!("{}h{}m", hours, minutes)
    }
}

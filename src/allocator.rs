use log::{debug, warn};

use crate::app_config::Config;
use crate::pacing;
use crate::segmenter;
use crate::transcript::RawSegment;

// @module: Cue timeline allocation

// @struct: Single timed subtitle cue
#[derive(Debug, Clone, PartialEq)]
pub struct TimedCue {
    // @field: Display lines, at most max_lines_per_subtitle
    pub lines: Vec<String>,

    // @field: Start time in seconds
    pub start: f64,

    // @field: End time in seconds
    pub end: f64,

    // @field: Tone markers carried over from the source segment
    pub tone_markers: Vec<String>,
}

impl TimedCue {
    /// Cue duration in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Cue text with lines joined by newlines
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Walk the segment sequence and assign non-overlapping cue intervals.
///
/// Timing is synthesized from the reading/pause model rather than the
/// segments' advisory timestamps. Each segment yields exactly one cue.
/// The final cue is stretched to absorb any slack up to `total_duration`;
/// once the cursor reaches `total_duration`, remaining segments are
/// dropped and the last emitted cue is compressed to fit.
pub fn allocate(segments: &[RawSegment], total_duration: f64, config: &Config) -> Vec<TimedCue> {
    if segments.is_empty() {
        return Vec::new();
    }

    // Defensive floor so a zero or negative duration cannot produce
    // negative cue spans
    let total_duration = total_duration.max(0.0);
    let last_index = segments.len() - 1;

    let mut cues: Vec<TimedCue> = Vec::with_capacity(segments.len());
    let mut cursor = 0.0_f64;

    for (index, raw_segment) in segments.iter().enumerate() {
        let text = raw_segment.normalized_text();
        if text.is_empty() {
            debug!("Skipping empty segment at index {}", index);
            continue;
        }

        let lines = subtitle_lines(&text, config);
        if lines.is_empty() {
            continue;
        }

        let reading = pacing::reading_duration(&text);
        let mut duration = if index < last_index {
            reading + pacing::pause_after(&text, config.min_pause_duration)
        } else {
            // Last segment absorbs the remaining time, never shrinking
            // below its reading duration
            reading.max(total_duration - cursor)
        };

        // Compress to fit the audio, even below the natural reading time
        if cursor + duration > total_duration {
            duration = (total_duration - cursor).max(0.0);
        }

        cues.push(TimedCue {
            lines,
            start: cursor,
            end: cursor + duration,
            tone_markers: raw_segment.tone_markers.clone(),
        });

        cursor += duration;

        if cursor >= total_duration {
            let dropped = last_index.saturating_sub(index);
            if dropped > 0 {
                warn!(
                    "Audio duration exhausted at segment {}, dropping {} remaining segment(s)",
                    index + 1,
                    dropped
                );
            }
            break;
        }
    }

    cues
}

/// Build the display lines for one segment, capped at the configured
/// line count. Chunks beyond the cap are discarded: a segment never
/// spawns more than one cue, so text past
/// `max_lines_per_subtitle * max_chars_per_line` is truncated.
fn subtitle_lines(text: &str, config: &Config) -> Vec<String> {
    let mut chunks = segmenter::segment(text, config.max_chars_per_line);

    if chunks.len() > config.max_lines_per_subtitle {
        debug!(
            "Segment produced {} chunks, keeping first {} line(s)",
            chunks.len(),
            config.max_lines_per_subtitle
        );
        chunks.truncate(config.max_lines_per_subtitle);
    }

    chunks
}

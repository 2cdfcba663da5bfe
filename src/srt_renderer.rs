use std::fmt;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::allocator::TimedCue;

// @module: SRT serialization and file output

/// Ordered sequence of timed cues for one audio source
#[derive(Debug, Clone, Default)]
pub struct SubtitleTrack {
    /// Generated cues in playback order
    pub cues: Vec<TimedCue>,

    /// Total duration of the source audio in seconds
    pub total_duration: f64,
}

impl SubtitleTrack {
    /// Create a new subtitle track
    pub fn new(cues: Vec<TimedCue>, total_duration: f64) -> Self {
        SubtitleTrack {
            cues,
            total_duration,
        }
    }

    /// Number of cues in the track
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Whether the track contains no cues
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Render the track as SRT text.
    ///
    /// Each cue becomes a block of a 1-based index line, a timestamp
    /// range line, the cue lines, and a trailing blank line. An empty
    /// track renders as an empty string, which signals "nothing to
    /// render" to the caller rather than an error.
    pub fn to_srt_string(&self) -> String {
        let mut output = String::new();

        for (index, cue) in self.cues.iter().enumerate() {
            let _ = writeln!(output, "{}", index + 1);
            let _ = writeln!(
                output,
                "{} --> {}",
                format_timestamp(seconds_to_ms(cue.start)),
                format_timestamp(seconds_to_ms(cue.end))
            );
            for line in &cue.lines {
                let _ = writeln!(output, "{}", line);
            }
            let _ = writeln!(output);
        }

        output
    }

    /// Write the track to an SRT file, creating parent directories as needed
    pub fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create subtitle file: {}", path.display()))?;

        file.write_all(self.to_srt_string().as_bytes())
            .with_context(|| format!("Failed to write subtitle file: {}", path.display()))?;

        debug!("Wrote {} cue(s) to {}", self.cues.len(), path.display());
        Ok(())
    }
}

impl fmt::Display for SubtitleTrack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_srt_string())
    }
}

/// Convert seconds to whole milliseconds, flooring and clamping at zero
pub fn seconds_to_ms(seconds: f64) -> u64 {
    (seconds.max(0.0) * 1000.0) as u64
}

/// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
pub fn format_timestamp(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

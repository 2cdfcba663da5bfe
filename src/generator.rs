use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::allocator;
use crate::app_config::Config;
use crate::srt_renderer::SubtitleTrack;
use crate::statistics::TranscriptStatistics;
use crate::transcript::Transcript;

// @module: Main subtitle generation entry point

/// Subtitle track generator.
///
/// Holds the validated configuration and exposes the generation pipeline:
/// normalize, segment, pace, allocate, serialize. Every call is a pure
/// function of the transcript and the configuration; no state is shared
/// across calls, so one generator may be used concurrently from multiple
/// callers on distinct inputs.
#[derive(Debug, Clone)]
pub struct SrtGenerator {
    config: Config,
}

impl SrtGenerator {
    /// Create a generator with the given configuration.
    ///
    /// Fails fast on contract violations such as a zero line limit.
    pub fn new(config: Config) -> Result<Self> {
        config
            .validate()
            .context("Invalid subtitle generator configuration")?;
        Ok(SrtGenerator { config })
    }

    /// Create a generator with the default configuration
    pub fn with_defaults() -> Self {
        SrtGenerator {
            config: Config::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate a timed subtitle track from a transcript.
    ///
    /// An empty segment list yields an empty track; the caller decides
    /// whether that is worth reporting.
    pub fn generate(&self, transcript: &Transcript) -> SubtitleTrack {
        if transcript.segments.is_empty() {
            warn!("No transcript segments to convert");
            return SubtitleTrack::new(Vec::new(), transcript.duration.max(0.0));
        }

        let cues = allocator::allocate(&transcript.segments, transcript.duration, &self.config);
        info!("Generated {} subtitle cue(s)", cues.len());

        SubtitleTrack::new(cues, transcript.duration.max(0.0))
    }

    /// Generate a transcript's subtitle track rendered as SRT text
    pub fn generate_srt(&self, transcript: &Transcript) -> String {
        self.generate(transcript).to_srt_string()
    }

    /// Generate and write an SRT file, returning the written path
    pub fn generate_srt_file<P: AsRef<Path>>(
        &self,
        transcript: &Transcript,
        output_path: P,
    ) -> Result<PathBuf> {
        let output_path = output_path.as_ref();
        let track = self.generate(transcript);
        track.write_to_srt(output_path)?;

        info!("Subtitle file created: {}", output_path.display());
        Ok(output_path.to_path_buf())
    }

    /// Derived statistics for a transcript, `None` when there is nothing to measure
    pub fn get_statistics(&self, transcript: &Transcript) -> Option<TranscriptStatistics> {
        let track = self.generate(transcript);
        TranscriptStatistics::compute(transcript, &track)
    }
}

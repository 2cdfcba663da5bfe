/*!
 * # SRTForge - Subtitle Track Generation from Speech Transcripts
 *
 * A Rust library for turning speech-to-text transcripts into professional
 * SubRip (SRT) subtitle tracks.
 *
 * ## Features
 *
 * - Punctuation-aware text segmentation with word-wrap fallback
 * - Pause detection from terminal punctuation for natural pacing
 * - Reading-duration estimation from a fixed speech-rate model
 * - Non-overlapping, monotonic cue timing bounded by the audio duration
 * - Configurable line length and line count limits
 * - Transcript statistics (word count, speech rate, estimated cue count)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `transcript`: Transcript input model and text normalization
 * - `segmenter`: Display-line text segmentation
 * - `pacing`: Pause and reading-duration model
 * - `allocator`: Cue timeline allocation
 * - `srt_renderer`: SRT serialization and file output
 * - `statistics`: Derived transcript statistics
 * - `generator`: Main generation entry point
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod transcript;
pub mod segmenter;
pub mod pacing;
pub mod allocator;
pub mod srt_renderer;
pub mod statistics;
pub mod generator;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use transcript::{RawSegment, Transcript};
pub use allocator::TimedCue;
pub use srt_renderer::SubtitleTrack;
pub use statistics::TranscriptStatistics;
pub use generator::SrtGenerator;
pub use errors::{AppError, ConfigError, TranscriptError};

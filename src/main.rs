// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::generator::SrtGenerator;
use crate::transcript::Transcript;

mod allocator;
mod app_config;
mod errors;
mod generator;
mod pacing;
mod segmenter;
mod srt_renderer;
mod statistics;
mod transcript;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an SRT subtitle file from a transcript (default command)
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Print statistics for a transcript
    Stats(StatsArgs),

    /// Generate shell completions for srtforge
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Transcript JSON file to process
    #[arg(value_name = "TRANSCRIPT")]
    input_path: PathBuf,

    /// Output SRT file path (defaults to the input path with an .srt extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum characters per subtitle line
    #[arg(long)]
    max_chars_per_line: Option<usize>,

    /// Maximum lines per subtitle cue
    #[arg(long)]
    max_lines_per_subtitle: Option<usize>,

    /// Minimum pause between cues in seconds
    #[arg(long)]
    min_pause_duration: Option<f64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print the SRT content to stdout instead of writing a file
    #[arg(short, long)]
    print: bool,
}

#[derive(Parser, Debug)]
struct StatsArgs {
    /// Transcript JSON file to analyze
    #[arg(value_name = "TRANSCRIPT")]
    input_path: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print statistics as JSON
    #[arg(short, long)]
    json: bool,
}

/// SRTForge - subtitle track generation from speech transcripts
///
/// Turns speech-to-text transcript JSON into professional SRT subtitle
/// files with natural pacing and display-safe line lengths.
#[derive(Parser, Debug)]
#[command(name = "srtforge")]
#[command(version = "1.0.0")]
#[command(about = "Generate SRT subtitles from speech-to-text transcripts")]
#[command(long_about = "SRTForge reads transcript JSON produced by a speech recognizer and
generates a professional SRT subtitle track with punctuation-aware line
breaks and natural pacing.

EXAMPLES:
    srtforge transcript.json                    # Write transcript.srt
    srtforge -o movie.srt transcript.json       # Choose the output path
    srtforge --max-chars-per-line 38 in.json    # Tighter lines
    srtforge -p transcript.json                 # Print SRT to stdout
    srtforge stats transcript.json              # Show transcript statistics
    srtforge completions bash > srtforge.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. Command line flags override
    values from the config file.

TRANSCRIPT FORMAT:
    A JSON object with \"segments\" (list of {text, start, end}),
    \"duration\" in seconds, and optional \"text\" and \"language\" fields.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Transcript JSON file to process
    #[arg(value_name = "TRANSCRIPT")]
    input_path: Option<PathBuf>,

    /// Output SRT file path (defaults to the input path with an .srt extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum characters per subtitle line
    #[arg(long)]
    max_chars_per_line: Option<usize>,

    /// Maximum lines per subtitle cue
    #[arg(long)]
    max_lines_per_subtitle: Option<usize>,

    /// Minimum pause between cues in seconds
    #[arg(long)]
    min_pause_duration: Option<f64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print the SRT content to stdout instead of writing a file
    #[arg(short, long)]
    print: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "srtforge", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Generate(args)) => run_generate(args),
        Some(Commands::Stats(args)) => run_stats(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("TRANSCRIPT is required when no subcommand is specified"))?;

            let generate_args = GenerateArgs {
                input_path,
                output: cli.output,
                max_chars_per_line: cli.max_chars_per_line,
                max_lines_per_subtitle: cli.max_lines_per_subtitle,
                min_pause_duration: cli.min_pause_duration,
                config_path: cli.config_path,
                log_level: cli.log_level,
                print: cli.print,
            };
            run_generate(generate_args)
        }
    }
}

/// Apply a CLI log level override to the active logger
fn apply_log_level(cmd_log_level: &Option<CliLogLevel>) {
    if let Some(cmd_log_level) = cmd_log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        let log_level = match config_log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };
        log::set_max_level(log_level);
    }
}

/// Load configuration, preferring the config file and applying CLI overrides
fn load_config(
    config_path: &str,
    max_chars_per_line: Option<usize>,
    max_lines_per_subtitle: Option<usize>,
    min_pause_duration: Option<f64>,
) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config file: {}", config_path))?
    } else {
        Config::default()
    };

    if let Some(max_chars) = max_chars_per_line {
        config.max_chars_per_line = max_chars;
    }

    if let Some(max_lines) = max_lines_per_subtitle {
        config.max_lines_per_subtitle = max_lines;
    }

    if let Some(min_pause) = min_pause_duration {
        config.min_pause_duration = min_pause;
    }

    Ok(config)
}

fn run_generate(options: GenerateArgs) -> Result<()> {
    apply_log_level(&options.log_level);

    let config = load_config(
        &options.config_path,
        options.max_chars_per_line,
        options.max_lines_per_subtitle,
        options.min_pause_duration,
    )?;

    let generator = SrtGenerator::new(config)?;

    let transcript = Transcript::from_file(&options.input_path)?;
    if transcript.segments.is_empty() {
        warn!(
            "Transcript {} contains no segments, nothing to emit",
            options.input_path.display()
        );
    }

    if options.print {
        print!("{}", generator.generate_srt(&transcript));
        return Ok(());
    }

    let output_path = options
        .output
        .unwrap_or_else(|| options.input_path.with_extension("srt"));

    let written = generator.generate_srt_file(&transcript, &output_path)?;
    info!("Done: {}", written.display());

    Ok(())
}

fn run_stats(options: StatsArgs) -> Result<()> {
    apply_log_level(&options.log_level);

    let config = load_config(&options.config_path, None, None, None)?;
    let generator = SrtGenerator::new(config)?;

    let transcript = Transcript::from_file(&options.input_path)?;

    match generator.get_statistics(&transcript) {
        Some(stats) => {
            if options.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{}", stats);
            }
        }
        None => {
            warn!(
                "Transcript {} contains no segments, no statistics available",
                options.input_path.display()
            );
        }
    }

    Ok(())
}

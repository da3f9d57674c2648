#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::time::Duration;

use framecode::app_config::{Config, LogLevel};
use framecode::{
    extract_video_id, validate_timestamp, AppError, Controller, ExtractionOutcome, FrameError,
    HttpFrameSource, Timestamp, ValidationResult, VideoDuration,
};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the video identifier contained in a link
    Id {
        /// Video link (watch, embed, short link...)
        link: String,
    },

    /// Check a timestamp against a video duration without contacting the backend
    Validate {
        /// Timestamp to check (HH:MM:SS or MM:SS)
        timestamp: String,

        /// Duration of the video (HH:MM:SS or MM:SS)
        #[arg(short, long)]
        duration: String,
    },

    /// Extract the code shown in a video at a timestamp
    Fetch {
        /// Video link
        link: String,

        /// Timestamp of the frame (HH:MM:SS or MM:SS)
        timestamp: String,

        /// Override the backend endpoint from the config
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Generate shell completions for framecode
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// framecode - extract code from programming videos
#[derive(Parser, Debug)]
#[command(name = "framecode")]
#[command(version)]
#[command(about = "Validate video timestamps and extract code from video frames")]
#[command(long_about = "framecode resolves a video link, checks a timestamp against the video's
duration and asks the frame backend for the code visible at that moment.

EXAMPLES:
    framecode id https://youtu.be/dQw4w9WgXcQ
    framecode validate 00:05:61 --duration 00:05:30
    framecode fetch https://www.youtube.com/watch?v=dQw4w9WgXcQ 02:15
    framecode completions bash > framecode.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file doesn't exist,
    a default one is created the first time the backend is needed.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    // @initializes: Global logger
    //
    // `ceiling` bounds what this logger will ever print; `log::set_max_level`
    // adjusts the active level below it, from the CLI or the config file.
    fn init(ceiling: LevelFilter, initial: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger::new(ceiling)))?;
        log::set_max_level(initial.min(ceiling));
        Ok(())
    }

    // @returns: ANSI colour for level
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
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
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

#[tokio::main]
async fn main() -> Result<()> {
    CustomLogger::init(LevelFilter::Trace, LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        log::set_max_level(LogLevel::from(level.clone()).to_level_filter());
    }

    let result = match cli.command {
        Commands::Id { link } => run_id(&link),
        Commands::Validate { timestamp, duration } => run_validate(&timestamp, &duration),
        Commands::Fetch {
            link,
            timestamp,
            endpoint,
        } => run_fetch(&cli.config_path, cli.log_level.is_some(), &link, &timestamp, endpoint).await,
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "framecode", &mut std::io::stdout());
            Ok(())
        }
    };

    Ok(result?)
}

fn run_id(link: &str) -> Result<(), AppError> {
    let id = extract_video_id(link).ok_or_else(|| AppError::UnsupportedLink(link.to_string()))?;
    println!("{}", id);
    Ok(())
}

fn run_validate(timestamp: &str, duration: &str) -> Result<(), AppError> {
    let timestamp: Timestamp = timestamp.parse()?;
    let duration: Timestamp = duration.parse()?;
    let duration = VideoDuration::new(duration.hours, duration.minutes, duration.seconds);

    report_validation(&validate_timestamp(&timestamp, &duration))?;
    println!("{} is valid", timestamp);
    Ok(())
}

fn report_validation(result: &ValidationResult) -> Result<(), AppError> {
    if result.is_valid() {
        return Ok(());
    }
    for message in result.messages() {
        println!("  - {}", message);
    }
    Err(AppError::InvalidTimestamp(result.issues().len()))
}

async fn run_fetch(
    config_path: &str,
    log_level_from_cli: bool,
    link: &str,
    timestamp: &str,
    endpoint: Option<String>,
) -> Result<(), AppError> {
    let timestamp: Timestamp = timestamp.parse()?;

    let mut config = Config::load_or_create(config_path).map_err(AppError::config)?;
    if let Some(endpoint) = endpoint {
        config.backend.endpoint = endpoint;
    }
    config
        .validate()
        .context("Configuration validation failed")
        .map_err(AppError::config)?;

    if !log_level_from_cli {
        log::set_max_level(config.log_level.to_level_filter());
    }
    debug!("Using backend {}", config.backend.endpoint);

    let source = HttpFrameSource::from_config(&config.backend)?;
    let controller = Controller::new(source);

    let video_id = controller
        .inspect_link(link)
        .ok_or_else(|| AppError::UnsupportedLink(link.to_string()))?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Loading video {}...", video_id));

    let video = match controller.load_video(video_id).await {
        Ok(video) => video,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };

    if let ValidationResult::Invalid(issues) = controller.check_timestamp(&timestamp, &video) {
        spinner.finish_and_clear();
        return report_validation(&ValidationResult::Invalid(issues));
    }

    spinner.set_message(format!("Extracting frame at {}...", timestamp));
    let outcome = controller.fetch(video_id, &timestamp).await;
    spinner.finish_and_clear();

    match outcome? {
        ExtractionOutcome::Extracted(frame) => {
            let code = if frame.formatted_code.trim().is_empty() {
                &frame.extracted_code
            } else {
                &frame.formatted_code
            };
            println!("{}", code.trim_end());
            Ok(())
        }
        ExtractionOutcome::Failed(payload) => Err(FrameError::Rejected(payload).into()),
        ExtractionOutcome::UnsupportedLink => Err(AppError::UnsupportedLink(link.to_string())),
        ExtractionOutcome::InvalidTimestamp(issues) => Err(AppError::InvalidTimestamp(issues.len())),
    }
}

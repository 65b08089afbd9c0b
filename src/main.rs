// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error};

use scriptpulse::engine_config::EngineConfig;
use scriptpulse::pipeline::analyze_script;

/// CLI wrapper for log levels to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// ScriptPulse - structural strain analysis for screenplays
///
/// Reads a plain-text screenplay, runs the deterministic analysis pipeline,
/// and prints one alert message per flagged scene.
#[derive(Parser, Debug)]
#[command(name = "scriptpulse")]
#[command(version)]
#[command(about = "Deterministic structural-strain analysis for screenplay text")]
#[command(long_about = "ScriptPulse segments a screenplay into scenes, extracts structural
features, and flags scenes under sustained structural pressure.

EXAMPLES:
    scriptpulse screenplay.txt                 # Print alert messages
    scriptpulse - < screenplay.txt             # Read the script from stdin
    scriptpulse --dump-analysis screenplay.txt # Emit all artifacts as JSON
    scriptpulse --log-level debug screenplay.txt")]
struct CommandLineOptions {
    /// Screenplay text file to analyze, or '-' for stdin
    #[arg(value_name = "SCRIPT_PATH")]
    script_path: PathBuf,

    /// Emit the full analysis (features, signals, probabilities) as JSON
    /// instead of plain alert messages
    #[arg(short, long)]
    dump_analysis: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// Minimal stderr logger; stdout stays reserved for pipeline output
struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(StderrLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let tag = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARN",
                Level::Info => "INFO",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };
            let _ = writeln!(std::io::stderr(), "{:5} {}", tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn read_script_lines(path: &PathBuf) -> Result<Vec<String>> {
    let text = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read script from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read script file: {:?}", path))?
    };
    Ok(text.lines().map(str::to_string).collect())
}

fn main() -> Result<()> {
    let cli = CommandLineOptions::parse();

    let level = cli.log_level.map_or(LevelFilter::Warn, LevelFilter::from);
    StderrLogger::init(level)?;

    let lines = read_script_lines(&cli.script_path)?;
    let config = EngineConfig::default();

    let analysis = match analyze_script(&lines, &config) {
        Ok(analysis) => analysis,
        Err(e) => {
            error!("Analysis failed: {}", e);
            return Err(e.into());
        }
    };

    if cli.dump_analysis {
        let json = serde_json::to_string_pretty(&analysis)
            .context("Failed to serialize analysis")?;
        println!("{}", json);
    } else {
        for message in &analysis.messages {
            println!("{}", message);
        }
    }

    Ok(())
}

use clap::Parser;
use colored::Colorize;
use parking_core::{run, InterpreterConfig, InvalidCommandPolicy, RunReport};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// parking - interactive parking lot interpreter
///
/// Reads one command per line from FILE (or stdin) and prints each response.
#[derive(Parser)]
#[command(name = "parking", version, about, long_about = None)]
struct Cli {
    /// Command script to read instead of stdin
    file: Option<PathBuf>,

    /// Stop at the first unparseable command once a lot exists
    #[arg(long)]
    strict: bool,

    /// JSON interpreter configuration
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the transition log as JSON on exit
    #[arg(long, value_name = "PATH")]
    transcript: Option<PathBuf>,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> parking_core::Result<InterpreterConfig> {
    let config = match &cli.config {
        Some(path) => InterpreterConfig::load(path)?,
        None => InterpreterConfig::default(),
    };
    let record_log = config.record_log || cli.transcript.is_some();
    let config = config.with_record_log(record_log);
    Ok(if cli.strict {
        config.with_policy(InvalidCommandPolicy::Terminate)
    } else {
        config
    })
}

fn write_transcript(path: &Path, report: &RunReport) -> parking_core::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(parking_core::Error::config)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn execute(cli: &Cli) -> parking_core::Result<RunReport> {
    let config = load_config(cli)?;
    let stdout = io::stdout();

    let report = match &cli.file {
        Some(path) => {
            let file = File::open(path)?;
            run(BufReader::new(file), stdout.lock(), &config)?
        }
        None => run(io::stdin().lock(), stdout.lock(), &config)?,
    };

    if let Some(path) = &cli.transcript {
        write_transcript(path, &report)?;
    }
    Ok(report)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match execute(&cli) {
        Ok(report) => {
            tracing::debug!(termination = ?report.termination, "done");
            0
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            2
        }
    };

    process::exit(exit_code);
}

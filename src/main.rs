//! tandem - report the pair of employees who worked together the longest.

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use tandem::config::DEFAULT_OPEN_MARKER;
use tandem::{load_assignments, Analysis, Config, OutputFormat, Roster, Summary, TextReport};

/// Find the pair of employees who worked together on common projects
/// for the longest time.
#[derive(Debug, Parser)]
#[command(name = "tandem")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Comma-separated input: EmpID, ProjectID, DateFrom, DateTo
    input: PathBuf,

    /// Skip the first non-blank line of input
    #[arg(long)]
    header: bool,

    /// Date that still-running assignments end on (YYYY-MM-DD, defaults to today)
    #[arg(long, env = "TANDEM_TODAY", value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// DateTo value meaning "still running"; may be repeated
    #[arg(long = "open-marker", value_name = "TEXT", default_value = DEFAULT_OPEN_MARKER)]
    open_markers: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, env = "TANDEM_FORMAT", default_value_t = CliFormat::Text)]
    format: CliFormat,

    /// Only print the pair that worked together the longest
    #[arg(long)]
    summary: bool,

    /// More logging (repeat for more)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliFormat {
    /// Human readable report
    Text,
    /// JSON document
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, tandem::config::DATE_FORMAT)
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn config(&self) -> Config {
        Config {
            header: self.header,
            open_markers: self.open_markers.clone(),
            today: self.today,
            format: self.format.into(),
            summary_only: self.summary,
        }
    }
}

fn init_logging(level: Level) {
    // RUST_LOG wins over the command line flags.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn render(analysis: &Analysis, config: &Config) -> anyhow::Result<String> {
    match config.format {
        OutputFormat::Text if config.summary_only => Ok(Summary(analysis.longest()).to_string()),
        OutputFormat::Text => Ok(TextReport(analysis).to_string()),
        #[cfg(feature = "serde1")]
        OutputFormat::Json => {
            let mut json = tandem::to_json(analysis, config.summary_only)
                .map_err(tandem::Error::from)?;
            json.push('\n');
            Ok(json)
        }
        #[cfg(not(feature = "serde1"))]
        OutputFormat::Json => anyhow::bail!("JSON output requires the `serde1` feature"),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config();

    let assignments = load_assignments(&cli.input, &config)
        .with_context(|| format!("could not read assignments from {}", cli.input.display()))?;
    let roster: Roster = assignments.into_iter().collect();
    let analysis = Analysis::run(roster);

    print!("{}", render(&analysis, &config)?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

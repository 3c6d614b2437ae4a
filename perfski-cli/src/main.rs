//! perfski CLI - print, export and report one generated session.
//!
//! Commands:
//! - `table` - print the record table
//! - `describe` - print summary statistics
//! - `rank` - print skiers by average speed
//! - `show <NAME>` - print one skier's detail
//! - `export` - write the records as CSV or JSON
//! - `report` - write the Markdown session report

mod format;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use perfski_core::{Session, SessionConfig};
use perfski_report::{
    export_csv, export_json, DatasetExport, DownloadArtifact, MarkdownReport, CSV_FILE_NAME,
    REPORT_FILE_NAME,
};

/// Output path meaning "write to stdout".
const STDOUT: &str = "-";

#[derive(Parser)]
#[command(
    name = "perfski",
    about = "perfski - synthetic skier performance analysis",
    version
)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the generator seed.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Override the number of skiers.
    #[arg(long, global = true)]
    count: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every record, column maxima marked with `*`.
    Table,
    /// Print count, mean, std, min, quartiles and max per field.
    Describe,
    /// Print skiers by average speed, fastest first.
    Rank,
    /// Print the detail of one skier.
    Show {
        /// Skier name, e.g. Skieur_3.
        name: String,
    },
    /// Write the records as CSV (default) or JSON.
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file, or `-` for stdout. Defaults to the configured output directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write the Markdown session report.
    Report {
        /// Append the detail section for this skier.
        #[arg(long)]
        skier: Option<String>,

        /// Output file, or `-` for stdout. Defaults to the configured output directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(err) = init_logging() {
        eprintln!("warning: logging disabled: {err}");
    }

    let config = SessionConfig::resolve(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(cli.seed, cli.count)
        .context("invalid command-line override")?;
    let session = Session::start(config).context("failed to start session")?;

    match cli.command {
        Commands::Table => print!("{}", format::records_table(session.records())),
        Commands::Describe => print!("{}", format::describe_table(&session.describe())),
        Commands::Rank => print!("{}", format::ranking_table(&session.ranking())),
        Commands::Show { name } => run_show(&session, &name)?,
        Commands::Export { format, out } => run_export(&session, format, out)?,
        Commands::Report { skier, out } => run_report(&session, skier.as_deref(), out)?,
    }
    Ok(())
}

/// Logs go to stderr so stdout stays clean for data.
///
/// Fails when a global subscriber is already installed.
fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

fn run_show(session: &Session, name: &str) -> Result<()> {
    let Some(detail) = session.detail(name) else {
        bail!(
            "unknown skier '{name}'. Valid names: {}",
            session.records().names().collect::<Vec<_>>().join(", ")
        );
    };
    print!("{}", format::detail_text(&detail));
    Ok(())
}

fn run_export(session: &Session, format: ExportFormat, out: Option<PathBuf>) -> Result<()> {
    let records = session.records();
    match (format, out) {
        // The default CSV target is the download artifact itself.
        (ExportFormat::Csv, None) => {
            let path = DownloadArtifact::csv(records)?.save(&session.config().export.output_dir)?;
            println!("Exported {} records to: {}", records.len(), path.display());
        }
        (ExportFormat::Csv, Some(out)) => write_output(&out, &export_csv(records)?)?,
        (ExportFormat::Json, out) => {
            let export = DatasetExport::new(&session.config().generator, records);
            let json = export_json(&export)?;
            let out = out.unwrap_or_else(|| {
                session
                    .config()
                    .export
                    .output_dir
                    .join(Path::new(CSV_FILE_NAME).with_extension("json"))
            });
            write_output(&out, &json)?;
        }
    }
    Ok(())
}

fn run_report(session: &Session, skier: Option<&str>, out: Option<PathBuf>) -> Result<()> {
    let mut report = MarkdownReport::new(session);
    if let Some(name) = skier {
        report = report.with_skier(name);
    }
    let markdown = report.generate()?;
    let out = out.unwrap_or_else(|| session.config().export.output_dir.join(REPORT_FILE_NAME));
    write_output(&out, &markdown)
}

/// Write `content` to `out`, or to stdout when `out` is `-`.
fn write_output(out: &Path, content: &str) -> Result<()> {
    if out == Path::new(STDOUT) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(out, content).with_context(|| format!("failed to write {}", out.display()))?;
    tracing::info!(path = %out.display(), bytes = content.len(), "output written");
    println!("Written to: {}", out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_global_overrides() {
        let cli = Cli::try_parse_from(["perfski", "rank", "--seed", "7", "--count", "3"]).unwrap();
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.count, Some(3));
        assert!(matches!(cli.command, Commands::Rank));
    }

    #[test]
    fn export_defaults_to_csv() {
        let cli = Cli::try_parse_from(["perfski", "export"]).unwrap();
        match cli.command {
            Commands::Export { format, out } => {
                assert_eq!(format, ExportFormat::Csv);
                assert!(out.is_none());
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn second_logging_install_reports_failure() {
        let _ = init_logging();
        let err = init_logging().unwrap_err();
        assert!(err.to_string().contains("failed to install log subscriber"));
    }

    #[test]
    fn unknown_skier_is_an_error() {
        let session = Session::start(SessionConfig::default()).unwrap();
        let err = run_show(&session, "Nobody").unwrap_err();
        assert!(err.to_string().contains("Skieur_1"));
    }

    #[test]
    fn json_export_writes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let session = Session::start(SessionConfig::default()).unwrap();
        let out = tmp.path().join("nested").join("data.json");
        run_export(&session, ExportFormat::Json, Some(out.clone())).unwrap();

        let back = perfski_report::import_json(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(&back.records, session.records());
    }

    #[test]
    fn report_with_skier_writes_markdown() {
        let tmp = tempfile::tempdir().unwrap();
        let session = Session::start(SessionConfig::default()).unwrap();
        let out = tmp.path().join("r.md");
        run_report(&session, Some("Skieur_4"), Some(out.clone())).unwrap();
        let md = fs::read_to_string(out).unwrap();
        assert!(md.contains("Analyse détaillée pour Skieur_4"));
    }
}

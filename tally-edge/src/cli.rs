//! # Command-Line Interface
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `label` | Render a catalog item's label to a file or stdout |
//! | `count` | Cycle count: read scans from stdin against an expected list |
//!
//! In `count`, each stdin line is one delivery; a line holding several
//! whitespace separated codes is a multi-barcode batch.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use shared::{ScanDelivery, ScanEvent};
use tally_printer::{FileSink, MemorySink};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::core::{Config, EdgeError};
use crate::counting::{
    CycleCountSession, FeedbackTable, ScanNotice, WorkerOptions, spawn_cycle_count,
};
use crate::labels::{Catalog, LabelCompiler, LabelPrinter};

#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "Inventory labels and cycle counts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a label for one catalog item
    Label {
        /// JSON array of inventory items
        #[arg(long)]
        catalog: PathBuf,

        /// Item identifier
        #[arg(long)]
        id: String,

        /// Quantity printed on the label
        #[arg(long, default_value_t = 1)]
        qty: u32,

        /// Date stamp (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Append the label to this file instead of writing to stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run a cycle count against an expected list (one code per line)
    Count {
        #[arg(long)]
        expected: PathBuf,

        /// Drop audio cues from feedback
        #[arg(long)]
        silent: bool,

        /// Emit notices as JSON lines
        #[arg(long)]
        json: bool,
    },
}

/// Machine-readable kind of a command failure, `other` when it did not come from the edge crate
pub fn error_kind(error: &anyhow::Error) -> &'static str {
    error.downcast_ref::<EdgeError>().map_or("other", EdgeError::kind)
}

/// Execute a parsed command
pub async fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    match cli.command {
        Commands::Label {
            catalog,
            id,
            qty,
            date,
            output,
        } => print_label(config, &catalog, &id, qty, date, output).await,
        Commands::Count {
            expected,
            silent,
            json,
        } => cycle_count(config, &expected, silent, json).await,
    }
}

async fn print_label(
    config: &Config,
    catalog: &Path,
    id: &str,
    qty: u32,
    date: Option<NaiveDate>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let catalog = Catalog::from_json_file(catalog).context("loading catalog")?;
    let compiler = LabelCompiler::new(config.load_layout()?);
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    match output {
        Some(path) => {
            let printer = LabelPrinter::new(compiler, config.label_language, FileSink::new(&path)?);
            let bytes = printer.print_by_id(&catalog, id, qty, date).await?;
            eprintln!("Wrote {} bytes to {}", bytes, path.display());
        }
        None => {
            let printer = LabelPrinter::new(compiler, config.label_language, MemorySink::new());
            printer.print_by_id(&catalog, id, qty, date).await?;
            let mut stdout = std::io::stdout().lock();
            for job in printer.sink().jobs() {
                stdout.write_all(&job)?;
            }
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Expected list: one code per line, blank lines and `#` comments ignored
pub fn read_expected(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading expected list {}", path.display()))?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}

async fn cycle_count(config: &Config, expected: &Path, silent: bool, json: bool) -> anyhow::Result<()> {
    let expected = read_expected(expected)?;
    let feedback = if silent {
        FeedbackTable::silent()
    } else {
        config.load_feedback()?
    };
    let options = WorkerOptions {
        queue_capacity: config.scan_queue_capacity,
        debounce: config.same_code_timeout(),
    };

    let (handle, mut notices) =
        spawn_cycle_count(CycleCountSession::new(expected), feedback, options);
    let printer = tokio::spawn(async move {
        while let Some(notice) = notices.recv().await {
            print_notice(&notice, json);
        }
    });

    let sender = handle.sender();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Some(delivery) = delivery_from_line(&line, Utc::now()) {
            sender.deliver(delivery).await?;
        }
    }
    drop(sender);

    let report = handle.finish().await?;
    printer.await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// One stdin line as a delivery: one code is a single scan, several are a batch
fn delivery_from_line(line: &str, at: DateTime<Utc>) -> Option<ScanDelivery> {
    let mut events: Vec<ScanEvent> = line
        .split_whitespace()
        .map(|code| ScanEvent::new(code, at))
        .collect();
    match events.len() {
        0 => None,
        1 => events.pop().map(ScanDelivery::Single),
        _ => Some(ScanDelivery::Batch(events)),
    }
}

fn print_notice(notice: &ScanNotice, json: bool) {
    if json {
        if let Ok(line) = serde_json::to_string(notice) {
            println!("{}", line);
        }
        return;
    }
    println!(
        "{}\t{}\t{}/{}",
        notice.code, notice.outcome, notice.progress.scanned, notice.progress.total
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_read_expected_skips_blanks_and_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expected.txt");
        std::fs::write(&path, "# aisle 12\nGMS-1001\n\n  \n  GMS-2002  \n#GMS-9\n").unwrap();
        assert_eq!(read_expected(&path).unwrap(), ["GMS-1001", "GMS-2002"]);
    }

    #[test]
    fn test_read_expected_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_expected(&dir.path().join("absent.txt")).is_err());
    }

    #[test]
    fn test_one_code_is_single_scan() {
        let at = Utc::now();
        match delivery_from_line("  GMS-1001 ", at) {
            Some(ScanDelivery::Single(event)) => {
                assert_eq!(event.code, "GMS-1001");
                assert_eq!(event.timestamp, at);
            }
            other => panic!("expected single scan, got {:?}", other),
        }
    }

    #[test]
    fn test_several_codes_are_one_batch() {
        let events = match delivery_from_line("A\tB  A", Utc::now()) {
            Some(ScanDelivery::Batch(events)) => events,
            other => panic!("expected batch, got {:?}", other),
        };
        let codes: Vec<_> = events.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["A", "B", "A"]);
    }

    #[test]
    fn test_blank_line_is_skipped() {
        assert!(delivery_from_line("", Utc::now()).is_none());
        assert!(delivery_from_line(" \t ", Utc::now()).is_none());
    }

    #[test]
    fn test_error_kind() {
        let err = anyhow::Error::from(EdgeError::UnknownItem("GMS-1".into()));
        assert_eq!(error_kind(&err), "not_found");

        let err = Err::<(), _>(EdgeError::Config("bad layout".into()))
            .context("loading layout")
            .unwrap_err();
        assert_eq!(error_kind(&err), "config_error");

        assert_eq!(error_kind(&anyhow!("boom")), "other");
    }
}

//! CLI command for data export
//!
//! Writes the ledger to a file, or to stdout when no file is given.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{csv, json};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full ledger)
    Json,
    /// CSV format (one record kind)
    Csv,
}

/// Record kind written by a CSV export
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CsvKind {
    Accounts,
    Expenses,
    Revenues,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Record kind for CSV output
    #[arg(short, long, value_enum, default_value = "accounts")]
    pub kind: CsvKind,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> LedgerResult<()> {
    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    match args.format {
        ExportFormat::Json => {
            json::export_full_json(storage, &mut writer, args.pretty)?;
            writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
        }
        ExportFormat::Csv => match args.kind {
            CsvKind::Accounts => csv::export_accounts_csv(storage, &mut writer)?,
            CsvKind::Expenses => csv::export_expenses_csv(storage, &mut writer)?,
            CsvKind::Revenues => csv::export_revenues_csv(storage, &mut writer)?,
        },
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    if let Some(path) = &args.output {
        tracing::info!(path = %path.display(), "ledger exported");
        eprintln!("Exported to: {}", path.display());
    }

    Ok(())
}

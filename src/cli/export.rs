//! CLI command for data export
//!
//! Writes one group, or all of them, as JSON, YAML, CSV or a text summary
//! to a file or standard output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display::generate_summary_text;
use crate::error::{SettleError, SettleResult};
use crate::export::{export_json, export_shares_csv, export_yaml, FullExport};
use crate::services::balance::member_summaries;
use crate::services::settlement::group_settlements;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full data)
    Json,
    /// YAML format (full data, human-readable)
    Yaml,
    /// CSV format (one row per participant share)
    Csv,
    /// Plain-text summary for sharing
    Summary,
}

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Group name or ID
    #[arg(required_unless_present = "all")]
    pub group: Option<String>,

    /// Export every group
    #[arg(long, conflicts_with = "group")]
    pub all: bool,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (defaults to standard output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

fn open_output(output: Option<&PathBuf>) -> SettleResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SettleError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> SettleResult<()> {
    let service = LedgerService::new(storage, settings);

    let groups = match (&args.group, args.all) {
        (_, true) => service.list_groups()?,
        (Some(identifier), false) => vec![service.resolve_group(identifier)?],
        (None, false) => {
            return Err(SettleError::Validation(
                "Name a group to export or pass --all".into(),
            ))
        }
    };

    let mut writer = open_output(args.output.as_ref())?;

    match args.format {
        ExportFormat::Json => {
            export_json(&FullExport::new(groups), &mut writer, args.pretty)?;
            writeln!(writer)?;
        }
        ExportFormat::Yaml => export_yaml(&FullExport::new(groups), &mut writer)?,
        ExportFormat::Csv => export_shares_csv(&groups, &mut writer)?,
        ExportFormat::Summary => {
            for (i, group) in groups.iter().enumerate() {
                if i > 0 {
                    writeln!(writer)?;
                }
                let text = generate_summary_text(
                    group,
                    &member_summaries(group),
                    &group_settlements(group),
                    &settings.currency_symbol,
                );
                writer.write_all(text.as_bytes())?;
            }
        }
    }

    writer.flush()?;

    if let Some(path) = &args.output {
        eprintln!("Exported to: {}", path.display());
    }

    Ok(())
}

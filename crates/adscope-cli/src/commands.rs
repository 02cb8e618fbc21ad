//! Command implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::info;

use adscope_core::Analyzer;
use adscope_ingest::parse_report;
use adscope_model::{AnalysisReport, Column, ParseError, ReportSchema};

use crate::cli::{AnalyzeArgs, OutputFormatArg};
use crate::render::render_report;

/// Result of an `analyze` run that did not hit an I/O failure.
#[derive(Debug)]
pub enum AnalyzeOutcome {
    /// The report parsed and was analyzed.
    Report(Box<AnalysisReport>),
    /// The engine rejected the input (taxonomy in [`ParseError`]).
    Rejected(ParseError),
}

/// Read, parse and analyze one report file, emitting the result in the
/// requested format.
///
/// Engine-level rejection is not an `Err`: it is a regular outcome the
/// caller maps to its own exit code. `Err` is reserved for I/O failures
/// (unreadable input, unwritable output).
pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeOutcome> {
    let raw = fs::read_to_string(&args.report_file)
        .with_context(|| format!("read report: {}", args.report_file.display()))?;
    // The engine expects BOM stripping to have happened at this boundary.
    let text = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    let table = match parse_report(text) {
        Ok(table) => table,
        Err(error) => return Ok(AnalyzeOutcome::Rejected(error)),
    };
    info!(
        schema = %table.schema,
        rows = table.row_count(),
        dropped = table.dropped_rows,
        "report parsed"
    );

    let report = Analyzer::default().analyze(&table);

    let rendered = match args.format {
        OutputFormatArg::Table => render_report(&report),
        OutputFormatArg::Json => {
            let mut json =
                serde_json::to_string_pretty(&report).context("serialize analysis report")?;
            json.push('\n');
            json
        }
    };
    emit(&rendered, args.output.as_deref())?;

    Ok(AnalyzeOutcome::Report(Box::new(report)))
}

fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("write output: {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}

/// List the supported report layouts and their declared columns.
pub fn run_schemas() {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table.set_header(vec!["Schema", "Description", "Declared columns"]);
    for schema in ReportSchema::ALL {
        let columns: Vec<String> = schema
            .declared_columns()
            .iter()
            .map(Column::canonical_name)
            .collect();
        table.add_row(vec![
            schema.as_str().to_string(),
            schema.label().to_string(),
            columns.join(", "),
        ]);
    }
    println!("{table}");
}

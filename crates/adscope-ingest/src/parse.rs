//! Report parsing: raw text to a classified, typed [`ParsedTable`].

use csv::ReaderBuilder;
use tracing::debug;

use adscope_model::{ParseError, ParsedTable, Record};

use crate::classify::classify;
use crate::delimiter::detect_delimiter;
use crate::header::map_header;
use crate::value::parse_cell;

/// Collapse `\r\n` and bare `\r` terminators to `\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Parse a report export into a typed table.
///
/// The pipeline is strictly sequential: line scan, delimiter detection,
/// header mapping, schema classification, row ingestion. Rows whose field
/// count differs from the header are dropped silently; a partial result is
/// always preferred over a total failure.
///
/// # Errors
///
/// - [`ParseError::TooFewLines`] when fewer than two non-blank lines exist.
/// - [`ParseError::UnrecognizedSchema`] when no schema reaches the
///   column-match threshold.
/// - [`ParseError::EmptyDataset`] when the schema is recognized but no row
///   survives column-count validation.
pub fn parse_report(text: &str) -> Result<ParsedTable, ParseError> {
    let normalized = normalize_newlines(text);

    let mut non_blank = normalized.lines().filter(|line| !line.trim().is_empty());
    let Some(header_line) = non_blank.next() else {
        return Err(ParseError::TooFewLines);
    };
    if non_blank.next().is_none() {
        return Err(ParseError::TooFewLines);
    }

    let delimiter = detect_delimiter(header_line);
    let delimiter_char = char::from(delimiter);
    debug!(delimiter = %delimiter_char, "detected field delimiter");

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(normalized.as_bytes());

    let mut raw_headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        // Hard reader failures are treated like malformed rows: the parse
        // keeps whatever was readable.
        let Ok(record) = result else {
            continue;
        };
        let row: Vec<String> = record.iter().map(|cell| cell.trim().to_string()).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        if raw_headers.is_none() {
            raw_headers = Some(row);
        } else {
            rows.push(row);
        }
    }
    let raw_headers = raw_headers.ok_or(ParseError::TooFewLines)?;

    let columns: Vec<_> = raw_headers.iter().map(|token| map_header(token)).collect();
    let Some(schema) = classify(&columns) else {
        return Err(ParseError::UnrecognizedSchema {
            headers: raw_headers,
        });
    };
    debug!(schema = %schema, columns = columns.len(), "classified report");

    let mut records = Vec::with_capacity(rows.len());
    let mut dropped_rows = 0usize;
    for (index, row) in rows.iter().enumerate() {
        if row.len() != columns.len() {
            dropped_rows += 1;
            debug!(
                row = index + 1,
                expected = columns.len(),
                found = row.len(),
                "dropping row with column-count mismatch"
            );
            continue;
        }
        let mut record = Record::new();
        for (column, cell) in columns.iter().zip(row) {
            record.insert(column.clone(), parse_cell(cell, column.role()));
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(ParseError::EmptyDataset);
    }
    debug!(
        rows = records.len(),
        dropped = dropped_rows,
        "ingested report rows"
    );

    Ok(ParsedTable {
        schema,
        columns,
        records,
        dropped_rows,
    })
}

#[cfg(test)]
mod tests {
    use adscope_model::{Column, ReportSchema};

    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        let text = "\n\nCampaign,Cost,Conversions,Conv. value\n\nBrand,100,1,50\n\n";
        let table = parse_report(text).expect("parse");
        assert_eq!(table.schema, ReportSchema::Campaign);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn carriage_return_terminators_are_accepted() {
        let text = "Campaign,Cost,Conversions,Conv. value\rBrand,100,1,50\rGeneric,200,0,0\r";
        let table = parse_report(text).expect("parse");
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn mismatched_rows_are_dropped_not_fatal() {
        // The second data row splits into five fields against a four-field
        // header because its cost cell is not quoted.
        let text = "\
Campaign,Cost,Conversions,Conv. value
Brand,100,1,50
Generic,1.234,56,0,0
";
        let table = parse_report(text).expect("parse");
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.dropped_rows, 1);
    }

    #[test]
    fn quoted_cells_keep_embedded_delimiters() {
        let text = "Campaign,Cost,Conversions,Conv. value\n\"Brand, DE\",\"1.234,56\",2,80\n";
        let table = parse_report(text).expect("parse");
        assert_eq!(table.row_count(), 1);
        let record = &table.records[0];
        assert_eq!(record.text(&Column::Campaign), Some("Brand, DE"));
        assert_eq!(record.number(&Column::Cost), Some(1234.56));
    }
}

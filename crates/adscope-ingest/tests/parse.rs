//! End-to-end parsing tests over realistic report exports.

use adscope_ingest::parse_report;
use adscope_model::{Column, ParseError, ReportSchema};

const GERMAN_KEYWORD_REPORT: &str = "\
Kampagne;Anzeigengruppe;Keyword;Keyword-Option;Klicks;Kosten;Conversions
Brand DE;Schuhe;laufschuhe kaufen;Genau passend;120;1.234,56;4
Brand DE;Schuhe;schuhe günstig;Weitgehend passend;80;890,00;0
Brand DE;Taschen;ledertasche;Passende Wortgruppe;40;450,50;2
";

#[test]
fn german_semicolon_report_parses_as_keyword() {
    let table = parse_report(GERMAN_KEYWORD_REPORT).expect("parse");
    assert_eq!(table.schema, ReportSchema::Keyword);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.dropped_rows, 0);

    let first = &table.records[0];
    assert_eq!(first.text(&Column::Keyword), Some("laufschuhe kaufen"));
    assert_eq!(first.text(&Column::MatchType), Some("Genau passend"));
    assert_eq!(first.number(&Column::Cost), Some(1234.56));
    assert_eq!(first.number(&Column::Clicks), Some(120.0));
}

#[test]
fn row_count_excludes_column_count_mismatches() {
    let text = "\
Search term,Impressions,Cost,Clicks,Conversions
cheap shoes,1000,120,12,0
broken row,1000,120
running shoes,2000,300,25,3
";
    let table = parse_report(text).expect("parse");
    assert_eq!(table.schema, ReportSchema::SearchTerms);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.dropped_rows, 1);
}

#[test]
fn missing_placeholders_become_null_cells() {
    let text = "\
Search term,Impressions,Cost,Clicks,Conversions
cheap shoes,1000,--,12,
";
    let table = parse_report(text).expect("parse");
    let record = &table.records[0];
    assert_eq!(record.number(&Column::Cost), None);
    assert_eq!(record.number(&Column::Conversions), None);
    assert_eq!(record.metric(&Column::Cost), 0.0);
}

#[test]
fn single_line_input_is_too_few_lines() {
    let result = parse_report("Campaign,Cost,Conversions,Conv. value\n");
    assert_eq!(result.unwrap_err(), ParseError::TooFewLines);
}

#[test]
fn empty_input_is_too_few_lines() {
    assert_eq!(parse_report("").unwrap_err(), ParseError::TooFewLines);
    assert_eq!(parse_report("\n\n  \n").unwrap_err(), ParseError::TooFewLines);
}

#[test]
fn unrecognized_layout_reports_detected_headers() {
    let text = "Date,Device,Network\n2024-01-01,Mobile,Search\n";
    match parse_report(text).unwrap_err() {
        ParseError::UnrecognizedSchema { headers } => {
            assert_eq!(headers, vec!["Date", "Device", "Network"]);
        }
        other => panic!("expected UnrecognizedSchema, got {other:?}"),
    }
}

#[test]
fn recognized_schema_with_no_surviving_rows_is_empty_dataset() {
    let text = "\
Campaign,Cost,Conversions,Conv. value
only,three,fields
";
    assert_eq!(parse_report(text).unwrap_err(), ParseError::EmptyDataset);
}

#[test]
fn parse_is_deterministic() {
    let first = parse_report(GERMAN_KEYWORD_REPORT).expect("parse");
    let second = parse_report(GERMAN_KEYWORD_REPORT).expect("parse");
    assert_eq!(first.schema, second.schema);
    assert_eq!(first.columns, second.columns);
    assert_eq!(first.records.len(), second.records.len());
    for (a, b) in first.records.iter().zip(&second.records) {
        assert_eq!(a.cells, b.cells);
    }
}

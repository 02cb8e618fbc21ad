//! Per-schema analyzers.
//!
//! Each analyzer is a pure function of the record sequence; ranking uses
//! stable sorts so ties keep original record order.

mod ad;
mod campaign;
mod keyword;
mod search_terms;

use adscope_model::{Analysis, ParsedTable, ReportSchema};

use crate::config::AnalyzerConfig;

/// Run the analyzer matching the table's schema.
pub fn analyze(table: &ParsedTable, config: &AnalyzerConfig) -> Analysis {
    match table.schema {
        ReportSchema::Campaign => Analysis::Campaign(campaign::analyze(&table.records, config)),
        ReportSchema::Ad => Analysis::Ad(ad::analyze(&table.records, config)),
        ReportSchema::Keyword => Analysis::Keyword(keyword::analyze(&table.records, config)),
        ReportSchema::SearchTerms => {
            Analysis::SearchTerms(search_terms::analyze(&table.records, config))
        }
    }
}

//! The analysis engine facade.

use tracing::debug;

use adscope_model::{AnalysisReport, ParsedTable};

use crate::analyzers;
use crate::config::AnalyzerConfig;
use crate::recommend::synthesize;
use crate::summary::summarize;

/// Runs the full analysis pipeline over a parsed table.
///
/// The engine is a pure function of its input plus the configuration it was
/// constructed with: no state survives between calls, and two invocations on
/// the same table produce identical reports. Independent engines may run
/// concurrently without coordination.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Aggregate, analyze and synthesize recommendations for one report.
    pub fn analyze(&self, table: &ParsedTable) -> AnalysisReport {
        let summary = summarize(&table.records);
        let analysis = analyzers::analyze(table, &self.config);
        let recommendations = synthesize(&analysis, &self.config);
        debug!(
            schema = %table.schema,
            rows = table.row_count(),
            recommendations = recommendations.len(),
            "analysis complete"
        );
        AnalysisReport {
            report_type: table.schema,
            row_count: table.row_count(),
            summary,
            analysis,
            recommendations,
        }
    }
}

/// Analyze with the default configuration.
pub fn analyze_report(table: &ParsedTable) -> AnalysisReport {
    Analyzer::default().analyze(table)
}

use thiserror::Error;

/// Parse rejection taxonomy. Malformed individual rows are not represented
/// here: column-count mismatches drop the row and never fail the parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Fewer than two non-blank lines: there is no header/data split to work with.
    #[error("report requires a header row and at least one data row")]
    TooFewLines,

    /// No schema reached the column-match threshold.
    #[error("unrecognized report layout (detected headers: {})", .headers.join(", "))]
    UnrecognizedSchema { headers: Vec<String> },

    /// Schema recognized, but every data row was discarded by column-count
    /// validation.
    #[error("no data rows matched the detected column layout")]
    EmptyDataset,
}

pub type Result<T> = std::result::Result<T, ParseError>;

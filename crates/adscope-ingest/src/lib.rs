#![deny(unsafe_code)]

//! Report ingestion.
//!
//! Turns a raw exported report (delimiter-separated text with locale-variant
//! headers and number formats) into a classified [`adscope_model::ParsedTable`].

pub mod classify;
pub mod delimiter;
pub mod header;
pub mod parse;
pub mod value;

pub use classify::{classify, match_count};
pub use delimiter::{DELIMITER_CANDIDATES, detect_delimiter};
pub use header::map_header;
pub use parse::parse_report;
pub use value::parse_cell;

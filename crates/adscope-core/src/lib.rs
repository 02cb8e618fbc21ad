#![deny(unsafe_code)]

//! Analysis engine for advertising performance reports.
//!
//! Consumes a classified [`adscope_model::ParsedTable`], aggregates summary
//! metrics, runs the schema-specific analyzer and synthesizes a prioritized
//! recommendation list. Everything here is deterministic, rule-based
//! computation over the in-memory record sequence.

pub mod analyzers;
pub mod config;
pub mod engine;
pub mod recommend;
pub mod summary;

pub use config::AnalyzerConfig;
pub use engine::{Analyzer, analyze_report};
pub use recommend::format_amount;
pub use summary::summarize;

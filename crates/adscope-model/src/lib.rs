#![deny(unsafe_code)]

pub mod column;
pub mod error;
pub mod report;
pub mod schema;
pub mod table;

pub use column::{Column, ValueRole};
pub use error::{ParseError, Result};
pub use report::{
    AdAnalysis, AdPerformance, Analysis, AnalysisReport, CampaignAnalysis, CampaignOffender,
    CampaignPerformer, KeywordAnalysis, KeywordPerformer, KeywordSpend, MatchTypeStats,
    NegativeKeywordIdea, Recommendation, RecommendationKind, SearchTermPerformer,
    SearchTermSpend, SearchTermsAnalysis, Summary,
};
pub use schema::ReportSchema;
pub use table::{CellValue, ParsedTable, Record};

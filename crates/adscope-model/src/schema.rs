//! Report schema declarations and classification order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::column::Column;

/// The report layouts the engine understands.
///
/// Classification walks [`ReportSchema::ALL`] in declaration order and picks
/// the first schema whose declared columns reach [`ReportSchema::MATCH_THRESHOLD`]
/// matches against the mapped header set. The order is load-bearing: a header
/// matching two schemas resolves to the earlier-declared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSchema {
    Campaign,
    Ad,
    Keyword,
    SearchTerms,
}

// Campaign declares only two columns shared with keyword/search-term
// exports (Campaign, Cost); the rest are campaign-report-specific so that
// keyword reports carrying campaign context never reach the threshold here.
const CAMPAIGN_COLUMNS: [Column; 5] = [
    Column::Campaign,
    Column::Budget,
    Column::Cost,
    Column::ConvValue,
    Column::SearchImprShare,
];

const AD_COLUMNS: [Column; 5] = [
    Column::AdGroup,
    Column::Headline(1),
    Column::Description,
    Column::Ctr,
    Column::Impressions,
];

const KEYWORD_COLUMNS: [Column; 6] = [
    Column::Keyword,
    Column::MatchType,
    Column::Campaign,
    Column::AdGroup,
    Column::Cost,
    Column::Clicks,
];

const SEARCH_TERMS_COLUMNS: [Column; 5] = [
    Column::SearchTerm,
    Column::Impressions,
    Column::Cost,
    Column::Clicks,
    Column::Conversions,
];

impl ReportSchema {
    /// Fixed classification order. Keep this an explicit list; map iteration
    /// order must never decide which schema wins.
    pub const ALL: [ReportSchema; 4] = [
        ReportSchema::Campaign,
        ReportSchema::Ad,
        ReportSchema::Keyword,
        ReportSchema::SearchTerms,
    ];

    /// Minimum number of declared columns that must appear in a header set.
    pub const MATCH_THRESHOLD: usize = 3;

    /// The canonical columns this schema declares for classification.
    pub fn declared_columns(&self) -> &'static [Column] {
        match self {
            ReportSchema::Campaign => &CAMPAIGN_COLUMNS,
            ReportSchema::Ad => &AD_COLUMNS,
            ReportSchema::Keyword => &KEYWORD_COLUMNS,
            ReportSchema::SearchTerms => &SEARCH_TERMS_COLUMNS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportSchema::Campaign => "campaign",
            ReportSchema::Ad => "ad",
            ReportSchema::Keyword => "keyword",
            ReportSchema::SearchTerms => "search_terms",
        }
    }

    /// Human-readable label for listings and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            ReportSchema::Campaign => "Campaign performance",
            ReportSchema::Ad => "Ad performance",
            ReportSchema::Keyword => "Keyword performance",
            ReportSchema::SearchTerms => "Search terms",
        }
    }
}

impl fmt::Display for ReportSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "campaign" => Ok(ReportSchema::Campaign),
            "ad" => Ok(ReportSchema::Ad),
            "keyword" => Ok(ReportSchema::Keyword),
            "search_terms" => Ok(ReportSchema::SearchTerms),
            _ => Err(format!("unknown report schema: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_is_fixed() {
        assert_eq!(
            ReportSchema::ALL,
            [
                ReportSchema::Campaign,
                ReportSchema::Ad,
                ReportSchema::Keyword,
                ReportSchema::SearchTerms,
            ]
        );
    }

    #[test]
    fn every_schema_declares_enough_columns_to_match() {
        for schema in ReportSchema::ALL {
            assert!(schema.declared_columns().len() >= ReportSchema::MATCH_THRESHOLD);
        }
    }

    #[test]
    fn schema_names_round_trip() {
        for schema in ReportSchema::ALL {
            assert_eq!(schema.as_str().parse::<ReportSchema>().unwrap(), schema);
        }
    }
}

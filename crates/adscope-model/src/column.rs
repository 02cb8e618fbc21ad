//! Canonical column vocabulary for advertising performance reports.
//!
//! Exported reports use localized, free-form header names. After header
//! mapping, every column is identified by one entry of this canonical
//! vocabulary; headers with no canonical counterpart pass through unchanged
//! as [`Column::Other`] so that already-English exports keep working.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How a column's raw cell text is coerced into a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueRole {
    /// Monetary amount in account currency ("1.234,56" style accepted).
    Currency,
    /// Percentage kept in percent units, not a fraction ("12,5%" -> 12.5).
    Percentage,
    /// Event count; fractional values are valid (attributed conversions).
    Count,
    /// Plain text, trimmed and passed through.
    Text,
}

/// A canonical report column.
///
/// Variant order also defines the ordering used for record cell maps.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Campaign,
    AdGroup,
    Keyword,
    SearchTerm,
    MatchType,
    Budget,
    Cost,
    Clicks,
    Impressions,
    Conversions,
    ConvValue,
    Ctr,
    ConvRate,
    AvgCpc,
    CostPerConv,
    SearchImprShare,
    Headline(u8),
    Description,
    FinalUrl,
    /// Identity fallback for headers outside the canonical vocabulary.
    Other(String),
}

impl Column {
    /// Parse a canonical column name (case-insensitive).
    ///
    /// Unknown names are not an error: they become [`Column::Other`] carrying
    /// the trimmed input, which keeps unmapped columns addressable downstream.
    pub fn from_canonical(name: &str) -> Self {
        let trimmed = name.trim();
        if let Some(rest) = strip_prefix_ci(trimmed, "Headline ")
            && let Ok(index) = rest.trim().parse::<u8>()
        {
            return Column::Headline(index);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "campaign" => Column::Campaign,
            "ad group" => Column::AdGroup,
            "keyword" => Column::Keyword,
            "search term" => Column::SearchTerm,
            "match type" => Column::MatchType,
            "budget" => Column::Budget,
            "cost" => Column::Cost,
            "clicks" => Column::Clicks,
            "impressions" => Column::Impressions,
            "conversions" => Column::Conversions,
            "conv. value" => Column::ConvValue,
            "ctr" => Column::Ctr,
            "conv. rate" => Column::ConvRate,
            "avg. cpc" => Column::AvgCpc,
            "cost / conv." => Column::CostPerConv,
            "search impr. share" => Column::SearchImprShare,
            "description" => Column::Description,
            "final url" => Column::FinalUrl,
            _ => Column::Other(trimmed.to_string()),
        }
    }

    /// The coercion role applied to this column's cells at ingestion.
    pub fn role(&self) -> ValueRole {
        match self {
            Column::Cost
            | Column::ConvValue
            | Column::AvgCpc
            | Column::CostPerConv
            | Column::Budget => ValueRole::Currency,
            Column::Ctr | Column::ConvRate | Column::SearchImprShare => ValueRole::Percentage,
            Column::Clicks | Column::Impressions | Column::Conversions => ValueRole::Count,
            _ => ValueRole::Text,
        }
    }

    /// The canonical display name, matching export header spelling.
    pub fn canonical_name(&self) -> String {
        match self {
            Column::Campaign => "Campaign".to_string(),
            Column::AdGroup => "Ad group".to_string(),
            Column::Keyword => "Keyword".to_string(),
            Column::SearchTerm => "Search term".to_string(),
            Column::MatchType => "Match type".to_string(),
            Column::Budget => "Budget".to_string(),
            Column::Cost => "Cost".to_string(),
            Column::Clicks => "Clicks".to_string(),
            Column::Impressions => "Impressions".to_string(),
            Column::Conversions => "Conversions".to_string(),
            Column::ConvValue => "Conv. value".to_string(),
            Column::Ctr => "CTR".to_string(),
            Column::ConvRate => "Conv. rate".to_string(),
            Column::AvgCpc => "Avg. CPC".to_string(),
            Column::CostPerConv => "Cost / conv.".to_string(),
            Column::SearchImprShare => "Search impr. share".to_string(),
            Column::Headline(index) => format!("Headline {index}"),
            Column::Description => "Description".to_string(),
            Column::FinalUrl => "Final URL".to_string(),
            Column::Other(name) => name.clone(),
        }
    }
}

fn strip_prefix_ci<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &value[prefix.len()..])
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Column {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Column::from_canonical(&raw))
    }
}

//! Analysis output types: summary metrics, per-schema findings, and
//! recommendations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::ReportSchema;

/// Account-level totals and derived ratios across all records.
///
/// Derived metrics are only computed when their denominator is positive;
/// otherwise they stay at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_cost: f64,
    pub total_clicks: f64,
    pub total_impressions: f64,
    pub total_conversions: f64,
    /// Clicks / impressions in percent, rounded to 2 decimals.
    pub average_ctr: f64,
    /// Cost / clicks, rounded to the nearest unit.
    pub average_cpc: f64,
    /// Cost / conversions, rounded to the nearest unit.
    pub average_cpa: f64,
}

/// Schema-tagged analyzer findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "report_type", rename_all = "snake_case")]
pub enum Analysis {
    Campaign(CampaignAnalysis),
    Ad(AdAnalysis),
    Keyword(KeywordAnalysis),
    SearchTerms(SearchTermsAnalysis),
}

impl Analysis {
    pub fn schema(&self) -> ReportSchema {
        match self {
            Analysis::Campaign(_) => ReportSchema::Campaign,
            Analysis::Ad(_) => ReportSchema::Ad,
            Analysis::Keyword(_) => ReportSchema::Keyword,
            Analysis::SearchTerms(_) => ReportSchema::SearchTerms,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignAnalysis {
    /// Converting campaigns ranked by cost per conversion, cheapest first.
    pub best_performers: Vec<CampaignPerformer>,
    /// High-spend campaigns without a single conversion, most expensive first.
    pub worst_performers: Vec<CampaignOffender>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignPerformer {
    pub campaign: String,
    pub cost: f64,
    pub conversions: f64,
    pub cpa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignOffender {
    pub campaign: String,
    pub cost: f64,
    pub conversions: f64,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdAnalysis {
    /// Ads with enough impressions but a click-through rate below the floor.
    pub low_ctr_ads: Vec<AdPerformance>,
    /// Ads with enough impressions, ranked by CTR descending.
    pub best_ads: Vec<AdPerformance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdPerformance {
    pub ad_group: Option<String>,
    pub headline: Option<String>,
    pub clicks: f64,
    pub impressions: f64,
    pub ctr: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    /// Keywords burning budget without converting, most expensive first.
    pub expensive_no_conversions: Vec<KeywordSpend>,
    /// Converting keywords ranked by cost per acquisition, cheapest first.
    pub top_performers: Vec<KeywordPerformer>,
    /// Per match-type totals, in first-appearance order.
    pub match_types: Vec<MatchTypeStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordSpend {
    pub keyword: String,
    pub match_type: Option<String>,
    pub cost: f64,
    pub clicks: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordPerformer {
    pub keyword: String,
    pub cost: f64,
    pub conversions: f64,
    pub cpa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTypeStats {
    pub match_type: String,
    pub cost: f64,
    pub clicks: f64,
    pub conversions: f64,
    /// None when the group has no conversions.
    pub cpa: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchTermsAnalysis {
    /// Terms with repeated clicks and no conversion, most expensive first.
    pub wasted_spend: Vec<SearchTermSpend>,
    /// Wasted-spend terms matching a negative-intent token.
    ///
    /// Matching is substring-based and can produce false positives (a token
    /// contained in a legitimate term still matches); that looseness is part
    /// of the contract, not a defect to fix here.
    pub negative_keyword_ideas: Vec<NegativeKeywordIdea>,
    /// Converting terms worth promoting to keywords, cheapest CPA first.
    pub suggested_keywords: Vec<SearchTermPerformer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTermSpend {
    pub term: String,
    pub cost: f64,
    pub clicks: f64,
    pub conversions: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegativeKeywordIdea {
    pub term: String,
    pub matched_token: String,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTermPerformer {
    pub term: String,
    pub cost: f64,
    pub conversions: f64,
    pub cpa: f64,
}

/// Urgency class of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Critical,
    Warning,
    Info,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::Critical => "critical",
            RecommendationKind::Warning => "warning",
            RecommendationKind::Info => "info",
        }
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One actionable recommendation.
///
/// Priorities ascend from 1 in generation order; a condition that does not
/// fire consumes no number, so the sequence is always contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: u32,
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub action: String,
    pub evidence: Vec<String>,
}

/// Complete analysis output for one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub report_type: ReportSchema,
    pub row_count: usize,
    pub summary: Summary,
    pub analysis: Analysis,
    pub recommendations: Vec<Recommendation>,
}

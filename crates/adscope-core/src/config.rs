//! Analyzer thresholds.
//!
//! Every cutoff the analyzers and the recommendation synthesizer use lives
//! here, constructed once and passed into the engine. There is no
//! process-wide settings cache; two engines with different configurations
//! can run side by side.

/// Immutable analyzer configuration.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Campaign spend above which zero conversions is flagged (strict `>`).
    pub campaign_cost_floor: f64,
    /// Keyword spend above which zero conversions is flagged (strict `>`).
    pub keyword_cost_floor: f64,
    /// Impressions an ad needs before its CTR is judged (strict `>`).
    pub min_impressions: f64,
    /// CTR percentage below which an ad counts as underperforming.
    pub low_ctr_threshold: f64,
    /// Clicks a search term needs before unconverted spend counts as waste
    /// (inclusive `>=`).
    pub min_wasted_clicks: f64,
    /// Broad-match CPA / phrase-match CPA ratio that triggers the match-type
    /// warning (inclusive `>=`; 1.3 means 30% over).
    pub broad_phrase_cpa_ratio: f64,
    /// Ranked-list size for campaign best/worst performers.
    pub top_campaigns: usize,
    /// Maximum low-CTR ads reported.
    pub max_low_ctr_ads: usize,
    /// Ranked-list size for best ads.
    pub top_ads: usize,
    /// Ranked-list size for keyword lists.
    pub top_keywords: usize,
    /// Maximum wasted-spend search terms reported.
    pub max_wasted_terms: usize,
    /// Ranked-list size for suggested keywords.
    pub top_search_terms: usize,
    /// Lowercase tokens marking low-intent search terms. Matching is by
    /// substring, first token wins; false positives are accepted behavior.
    pub negative_intent_tokens: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            campaign_cost_floor: 1000.0,
            keyword_cost_floor: 2000.0,
            min_impressions: 100.0,
            low_ctr_threshold: 2.0,
            min_wasted_clicks: 3.0,
            broad_phrase_cpa_ratio: 1.3,
            top_campaigns: 5,
            max_low_ctr_ads: 10,
            top_ads: 5,
            top_keywords: 10,
            max_wasted_terms: 20,
            top_search_terms: 10,
            negative_intent_tokens: default_negative_tokens(),
        }
    }
}

fn default_negative_tokens() -> Vec<String> {
    [
        "free",
        "gratis",
        "kostenlos",
        "cheap",
        "billig",
        "job",
        "jobs",
        "career",
        "salary",
        "gehalt",
        "used",
        "gebraucht",
        "download",
        "torrent",
        "wiki",
        "definition",
        "review",
        "diy",
        "selber machen",
        "was ist",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

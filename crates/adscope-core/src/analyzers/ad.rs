//! Ad report analysis.

use adscope_model::{AdAnalysis, AdPerformance, Column, Record};

use crate::config::AnalyzerConfig;

fn performance(record: &Record, impressions: f64) -> AdPerformance {
    AdPerformance {
        ad_group: record.text(&Column::AdGroup).map(str::to_string),
        headline: record.text(&Column::Headline(1)).map(str::to_string),
        clicks: record.metric(&Column::Clicks),
        impressions,
        ctr: record.ctr_percent().unwrap_or(0.0),
    }
}

pub(crate) fn analyze(records: &[Record], config: &AnalyzerConfig) -> AdAnalysis {
    // Ads below the impression floor have too little data to judge either way.
    let candidates: Vec<AdPerformance> = records
        .iter()
        .filter_map(|record| {
            let impressions = record.metric(&Column::Impressions);
            (impressions > config.min_impressions).then(|| performance(record, impressions))
        })
        .collect();

    let low_ctr_ads: Vec<AdPerformance> = candidates
        .iter()
        .filter(|ad| ad.ctr < config.low_ctr_threshold)
        .take(config.max_low_ctr_ads)
        .cloned()
        .collect();

    let mut best_ads = candidates;
    best_ads.sort_by(|a, b| b.ctr.total_cmp(&a.ctr));
    best_ads.truncate(config.top_ads);

    AdAnalysis {
        low_ctr_ads,
        best_ads,
    }
}

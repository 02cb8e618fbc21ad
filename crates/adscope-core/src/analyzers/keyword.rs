//! Keyword report analysis.

use adscope_model::{
    Column, KeywordAnalysis, KeywordPerformer, KeywordSpend, MatchTypeStats, Record,
};

use crate::config::AnalyzerConfig;

fn keyword_name(record: &Record) -> String {
    record
        .text(&Column::Keyword)
        .unwrap_or("(unnamed keyword)")
        .to_string()
}

pub(crate) fn analyze(records: &[Record], config: &AnalyzerConfig) -> KeywordAnalysis {
    let mut expensive_no_conversions: Vec<KeywordSpend> = records
        .iter()
        .filter_map(|record| {
            let cost = record.metric(&Column::Cost);
            let conversions = record.metric(&Column::Conversions);
            (cost > config.keyword_cost_floor && conversions < 1.0).then(|| KeywordSpend {
                keyword: keyword_name(record),
                match_type: record.text(&Column::MatchType).map(str::to_string),
                cost,
                clicks: record.metric(&Column::Clicks),
            })
        })
        .collect();
    expensive_no_conversions.sort_by(|a, b| b.cost.total_cmp(&a.cost));
    expensive_no_conversions.truncate(config.top_keywords);

    let mut top_performers: Vec<KeywordPerformer> = records
        .iter()
        .filter_map(|record| {
            let conversions = record.metric(&Column::Conversions);
            if conversions <= 0.0 {
                return None;
            }
            let cost = record.metric(&Column::Cost);
            Some(KeywordPerformer {
                keyword: keyword_name(record),
                cost,
                conversions,
                cpa: cost / conversions,
            })
        })
        .collect();
    top_performers.sort_by(|a, b| a.cpa.total_cmp(&b.cpa));
    top_performers.truncate(config.top_keywords);

    KeywordAnalysis {
        expensive_no_conversions,
        top_performers,
        match_types: match_type_breakdown(records),
    }
}

/// Group totals per match type, in first-appearance order. An explicit list
/// keeps the grouping deterministic; map iteration order must not decide the
/// output sequence.
fn match_type_breakdown(records: &[Record]) -> Vec<MatchTypeStats> {
    let mut groups: Vec<MatchTypeStats> = Vec::new();
    for record in records {
        let Some(match_type) = record.text(&Column::MatchType) else {
            continue;
        };
        let index = match groups.iter().position(|g| g.match_type == match_type) {
            Some(index) => index,
            None => {
                groups.push(MatchTypeStats {
                    match_type: match_type.to_string(),
                    cost: 0.0,
                    clicks: 0.0,
                    conversions: 0.0,
                    cpa: None,
                });
                groups.len() - 1
            }
        };
        let stats = &mut groups[index];
        stats.cost += record.metric(&Column::Cost);
        stats.clicks += record.metric(&Column::Clicks);
        stats.conversions += record.metric(&Column::Conversions);
    }
    for stats in &mut groups {
        if stats.conversions > 0.0 {
            stats.cpa = Some(stats.cost / stats.conversions);
        }
    }
    groups
}

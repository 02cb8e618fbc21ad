//! Search-term report analysis.

use adscope_model::{
    Column, NegativeKeywordIdea, Record, SearchTermPerformer, SearchTermSpend, SearchTermsAnalysis,
};

use crate::config::AnalyzerConfig;

fn term_name(record: &Record) -> String {
    record
        .text(&Column::SearchTerm)
        .unwrap_or("(unknown term)")
        .to_string()
}

pub(crate) fn analyze(records: &[Record], config: &AnalyzerConfig) -> SearchTermsAnalysis {
    let mut wasted_spend: Vec<SearchTermSpend> = records
        .iter()
        .filter_map(|record| {
            let clicks = record.metric(&Column::Clicks);
            let conversions = record.metric(&Column::Conversions);
            (clicks >= config.min_wasted_clicks && conversions < 1.0).then(|| SearchTermSpend {
                term: term_name(record),
                cost: record.metric(&Column::Cost),
                clicks,
                conversions,
            })
        })
        .collect();
    wasted_spend.sort_by(|a, b| b.cost.total_cmp(&a.cost));
    wasted_spend.truncate(config.max_wasted_terms);

    // Substring match against the ranked waste list; the first token in
    // declaration order wins. A token contained in a legitimate term still
    // matches; that looseness is accepted behavior.
    let negative_keyword_ideas: Vec<NegativeKeywordIdea> = wasted_spend
        .iter()
        .filter_map(|item| {
            let lowered = item.term.to_lowercase();
            config
                .negative_intent_tokens
                .iter()
                .find(|token| lowered.contains(token.as_str()))
                .map(|token| NegativeKeywordIdea {
                    term: item.term.clone(),
                    matched_token: token.clone(),
                    cost: item.cost,
                })
        })
        .collect();

    let mut suggested_keywords: Vec<SearchTermPerformer> = records
        .iter()
        .filter_map(|record| {
            let conversions = record.metric(&Column::Conversions);
            if conversions < 1.0 {
                return None;
            }
            let cost = record.metric(&Column::Cost);
            Some(SearchTermPerformer {
                term: term_name(record),
                cost,
                conversions,
                cpa: cost / conversions,
            })
        })
        .collect();
    suggested_keywords.sort_by(|a, b| a.cpa.total_cmp(&b.cpa));
    suggested_keywords.truncate(config.top_search_terms);

    SearchTermsAnalysis {
        wasted_spend,
        negative_keyword_ideas,
        suggested_keywords,
    }
}

#[cfg(test)]
mod tests {
    use adscope_model::CellValue;

    use super::*;

    fn record(term: &str, cost: f64, clicks: f64, conversions: f64) -> Record {
        let mut record = Record::new();
        record.insert(Column::SearchTerm, CellValue::Text(term.to_string()));
        record.insert(Column::Cost, CellValue::Currency(cost));
        record.insert(Column::Clicks, CellValue::Count(clicks));
        record.insert(Column::Conversions, CellValue::Count(conversions));
        record
    }

    #[test]
    fn wasted_spend_requires_three_clicks() {
        let records = vec![
            record("two clicks", 500.0, 2.0, 0.0),
            record("three clicks", 400.0, 3.0, 0.0),
        ];
        let analysis = analyze(&records, &AnalyzerConfig::default());
        assert_eq!(analysis.wasted_spend.len(), 1);
        assert_eq!(analysis.wasted_spend[0].term, "three clicks");
    }

    #[test]
    fn wasted_spend_ranks_by_cost_descending() {
        let records = vec![
            record("small", 100.0, 5.0, 0.0),
            record("large", 900.0, 5.0, 0.0),
        ];
        let analysis = analyze(&records, &AnalyzerConfig::default());
        assert_eq!(analysis.wasted_spend[0].term, "large");
    }

    #[test]
    fn negative_ideas_match_first_token_case_insensitively() {
        let records = vec![record("Nike Schuhe KOSTENLOS runterladen", 300.0, 4.0, 0.0)];
        let analysis = analyze(&records, &AnalyzerConfig::default());
        assert_eq!(analysis.negative_keyword_ideas.len(), 1);
        assert_eq!(
            analysis.negative_keyword_ideas[0].matched_token,
            "kostenlos"
        );
    }

    #[test]
    fn substring_false_positives_are_accepted_behavior() {
        // "jobst compression socks" is a legitimate brand query, but the
        // "job" token still matches by substring.
        let records = vec![record("jobst compression socks", 150.0, 3.0, 0.0)];
        let analysis = analyze(&records, &AnalyzerConfig::default());
        assert_eq!(analysis.negative_keyword_ideas.len(), 1);
        assert_eq!(analysis.negative_keyword_ideas[0].matched_token, "job");
    }

    #[test]
    fn converting_terms_are_suggested_by_cpa() {
        let records = vec![
            record("pricey term", 600.0, 10.0, 1.0),
            record("value term", 200.0, 10.0, 2.0),
        ];
        let analysis = analyze(&records, &AnalyzerConfig::default());
        let terms: Vec<&str> = analysis
            .suggested_keywords
            .iter()
            .map(|t| t.term.as_str())
            .collect();
        assert_eq!(terms, ["value term", "pricey term"]);
    }

    #[test]
    fn fractional_conversions_do_not_suggest_keywords() {
        let records = vec![record("half conv", 100.0, 5.0, 0.5)];
        let analysis = analyze(&records, &AnalyzerConfig::default());
        assert!(analysis.suggested_keywords.is_empty());
        // But the spend still counts as wasted: conversions < 1.
        assert_eq!(analysis.wasted_spend.len(), 1);
    }
}

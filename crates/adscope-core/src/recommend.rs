//! Recommendation synthesis.
//!
//! Conditions are evaluated in a fixed pass order (waste, CTR, negatives,
//! match type) and priorities ascend from 1 as conditions fire; a skipped
//! condition consumes no number, so priorities are always contiguous. The
//! synthesizer is schema-agnostic: it inspects whichever lists the upstream
//! analyzer populated.

use adscope_model::{Analysis, MatchTypeStats, Recommendation, RecommendationKind};

use crate::config::AnalyzerConfig;

/// Group-name markers used to locate broad and phrase match-type groups,
/// covering English and German export values.
const BROAD_MARKERS: [&str; 2] = ["broad", "weitgehend"];
const PHRASE_MARKERS: [&str; 2] = ["phrase", "wortgruppe"];

/// Items cited in the waste recommendation's evidence list.
const MAX_WASTE_EVIDENCE: usize = 5;

/// Format an amount with thousands separators ("12.340").
pub fn format_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn synthesize(analysis: &Analysis, config: &AnalyzerConfig) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let mut priority = 0u32;

    // Pass 1: unconverted spend.
    let waste = waste_items(analysis);
    if !waste.is_empty() {
        let total: f64 = waste.iter().map(|(_, cost)| cost).sum();
        priority += 1;
        recommendations.push(Recommendation {
            priority,
            kind: RecommendationKind::Critical,
            title: "Stop unconverted spend".to_string(),
            description: format!(
                "{} item(s) spent {} total without a single conversion",
                waste.len(),
                format_amount(total)
            ),
            action: "Pause these items or rework their targeting and landing pages".to_string(),
            evidence: waste
                .iter()
                .take(MAX_WASTE_EVIDENCE)
                .map(|(name, cost)| format!("{name} ({})", format_amount(*cost)))
                .collect(),
        });
    }

    // Pass 2: underperforming click-through rates.
    if let Analysis::Ad(ad) = analysis
        && !ad.low_ctr_ads.is_empty()
    {
        priority += 1;
        recommendations.push(Recommendation {
            priority,
            kind: RecommendationKind::Warning,
            title: "Improve ad click-through rates".to_string(),
            description: format!(
                "{} ad(s) fall below {}% CTR despite sufficient impressions",
                ad.low_ctr_ads.len(),
                config.low_ctr_threshold
            ),
            action: "Test new headlines and descriptions for the affected ads".to_string(),
            evidence: ad
                .low_ctr_ads
                .iter()
                .filter_map(|item| item.headline.clone().or_else(|| item.ad_group.clone()))
                .collect(),
        });
    }

    // Pass 3: negative keyword candidates.
    if let Analysis::SearchTerms(terms) = analysis
        && !terms.negative_keyword_ideas.is_empty()
    {
        priority += 1;
        recommendations.push(Recommendation {
            priority,
            kind: RecommendationKind::Info,
            title: "Add negative keywords".to_string(),
            description: format!(
                "{} search term(s) look like low-intent traffic",
                terms.negative_keyword_ideas.len()
            ),
            action: "Review and add these terms as negative keywords".to_string(),
            evidence: terms
                .negative_keyword_ideas
                .iter()
                .map(|idea| format!("{} (matched \"{}\")", idea.term, idea.matched_token))
                .collect(),
        });
    }

    // Pass 4: broad match paying a premium over phrase match.
    if let Analysis::Keyword(keywords) = analysis
        && let Some((broad_cpa, phrase_cpa)) = broad_and_phrase_cpa(&keywords.match_types)
        && phrase_cpa > 0.0
        && broad_cpa / phrase_cpa >= config.broad_phrase_cpa_ratio
    {
        priority += 1;
        recommendations.push(Recommendation {
            priority,
            kind: RecommendationKind::Warning,
            title: "Broad match is overpaying per conversion".to_string(),
            description: format!(
                "Broad-match CPA {} vs phrase-match CPA {}",
                format_amount(broad_cpa),
                format_amount(phrase_cpa)
            ),
            action: "Shift budget from broad match toward phrase and exact match".to_string(),
            evidence: Vec::new(),
        });
    }

    recommendations
}

/// (name, cost) pairs feeding the waste recommendation, per schema.
fn waste_items(analysis: &Analysis) -> Vec<(String, f64)> {
    match analysis {
        Analysis::Campaign(campaigns) => campaigns
            .worst_performers
            .iter()
            .map(|item| (item.campaign.clone(), item.cost))
            .collect(),
        Analysis::Keyword(keywords) => keywords
            .expensive_no_conversions
            .iter()
            .map(|item| (item.keyword.clone(), item.cost))
            .collect(),
        Analysis::SearchTerms(terms) => terms
            .wasted_spend
            .iter()
            .map(|item| (item.term.clone(), item.cost))
            .collect(),
        Analysis::Ad(_) => Vec::new(),
    }
}

/// CPAs of the broad and phrase groups when both exist and have conversions.
fn broad_and_phrase_cpa(match_types: &[MatchTypeStats]) -> Option<(f64, f64)> {
    let broad = find_group(match_types, &BROAD_MARKERS)?;
    let phrase = find_group(match_types, &PHRASE_MARKERS)?;
    Some((broad.cpa?, phrase.cpa?))
}

fn find_group<'a>(
    match_types: &'a [MatchTypeStats],
    markers: &[&str],
) -> Option<&'a MatchTypeStats> {
    match_types.iter().find(|group| {
        let lowered = group.match_type.to_lowercase();
        markers.iter().any(|marker| lowered.contains(marker))
    })
}

#[cfg(test)]
mod tests {
    use adscope_model::{
        AdAnalysis, AdPerformance, KeywordAnalysis, SearchTermsAnalysis, SearchTermSpend,
    };

    use super::*;

    fn match_type(name: &str, cost: f64, conversions: f64) -> MatchTypeStats {
        MatchTypeStats {
            match_type: name.to_string(),
            cost,
            clicks: 0.0,
            conversions,
            cpa: (conversions > 0.0).then(|| cost / conversions),
        }
    }

    fn keyword_analysis(match_types: Vec<MatchTypeStats>) -> Analysis {
        Analysis::Keyword(KeywordAnalysis {
            expensive_no_conversions: Vec::new(),
            top_performers: Vec::new(),
            match_types,
        })
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(5000.0), "5.000");
        assert_eq!(format_amount(1234567.0), "1.234.567");
        assert_eq!(format_amount(999.4), "999");
        assert_eq!(format_amount(-1500.0), "-1.500");
    }

    #[test]
    fn broad_thirty_percent_over_phrase_triggers_warning() {
        let analysis = keyword_analysis(vec![
            match_type("Broad match", 1300.0, 1.0),
            match_type("Phrase match", 1000.0, 1.0),
        ]);
        let recommendations = synthesize(&analysis, &AnalyzerConfig::default());
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].kind, RecommendationKind::Warning);
        assert!(recommendations[0].description.contains("1.300"));
        assert!(recommendations[0].description.contains("1.000"));
    }

    #[test]
    fn broad_twenty_nine_percent_over_phrase_does_not_trigger() {
        let analysis = keyword_analysis(vec![
            match_type("Broad match", 1290.0, 1.0),
            match_type("Phrase match", 1000.0, 1.0),
        ]);
        assert!(synthesize(&analysis, &AnalyzerConfig::default()).is_empty());
    }

    #[test]
    fn match_type_warning_needs_both_groups() {
        let analysis = keyword_analysis(vec![match_type("Broad match", 1300.0, 1.0)]);
        assert!(synthesize(&analysis, &AnalyzerConfig::default()).is_empty());
    }

    #[test]
    fn match_type_warning_needs_phrase_conversions() {
        let analysis = keyword_analysis(vec![
            match_type("Broad match", 1300.0, 1.0),
            match_type("Phrase match", 1000.0, 0.0),
        ]);
        assert!(synthesize(&analysis, &AnalyzerConfig::default()).is_empty());
    }

    #[test]
    fn german_match_type_values_are_recognized() {
        let analysis = keyword_analysis(vec![
            match_type("Weitgehend passend", 2000.0, 1.0),
            match_type("Passende Wortgruppe", 1000.0, 1.0),
        ]);
        let recommendations = synthesize(&analysis, &AnalyzerConfig::default());
        assert_eq!(recommendations.len(), 1);
    }

    #[test]
    fn low_ctr_warning_counts_affected_ads() {
        let ad = AdPerformance {
            ad_group: Some("Shoes".to_string()),
            headline: Some("Buy shoes".to_string()),
            clicks: 1.0,
            impressions: 1000.0,
            ctr: 0.1,
        };
        let analysis = Analysis::Ad(AdAnalysis {
            low_ctr_ads: vec![ad.clone(), ad],
            best_ads: Vec::new(),
        });
        let recommendations = synthesize(&analysis, &AnalyzerConfig::default());
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].kind, RecommendationKind::Warning);
        assert!(recommendations[0].description.starts_with("2 ad(s)"));
    }

    #[test]
    fn priorities_are_contiguous_across_passes() {
        let analysis = Analysis::SearchTerms(SearchTermsAnalysis {
            wasted_spend: vec![SearchTermSpend {
                term: "free shoes".to_string(),
                cost: 500.0,
                clicks: 5.0,
                conversions: 0.0,
            }],
            negative_keyword_ideas: vec![adscope_model::NegativeKeywordIdea {
                term: "free shoes".to_string(),
                matched_token: "free".to_string(),
                cost: 500.0,
            }],
            suggested_keywords: Vec::new(),
        });
        let recommendations = synthesize(&analysis, &AnalyzerConfig::default());
        // Waste fires (priority 1), CTR is skipped, negatives fire next and
        // take priority 2, not 3.
        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].priority, 1);
        assert_eq!(recommendations[0].kind, RecommendationKind::Critical);
        assert_eq!(recommendations[1].priority, 2);
        assert_eq!(recommendations[1].kind, RecommendationKind::Info);
    }
}

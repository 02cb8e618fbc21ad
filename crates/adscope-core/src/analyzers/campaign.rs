//! Campaign report analysis.

use adscope_model::{CampaignAnalysis, CampaignOffender, CampaignPerformer, Column, Record};

use crate::config::AnalyzerConfig;

/// Diagnostic attached to every worst-performer entry.
const HIGH_SPEND_NO_CONVERSIONS: &str = "High spend without a single conversion";

fn campaign_name(record: &Record) -> String {
    record
        .text(&Column::Campaign)
        .unwrap_or("(unnamed campaign)")
        .to_string()
}

pub(crate) fn analyze(records: &[Record], config: &AnalyzerConfig) -> CampaignAnalysis {
    let mut best_performers: Vec<CampaignPerformer> = records
        .iter()
        .filter_map(|record| {
            let conversions = record.metric(&Column::Conversions);
            if conversions <= 0.0 {
                return None;
            }
            let cost = record.metric(&Column::Cost);
            Some(CampaignPerformer {
                campaign: campaign_name(record),
                cost,
                conversions,
                cpa: cost / conversions,
            })
        })
        .collect();
    best_performers.sort_by(|a, b| a.cpa.total_cmp(&b.cpa));
    best_performers.truncate(config.top_campaigns);

    let mut worst_performers: Vec<CampaignOffender> = records
        .iter()
        .filter_map(|record| {
            let cost = record.metric(&Column::Cost);
            let conversions = record.metric(&Column::Conversions);
            (cost > config.campaign_cost_floor && conversions < 1.0).then(|| CampaignOffender {
                campaign: campaign_name(record),
                cost,
                conversions,
                reason: HIGH_SPEND_NO_CONVERSIONS.to_string(),
            })
        })
        .collect();
    worst_performers.sort_by(|a, b| b.cost.total_cmp(&a.cost));
    worst_performers.truncate(config.top_campaigns);

    CampaignAnalysis {
        best_performers,
        worst_performers,
    }
}

#[cfg(test)]
mod tests {
    use adscope_model::CellValue;

    use super::*;

    fn record(name: &str, cost: f64, conversions: f64) -> Record {
        let mut record = Record::new();
        record.insert(Column::Campaign, CellValue::Text(name.to_string()));
        record.insert(Column::Cost, CellValue::Currency(cost));
        record.insert(Column::Conversions, CellValue::Count(conversions));
        record
    }

    #[test]
    fn best_performers_rank_by_cpa_ascending() {
        let records = vec![
            record("pricey", 900.0, 1.0),
            record("cheap", 300.0, 3.0),
            record("none", 100.0, 0.0),
        ];
        let analysis = analyze(&records, &AnalyzerConfig::default());
        let names: Vec<&str> = analysis
            .best_performers
            .iter()
            .map(|p| p.campaign.as_str())
            .collect();
        assert_eq!(names, ["cheap", "pricey"]);
        assert_eq!(analysis.best_performers[0].cpa, 100.0);
    }

    #[test]
    fn worst_performers_need_cost_strictly_above_floor() {
        let records = vec![
            record("at floor", 1000.0, 0.0),
            record("above floor", 1000.01, 0.0),
        ];
        let analysis = analyze(&records, &AnalyzerConfig::default());
        let names: Vec<&str> = analysis
            .worst_performers
            .iter()
            .map(|p| p.campaign.as_str())
            .collect();
        assert_eq!(names, ["above floor"]);
        assert_eq!(
            analysis.worst_performers[0].reason,
            HIGH_SPEND_NO_CONVERSIONS
        );
    }

    #[test]
    fn fractional_conversions_below_one_still_count_as_worst() {
        let records = vec![record("partial", 5000.0, 0.5)];
        let analysis = analyze(&records, &AnalyzerConfig::default());
        assert_eq!(analysis.worst_performers.len(), 1);
        // The same record also converts, so it appears among best performers.
        assert_eq!(analysis.best_performers.len(), 1);
    }

    #[test]
    fn worst_performers_rank_by_cost_descending_with_stable_ties() {
        let records = vec![
            record("a", 2000.0, 0.0),
            record("b", 3000.0, 0.0),
            record("c", 2000.0, 0.0),
        ];
        let analysis = analyze(&records, &AnalyzerConfig::default());
        let names: Vec<&str> = analysis
            .worst_performers
            .iter()
            .map(|p| p.campaign.as_str())
            .collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn top_n_is_bounded() {
        let records: Vec<Record> = (0..8)
            .map(|i| record(&format!("c{i}"), 2000.0 + f64::from(i), 0.0))
            .collect();
        let analysis = analyze(&records, &AnalyzerConfig::default());
        assert_eq!(analysis.worst_performers.len(), 5);
        assert_eq!(analysis.worst_performers[0].campaign, "c7");
    }
}

//! Account-level metric aggregation.

use adscope_model::{Column, Record, Summary};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sum cost, clicks, impressions and conversions over all records (missing
/// cells count as zero) and derive the average ratios. A derived metric is
/// only computed when its denominator is positive.
pub fn summarize(records: &[Record]) -> Summary {
    let mut summary = Summary::default();
    for record in records {
        summary.total_cost += record.metric(&Column::Cost);
        summary.total_clicks += record.metric(&Column::Clicks);
        summary.total_impressions += record.metric(&Column::Impressions);
        summary.total_conversions += record.metric(&Column::Conversions);
    }
    if summary.total_impressions > 0.0 {
        summary.average_ctr = round2(summary.total_clicks / summary.total_impressions * 100.0);
    }
    if summary.total_clicks > 0.0 {
        summary.average_cpc = (summary.total_cost / summary.total_clicks).round();
    }
    if summary.total_conversions > 0.0 {
        summary.average_cpa = (summary.total_cost / summary.total_conversions).round();
    }
    summary
}

#[cfg(test)]
mod tests {
    use adscope_model::CellValue;

    use super::*;

    fn record(cost: f64, clicks: f64, impressions: f64, conversions: f64) -> Record {
        let mut record = Record::new();
        record.insert(Column::Cost, CellValue::Currency(cost));
        record.insert(Column::Clicks, CellValue::Count(clicks));
        record.insert(Column::Impressions, CellValue::Count(impressions));
        record.insert(Column::Conversions, CellValue::Count(conversions));
        record
    }

    #[test]
    fn totals_and_ratios() {
        let records = vec![record(1000.0, 30.0, 2000.0, 2.0), record(500.0, 10.0, 1000.0, 1.0)];
        let summary = summarize(&records);
        assert_eq!(summary.total_cost, 1500.0);
        assert_eq!(summary.total_clicks, 40.0);
        assert_eq!(summary.total_impressions, 3000.0);
        assert_eq!(summary.total_conversions, 3.0);
        // 40 / 3000 * 100 = 1.333... -> 1.33
        assert_eq!(summary.average_ctr, 1.33);
        // 1500 / 40 = 37.5 -> 38
        assert_eq!(summary.average_cpc, 38.0);
        // 1500 / 3 = 500
        assert_eq!(summary.average_cpa, 500.0);
    }

    #[test]
    fn zero_denominators_stay_zero() {
        let records = vec![record(1000.0, 0.0, 0.0, 0.0)];
        let summary = summarize(&records);
        assert_eq!(summary.average_ctr, 0.0);
        assert_eq!(summary.average_cpc, 0.0);
        assert_eq!(summary.average_cpa, 0.0);
    }

    #[test]
    fn missing_cells_count_as_zero() {
        let mut partial = Record::new();
        partial.insert(Column::Cost, CellValue::Currency(100.0));
        let summary = summarize(&[partial]);
        assert_eq!(summary.total_cost, 100.0);
        assert_eq!(summary.total_clicks, 0.0);
    }

    #[test]
    fn empty_input_yields_default_summary() {
        assert_eq!(summarize(&[]), Summary::default());
    }
}

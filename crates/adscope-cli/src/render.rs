//! Terminal rendering of analysis reports.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use adscope_core::format_amount;
use adscope_model::{Analysis, AnalysisReport, Recommendation, RecommendationKind, Summary};

/// Render the full report as terminal text.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut sections: Vec<String> = Vec::new();
    sections.push(format!(
        "Report type: {}\nRows analyzed: {}",
        report.report_type.label(),
        report.row_count
    ));
    sections.push(titled("Summary", &summary_table(&report.summary)));
    if !report.recommendations.is_empty() {
        sections.push(titled(
            "Recommendations",
            &recommendations_table(&report.recommendations),
        ));
    }
    for (title, table) in analysis_tables(&report.analysis) {
        sections.push(titled(title, &table));
    }
    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

fn titled(title: &str, table: &Table) -> String {
    format!("{title}:\n{table}")
}

fn summary_table(summary: &Summary) -> Table {
    let mut table = new_table(vec!["Metric", "Value"]);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Total cost"),
        Cell::new(format_amount(summary.total_cost)),
    ]);
    table.add_row(vec![
        Cell::new("Total clicks"),
        Cell::new(summary.total_clicks),
    ]);
    table.add_row(vec![
        Cell::new("Total impressions"),
        Cell::new(summary.total_impressions),
    ]);
    table.add_row(vec![
        Cell::new("Total conversions"),
        Cell::new(summary.total_conversions),
    ]);
    table.add_row(vec![
        Cell::new("Average CTR"),
        Cell::new(format!("{:.2}%", summary.average_ctr)),
    ]);
    table.add_row(vec![
        Cell::new("Average CPC"),
        Cell::new(format_amount(summary.average_cpc)),
    ]);
    table.add_row(vec![
        Cell::new("Average CPA"),
        Cell::new(format_amount(summary.average_cpa)),
    ]);
    table
}

fn recommendations_table(recommendations: &[Recommendation]) -> Table {
    let mut table = new_table(vec!["#", "Kind", "Title", "Description", "Action"]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for recommendation in recommendations {
        table.add_row(vec![
            Cell::new(recommendation.priority),
            kind_cell(recommendation.kind),
            Cell::new(&recommendation.title),
            Cell::new(&recommendation.description),
            Cell::new(&recommendation.action),
        ]);
    }
    table
}

fn analysis_tables(analysis: &Analysis) -> Vec<(&'static str, Table)> {
    let mut tables = Vec::new();
    match analysis {
        Analysis::Campaign(campaigns) => {
            if !campaigns.worst_performers.is_empty() {
                let mut table = new_table(vec!["Campaign", "Cost", "Conversions", "Reason"]);
                for item in &campaigns.worst_performers {
                    table.add_row(vec![
                        Cell::new(&item.campaign),
                        Cell::new(format_amount(item.cost)),
                        Cell::new(item.conversions),
                        Cell::new(&item.reason),
                    ]);
                }
                tables.push(("Worst performers", table));
            }
            if !campaigns.best_performers.is_empty() {
                let mut table = new_table(vec!["Campaign", "Cost", "Conversions", "CPA"]);
                for item in &campaigns.best_performers {
                    table.add_row(vec![
                        Cell::new(&item.campaign),
                        Cell::new(format_amount(item.cost)),
                        Cell::new(item.conversions),
                        Cell::new(format_amount(item.cpa)),
                    ]);
                }
                tables.push(("Best performers", table));
            }
        }
        Analysis::Ad(ads) => {
            if !ads.low_ctr_ads.is_empty() {
                let mut table = ad_table();
                for item in &ads.low_ctr_ads {
                    table.add_row(ad_row(item));
                }
                tables.push(("Low CTR ads", table));
            }
            if !ads.best_ads.is_empty() {
                let mut table = ad_table();
                for item in &ads.best_ads {
                    table.add_row(ad_row(item));
                }
                tables.push(("Best ads", table));
            }
        }
        Analysis::Keyword(keywords) => {
            if !keywords.expensive_no_conversions.is_empty() {
                let mut table = new_table(vec!["Keyword", "Match type", "Cost", "Clicks"]);
                for item in &keywords.expensive_no_conversions {
                    table.add_row(vec![
                        Cell::new(&item.keyword),
                        Cell::new(item.match_type.as_deref().unwrap_or("-")),
                        Cell::new(format_amount(item.cost)),
                        Cell::new(item.clicks),
                    ]);
                }
                tables.push(("Expensive keywords without conversions", table));
            }
            if !keywords.top_performers.is_empty() {
                let mut table = new_table(vec!["Keyword", "Cost", "Conversions", "CPA"]);
                for item in &keywords.top_performers {
                    table.add_row(vec![
                        Cell::new(&item.keyword),
                        Cell::new(format_amount(item.cost)),
                        Cell::new(item.conversions),
                        Cell::new(format_amount(item.cpa)),
                    ]);
                }
                tables.push(("Top performing keywords", table));
            }
            if !keywords.match_types.is_empty() {
                let mut table =
                    new_table(vec!["Match type", "Cost", "Clicks", "Conversions", "CPA"]);
                for group in &keywords.match_types {
                    table.add_row(vec![
                        Cell::new(&group.match_type),
                        Cell::new(format_amount(group.cost)),
                        Cell::new(group.clicks),
                        Cell::new(group.conversions),
                        match group.cpa {
                            Some(cpa) => Cell::new(format_amount(cpa)),
                            None => Cell::new("-").fg(Color::DarkGrey),
                        },
                    ]);
                }
                tables.push(("Match type breakdown", table));
            }
        }
        Analysis::SearchTerms(terms) => {
            if !terms.wasted_spend.is_empty() {
                let mut table = new_table(vec!["Search term", "Cost", "Clicks", "Conversions"]);
                for item in &terms.wasted_spend {
                    table.add_row(vec![
                        Cell::new(&item.term),
                        Cell::new(format_amount(item.cost)),
                        Cell::new(item.clicks),
                        Cell::new(item.conversions),
                    ]);
                }
                tables.push(("Wasted spend", table));
            }
            if !terms.negative_keyword_ideas.is_empty() {
                let mut table = new_table(vec!["Search term", "Matched token", "Cost"]);
                for idea in &terms.negative_keyword_ideas {
                    table.add_row(vec![
                        Cell::new(&idea.term),
                        Cell::new(&idea.matched_token),
                        Cell::new(format_amount(idea.cost)),
                    ]);
                }
                tables.push(("Suggested negative keywords", table));
            }
            if !terms.suggested_keywords.is_empty() {
                let mut table = new_table(vec!["Search term", "Cost", "Conversions", "CPA"]);
                for item in &terms.suggested_keywords {
                    table.add_row(vec![
                        Cell::new(&item.term),
                        Cell::new(format_amount(item.cost)),
                        Cell::new(item.conversions),
                        Cell::new(format_amount(item.cpa)),
                    ]);
                }
                tables.push(("Suggested keywords", table));
            }
        }
    }
    tables
}

fn ad_table() -> Table {
    new_table(vec!["Ad group", "Headline", "Clicks", "Impressions", "CTR"])
}

fn ad_row(item: &adscope_model::AdPerformance) -> Vec<Cell> {
    vec![
        Cell::new(item.ad_group.as_deref().unwrap_or("-")),
        Cell::new(item.headline.as_deref().unwrap_or("-")),
        Cell::new(item.clicks),
        Cell::new(item.impressions),
        Cell::new(format!("{:.2}%", item.ctr)),
    ]
}

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table.set_header(headers.into_iter().map(header_cell).collect::<Vec<_>>());
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn kind_cell(kind: RecommendationKind) -> Cell {
    match kind {
        RecommendationKind::Critical => Cell::new("CRITICAL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        RecommendationKind::Warning => Cell::new("WARN").fg(Color::Yellow),
        RecommendationKind::Info => Cell::new("INFO").fg(Color::Blue),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

//! Schema classification over mapped headers.

use adscope_model::{Column, ReportSchema};

/// Count how many of a schema's declared columns appear in the header set.
pub fn match_count(schema: ReportSchema, columns: &[Column]) -> usize {
    schema
        .declared_columns()
        .iter()
        .filter(|declared| columns.contains(declared))
        .count()
}

/// First schema in declaration order reaching the match threshold, if any.
///
/// There is no scoring beyond the threshold: a header that satisfies two
/// schemas resolves to the earlier-declared one.
pub fn classify(columns: &[Column]) -> Option<ReportSchema> {
    ReportSchema::ALL
        .into_iter()
        .find(|schema| match_count(*schema, columns) >= ReportSchema::MATCH_THRESHOLD)
}

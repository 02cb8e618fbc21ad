//! Localized header mapping.
//!
//! Export headers vary by account language. A fixed dictionary maps the
//! localized names we support to the canonical vocabulary; anything outside
//! the dictionary is treated as an already-canonical name (identity
//! fallback), which keeps English exports working without a dictionary entry
//! per column.

use adscope_model::Column;

/// Localized header name -> canonical column name.
const LOCALIZED_HEADERS: &[(&str, &str)] = &[
    ("Kampagne", "Campaign"),
    ("Kampagnenname", "Campaign"),
    ("Anzeigengruppe", "Ad group"),
    ("Anzeigengruppenname", "Ad group"),
    ("Suchbegriff", "Search term"),
    ("Keyword-Option", "Match type"),
    ("Übereinstimmungstyp", "Match type"),
    ("Kosten", "Cost"),
    ("Klicks", "Clicks"),
    ("Impressionen", "Impressions"),
    ("Impr.", "Impressions"),
    ("Conv.-Wert", "Conv. value"),
    ("Conversion-Wert", "Conv. value"),
    ("Klickrate", "CTR"),
    ("Conv.-Rate", "Conv. rate"),
    ("Conversion-Rate", "Conv. rate"),
    ("Durchschn. CPC", "Avg. CPC"),
    ("Kosten/Conv.", "Cost / conv."),
    (
        "Anteil an möglichen Impressionen im Suchnetzwerk",
        "Search impr. share",
    ),
    ("Beschreibung", "Description"),
    ("Endgültige URL", "Final URL"),
];

/// German ad headline headers carry an index ("Anzeigentitel 1").
const LOCALIZED_HEADLINE_PREFIX: &str = "Anzeigentitel ";

/// Trim a raw header token, strip a leaked BOM, and collapse inner runs of
/// whitespace so dictionary lookup sees one spelling.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Map one raw header token to its canonical column.
pub fn map_header(raw: &str) -> Column {
    let normalized = normalize_header(raw);
    for (localized, canonical) in LOCALIZED_HEADERS {
        if normalized.eq_ignore_ascii_case(localized) {
            return Column::from_canonical(canonical);
        }
    }
    if let Some(rest) = normalized.strip_prefix(LOCALIZED_HEADLINE_PREFIX)
        && let Ok(index) = rest.trim().parse::<u8>()
    {
        return Column::Headline(index);
    }
    Column::from_canonical(&normalized)
}

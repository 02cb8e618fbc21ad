//! Typed records and parsed tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::schema::ReportSchema;

/// A single cell after locale-aware coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Currency(f64),
    Percent(f64),
    Count(f64),
    Text(String),
    /// Empty or placeholder input ("", "--").
    Missing,
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Currency(value) | CellValue::Percent(value) | CellValue::Count(value) => {
                Some(*value)
            }
            CellValue::Text(_) | CellValue::Missing => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// One data row keyed by canonical column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    pub cells: BTreeMap<Column, CellValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: Column, value: CellValue) {
        self.cells.insert(column, value);
    }

    /// Typed numeric value of a column, if present and numeric.
    pub fn number(&self, column: &Column) -> Option<f64> {
        self.cells.get(column).and_then(CellValue::as_number)
    }

    /// Numeric value with the missing-as-zero aggregation convention.
    pub fn metric(&self, column: &Column) -> f64 {
        self.number(column).unwrap_or(0.0)
    }

    pub fn text(&self, column: &Column) -> Option<&str> {
        self.cells.get(column).and_then(CellValue::as_text)
    }

    /// Click-through rate in percent. Prefers a reported CTR column and
    /// falls back to clicks / impressions when impressions are positive.
    pub fn ctr_percent(&self) -> Option<f64> {
        if let Some(ctr) = self.number(&Column::Ctr) {
            return Some(ctr);
        }
        let impressions = self.metric(&Column::Impressions);
        if impressions > 0.0 {
            Some(self.metric(&Column::Clicks) / impressions * 100.0)
        } else {
            None
        }
    }
}

/// A classified, fully ingested report. Immutable once parsed; analysis is a
/// pure function of this value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedTable {
    pub schema: ReportSchema,
    /// Mapped columns in header order.
    pub columns: Vec<Column>,
    pub records: Vec<Record>,
    /// Raw data lines discarded for a column-count mismatch.
    pub dropped_rows: usize,
}

impl ParsedTable {
    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}

//! Output of one pipeline run.

use serde::Serialize;

use census_model::{Column, Record, SortKeys};

/// A record with its display decoration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CensusRow {
    pub record: Record,
    pub marked: bool,
}

impl CensusRow {
    pub fn new(record: Record) -> Self {
        let marked = record.is_marked();
        Self { record, marked }
    }

    pub fn cell(&self, column: Column) -> String {
        self.record.display(column)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub lines_seen: usize,
    pub parsed: usize,
    /// Lines with content that did not parse; blank and comment lines excluded.
    pub rejected: usize,
    pub marked: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CensusView {
    pub rows: Vec<CensusRow>,
    pub keys: SortKeys,
    pub columns: Vec<Column>,
    /// Leading rows that satisfied the partition rule.
    pub priority_len: usize,
    pub stats: ParseStats,
}

impl CensusView {
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.rows.iter().map(|row| &row.record)
    }

    /// Header labels in column order.
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(Column::label).collect()
    }

    /// Cell text for every row, in column order.
    pub fn cells(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| self.columns.iter().map(|&column| row.cell(column)).collect())
            .collect()
    }
}

//! Report variants.
//!
//! Each deployment parses one recurring report layout. The variant fixes the
//! visible columns and the default sort order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::ModelError;
use crate::sort_key::{SortKey, SortKeys};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportVariant {
    /// Nursing-unit census: `NAME NURS <unit> <room> <bed> ... <n> Days <notes>`.
    #[default]
    Nursing,
    /// Ward census: `NAME <room> <bed> ... <n> Days <notes>`, rooms may be bare numbers.
    Ward,
}

impl ReportVariant {
    pub const ALL: [ReportVariant; 2] = [ReportVariant::Nursing, ReportVariant::Ward];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportVariant::Nursing => "nursing",
            ReportVariant::Ward => "ward",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportVariant::Nursing => "Nursing-unit census (NURS anchor, letter+digit rooms)",
            ReportVariant::Ward => "Ward census (letter+digit or 3-digit rooms)",
        }
    }

    pub fn columns(&self) -> &'static [Column] {
        match self {
            ReportVariant::Nursing => &[
                Column::Name,
                Column::Unit,
                Column::Room,
                Column::Bed,
                Column::LengthOfStay,
                Column::PatientNumber,
                Column::Notes,
            ],
            ReportVariant::Ward => &[
                Column::Name,
                Column::Room,
                Column::Bed,
                Column::LengthOfStay,
                Column::PatientNumber,
                Column::Notes,
            ],
        }
    }

    pub fn default_sort_keys(&self) -> SortKeys {
        let columns: &[Column] = match self {
            ReportVariant::Nursing => &[
                Column::LengthOfStay,
                Column::Unit,
                Column::Room,
                Column::Bed,
            ],
            ReportVariant::Ward => &[Column::LengthOfStay, Column::Room, Column::Bed],
        };
        columns
            .iter()
            .copied()
            .map(SortKey::ascending)
            .fold(SortKeys::empty(), |mut keys, key| {
                keys.push_unique(key);
                keys
            })
    }
}

impl fmt::Display for ReportVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportVariant {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nursing" | "nurs" => Ok(ReportVariant::Nursing),
            "ward" => Ok(ReportVariant::Ward),
            _ => Err(ModelError::UnknownVariant(s.trim().to_string())),
        }
    }
}

//! Display columns and sort directions.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A census column. The set shown is fixed per [`crate::ReportVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Name,
    Unit,
    Room,
    Bed,
    #[serde(rename = "los")]
    LengthOfStay,
    #[serde(rename = "patient")]
    PatientNumber,
    Notes,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Name,
        Column::Unit,
        Column::Room,
        Column::Bed,
        Column::LengthOfStay,
        Column::PatientNumber,
        Column::Notes,
    ];

    /// Short machine name, as used in config files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Unit => "unit",
            Column::Room => "room",
            Column::Bed => "bed",
            Column::LengthOfStay => "los",
            Column::PatientNumber => "patient",
            Column::Notes => "notes",
        }
    }

    /// Header label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Unit => "Unit",
            Column::Room => "Room",
            Column::Bed => "Bed",
            Column::LengthOfStay => "LOS",
            Column::PatientNumber => "Patient #",
            Column::Notes => "Physician / Notes",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = ModelError;

    /// Accepts the short name, the label, or a few common aliases (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let column = match normalized.as_str() {
            "name" | "patient name" => Column::Name,
            "unit" | "ward" => Column::Unit,
            "room" => Column::Room,
            "bed" => Column::Bed,
            "los" | "length_of_stay" | "length-of-stay" | "days" => Column::LengthOfStay,
            "patient" | "patient #" | "patient_number" | "mrn" => Column::PatientNumber,
            "notes" | "physician" | "physician / notes" => Column::Notes,
            _ => return Err(ModelError::UnknownColumn(s.trim().to_string())),
        };
        Ok(column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortDirection::Ascending)
    }

    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_labels() {
        for column in Column::ALL {
            assert_eq!(column.as_str().parse::<Column>().unwrap(), column);
            assert_eq!(column.label().parse::<Column>().unwrap(), column);
        }
        assert!("ward".parse::<Column>().is_ok());
        assert!("floor".parse::<Column>().is_err());
    }

    #[test]
    fn descending_reverses() {
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(
            SortDirection::Ascending.apply(Ordering::Less),
            Ordering::Less
        );
        assert_eq!(
            SortDirection::Descending.flipped(),
            SortDirection::Ascending
        );
    }
}

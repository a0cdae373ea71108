//! Parsed census records.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::ModelError;
use crate::room::Room;

/// Lower bound (inclusive) of the emphasis interval, in days.
pub const MARK_MIN_DAYS: f64 = 1.0;

/// Upper bound (inclusive) of the emphasis interval, in days.
pub const MARK_MAX_DAYS: f64 = 3.3;

/// A non-negative, finite length of stay in days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct LengthOfStay(f64);

impl LengthOfStay {
    pub fn new(days: f64) -> Result<Self, ModelError> {
        if !days.is_finite() || days < 0.0 {
            return Err(ModelError::InvalidLengthOfStay(days));
        }
        Ok(Self(days))
    }

    pub fn days(self) -> f64 {
        self.0
    }

    /// True when the stay falls in the closed emphasis interval.
    pub fn is_marked(self) -> bool {
        (MARK_MIN_DAYS..=MARK_MAX_DAYS).contains(&self.0)
    }

    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for LengthOfStay {
    type Error = ModelError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LengthOfStay> for f64 {
    fn from(value: LengthOfStay) -> Self {
        value.0
    }
}

impl fmt::Display for LengthOfStay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One parsed census line.
///
/// A record can only be built with a validated [`LengthOfStay`] and [`Room`],
/// so a line without either never becomes a record. The marked flag is not
/// stored; see [`Record::is_marked`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Free text preceding the structural anchor.
    pub raw_name: String,
    pub unit: String,
    pub room: Room,
    /// May be empty.
    pub bed: String,
    /// May be empty.
    pub patient_number: String,
    pub length_of_stay: LengthOfStay,
    /// Everything after the `Days` keyword, verbatim.
    pub trailing_text: String,
}

impl Record {
    /// Derived emphasis flag: `1.0 <= length_of_stay <= 3.3`.
    pub fn is_marked(&self) -> bool {
        self.length_of_stay.is_marked()
    }

    /// Text value of a lexicographically compared column.
    ///
    /// Returns `None` for columns with their own comparison (room, length of stay).
    pub fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::Name => Some(&self.raw_name),
            Column::Unit => Some(&self.unit),
            Column::Bed => Some(&self.bed),
            Column::PatientNumber => Some(&self.patient_number),
            Column::Notes => Some(&self.trailing_text),
            Column::Room | Column::LengthOfStay => None,
        }
    }

    /// Display text for a column.
    pub fn display(&self, column: Column) -> String {
        match column {
            Column::Room => self.room.to_string(),
            Column::LengthOfStay => self.length_of_stay.to_string(),
            other => self.text(other).unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(LengthOfStay::new(-0.1).is_err());
        assert!(LengthOfStay::new(f64::NAN).is_err());
        assert!(LengthOfStay::new(f64::INFINITY).is_err());
        assert!(LengthOfStay::new(0.0).is_ok());
    }

    #[test]
    fn marked_interval_is_closed() {
        let marked = |days: f64| LengthOfStay::new(days).unwrap().is_marked();
        assert!(!marked(0.99));
        assert!(marked(1.0));
        assert!(marked(2.0));
        assert!(marked(3.3));
        assert!(!marked(3.31));
    }

    #[test]
    fn deserialize_validates_length_of_stay() {
        let err = serde_json::from_str::<LengthOfStay>("-2.0");
        assert!(err.is_err());
        let ok: LengthOfStay = serde_json::from_str("2.5").unwrap();
        assert_eq!(ok.days(), 2.5);
    }
}

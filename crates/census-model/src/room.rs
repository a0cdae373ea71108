//! Room tokens and their ordering key.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A ward/room token exactly as it appeared on the line, e.g. `N29` or `412`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Room(String);

/// Ordering key for a room: letter prefix first, then numeric suffix.
///
/// Derived `Ord` compares `prefix` lexicographically, then `number`
/// numerically, so `N9 < N29 < W1`. A room without a numeric suffix sorts
/// before any numbered room sharing its prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomKey {
    pub prefix: String,
    pub number: Option<RoomNumber>,
}

/// A room's numeric suffix, ordered by value at any length.
///
/// Held as its digits with leading zeros removed, so `N007` and `N7` compare
/// equal and suffixes wider than any integer type still order correctly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomNumber(String);

impl RoomNumber {
    fn from_digits(digits: &str) -> Self {
        Self(digits.trim_start_matches('0').to_string())
    }

    /// Significant digits; empty for zero.
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl Ord for RoomNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for RoomNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Room {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if value.is_empty() || value.chars().any(char::is_whitespace) {
            return Err(ModelError::InvalidRoom(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn sort_key(&self) -> RoomKey {
        let split = self
            .0
            .char_indices()
            .rev()
            .take_while(|(_, ch)| ch.is_ascii_digit())
            .last()
            .map_or(self.0.len(), |(idx, _)| idx);
        let (prefix, digits) = self.0.split_at(split);
        RoomKey {
            prefix: prefix.to_string(),
            number: (!digits.is_empty()).then(|| RoomNumber::from_digits(digits)),
        }
    }
}

impl TryFrom<String> for Room {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Room> for String {
    fn from(value: Room) -> Self {
        value.0
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(room: &str) -> RoomKey {
        Room::new(room).unwrap().sort_key()
    }

    fn number(digits: &str) -> Option<RoomNumber> {
        Some(RoomNumber::from_digits(digits))
    }

    #[test]
    fn splits_prefix_and_suffix() {
        assert_eq!(
            key("N29"),
            RoomKey {
                prefix: "N".to_string(),
                number: number("29")
            }
        );
        assert_eq!(
            key("412"),
            RoomKey {
                prefix: String::new(),
                number: number("412")
            }
        );
        assert_eq!(
            key("ICU"),
            RoomKey {
                prefix: "ICU".to_string(),
                number: None
            }
        );
    }

    #[test]
    fn numeric_suffix_orders_numerically() {
        assert!(key("N9") < key("N29"));
        assert!(key("N29") < key("W1"));
        assert!(key("412") < key("A1"));
    }

    #[test]
    fn wide_suffixes_order_by_value() {
        let wide = format!("N{}", "9".repeat(25));
        assert!(key("N1") < key(&wide));
        assert!(key(&wide) < key(&format!("N1{}", "0".repeat(25))));
        assert!(key("N") < key(&wide));
    }

    #[test]
    fn leading_zeros_do_not_change_order() {
        assert_eq!(key("N007"), key("N7"));
        assert!(key("N0") < key("N01"));
        assert!(key("N010") > key("N9"));
        assert_eq!(key("N000").number.unwrap().digits(), "");
    }

    #[test]
    fn rejects_empty_and_spaced_tokens() {
        assert!(Room::new("").is_err());
        assert!(Room::new("N 29").is_err());
    }
}

//! Named extraction rules.
//!
//! Each rule pulls one field out of a trimmed line and can be exercised on
//! its own. [`ExtractionRule::ORDER`] is the sequence the parser runs them in;
//! only the length-of-stay and room rules can reject a line.

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use census_model::{Column, LengthOfStay};

use crate::error::{ProfileError, Rejection};
use crate::profile::{NameRule, RoomShape, ShapePriority, UnitRule};
use crate::tokens::Token;

/// `<digits>[.<digits>] [whitespace] Days`, case-sensitive.
static DAYS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*Days").expect("Invalid length-of-stay regex")
});

static LETTER_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\d+$").expect("Invalid letter+digits regex"));

static BARE_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}$").expect("Invalid bare numeric regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionRule {
    LengthOfStay,
    Room,
    Bed,
    Name,
    Unit,
    PatientNumber,
    TrailingText,
}

impl ExtractionRule {
    pub const ORDER: [ExtractionRule; 7] = [
        ExtractionRule::LengthOfStay,
        ExtractionRule::Room,
        ExtractionRule::Bed,
        ExtractionRule::Name,
        ExtractionRule::Unit,
        ExtractionRule::PatientNumber,
        ExtractionRule::TrailingText,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionRule::LengthOfStay => "length-of-stay",
            ExtractionRule::Room => "room",
            ExtractionRule::Bed => "bed",
            ExtractionRule::Name => "name",
            ExtractionRule::Unit => "unit",
            ExtractionRule::PatientNumber => "patient-number",
            ExtractionRule::TrailingText => "trailing-text",
        }
    }

    /// The record column this rule fills.
    pub fn column(&self) -> Column {
        match self {
            ExtractionRule::LengthOfStay => Column::LengthOfStay,
            ExtractionRule::Room => Column::Room,
            ExtractionRule::Bed => Column::Bed,
            ExtractionRule::Name => Column::Name,
            ExtractionRule::Unit => Column::Unit,
            ExtractionRule::PatientNumber => Column::PatientNumber,
            ExtractionRule::TrailingText => Column::Notes,
        }
    }
}

impl fmt::Display for ExtractionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the length-of-stay rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaysMatch {
    /// Value from the first match.
    pub length_of_stay: LengthOfStay,
    /// Byte offset where the first match starts.
    pub start: usize,
    /// Byte offset just past the first match.
    pub end: usize,
    /// Byte offset just past the last match; trailing text begins here.
    pub trailing_start: usize,
}

/// Find the first `<n> Days` match and the end of the last one.
pub fn length_of_stay(line: &str) -> Result<DaysMatch, Rejection> {
    let captures = DAYS_PATTERN
        .captures(line)
        .ok_or(Rejection::MissingLengthOfStay)?;
    let whole = captures.get(0).ok_or(Rejection::MissingLengthOfStay)?;
    let number = captures
        .get(1)
        .ok_or(Rejection::MissingLengthOfStay)?
        .as_str();
    let days: f64 = number
        .parse()
        .map_err(|_| Rejection::InvalidLengthOfStay)?;
    let length_of_stay = LengthOfStay::new(days).map_err(|_| Rejection::InvalidLengthOfStay)?;
    let trailing_start = DAYS_PATTERN
        .find_iter(line)
        .last()
        .map_or(whole.end(), |m| m.end());
    Ok(DaysMatch {
        length_of_stay,
        start: whole.start(),
        end: whole.end(),
        trailing_start,
    })
}

impl DaysMatch {
    /// Byte range of the first match.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Compile a room shape into a whole-token matcher.
pub fn compile_shape(shape: &RoomShape) -> Result<Regex, ProfileError> {
    match shape {
        RoomShape::LetterDigits => Ok(LETTER_DIGITS.clone()),
        RoomShape::BareNumeric => Ok(BARE_NUMERIC.clone()),
        RoomShape::Pattern(pattern) => {
            Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
                ProfileError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                }
            })
        }
    }
}

/// Index of the room token. Tokens overlapping `days` are never rooms.
pub fn room_index(
    tokens: &[Token<'_>],
    shapes: &[Regex],
    priority: ShapePriority,
    days: Range<usize>,
) -> Option<usize> {
    let candidate = |token: &Token<'_>, shape: &Regex| {
        !(token.start < days.end && token.end() > days.start) && shape.is_match(token.text)
    };
    match priority {
        ShapePriority::TokenOrder => tokens
            .iter()
            .position(|token| shapes.iter().any(|shape| candidate(token, shape))),
        ShapePriority::ShapeOrder => shapes
            .iter()
            .find_map(|shape| tokens.iter().position(|token| candidate(token, shape))),
    }
}

/// The token after the room, unless it is a marker or part of the Days match.
pub fn bed<'a>(
    tokens: &[Token<'a>],
    room_index: usize,
    days_start: usize,
    non_bed_markers: &[String],
) -> &'a str {
    tokens
        .get(room_index + 1)
        .filter(|token| token.start < days_start)
        .filter(|token| !non_bed_markers.iter().any(|marker| marker == token.text))
        .map_or("", |token| token.text)
}

pub fn name(line: &str, tokens: &[Token<'_>], room_index: usize, rule: &NameRule) -> String {
    if let NameRule::BeforeKeyword(keyword) = rule {
        let anchor = tokens[..room_index]
            .iter()
            .find(|token| token.text == keyword);
        if let Some(anchor) = anchor {
            return line[..anchor.start].trim().to_string();
        }
    }
    join(&tokens[..room_index])
}

pub fn unit(tokens: &[Token<'_>], room_index: usize, rule: &UnitRule) -> String {
    match rule {
        UnitRule::Keyword(keyword) => {
            if tokens.iter().any(|token| token.text == keyword) {
                keyword.clone()
            } else {
                String::new()
            }
        }
        UnitRule::Constant(value) => value.clone(),
        UnitRule::BetweenKeywordAndRoom(keyword) => tokens[..room_index]
            .iter()
            .position(|token| token.text == keyword)
            .map(|anchor| join(&tokens[anchor + 1..room_index]))
            .unwrap_or_default(),
    }
}

/// First standalone all-digit token of exactly `width` digits.
pub fn patient_number<'a>(tokens: &[Token<'a>], width: usize) -> &'a str {
    tokens
        .iter()
        .find(|token| token.text.len() == width && token.text.bytes().all(|b| b.is_ascii_digit()))
        .map_or("", |token| token.text)
}

pub fn trailing_text(line: &str, days: &DaysMatch) -> String {
    line[days.trailing_start..].trim().to_string()
}

fn join(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|token| token.text)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::tokenize;

    fn shapes(list: &[RoomShape]) -> Vec<Regex> {
        list.iter().map(|s| compile_shape(s).unwrap()).collect()
    }

    #[test]
    fn days_takes_first_value() {
        let line = "A N1 2 Days then 5 Days later";
        let days = length_of_stay(line).unwrap();
        assert_eq!(days.length_of_stay.days(), 2.0);
        assert_eq!(&line[days.trailing_start..], " later");
    }

    #[test]
    fn days_allows_missing_space() {
        let days = length_of_stay("X 12.5Days").unwrap();
        assert_eq!(days.length_of_stay.days(), 12.5);
    }

    #[test]
    fn days_is_case_sensitive() {
        assert_eq!(
            length_of_stay("N1 3 days"),
            Err(Rejection::MissingLengthOfStay)
        );
        assert_eq!(
            length_of_stay("N1 3 DAYS"),
            Err(Rejection::MissingLengthOfStay)
        );
    }

    #[test]
    fn letter_digits_needs_uppercase() {
        let compiled = shapes(&[RoomShape::LetterDigits]);
        let tokens = tokenize("n29 TR N29");
        assert_eq!(room_index(&tokens, &compiled, ShapePriority::ShapeOrder, 0..0), Some(2));
    }

    #[test]
    fn shape_order_prefers_letter_rooms() {
        let compiled = shapes(&[RoomShape::LetterDigits, RoomShape::BareNumeric]);
        let tokens = tokenize("DOE 412 W12 A");
        assert_eq!(room_index(&tokens, &compiled, ShapePriority::ShapeOrder, 0..0), Some(2));
        assert_eq!(room_index(&tokens, &compiled, ShapePriority::TokenOrder, 0..0), Some(1));
    }

    #[test]
    fn custom_pattern_is_anchored() {
        let compiled = shapes(&[RoomShape::Pattern(r"ICU-\d+".to_string())]);
        let tokens = tokenize("XICU-4 ICU-4X ICU-4");
        assert_eq!(room_index(&tokens, &compiled, ShapePriority::ShapeOrder, 0..0), Some(2));
    }

    #[test]
    fn room_skips_days_digits() {
        let compiled = shapes(&[RoomShape::LetterDigits, RoomShape::BareNumeric]);
        let line = "SMITH 100 Days Lee";
        let tokens = tokenize(line);
        let days = length_of_stay(line).unwrap();
        assert_eq!(days.span(), 6..14);
        for priority in [ShapePriority::ShapeOrder, ShapePriority::TokenOrder] {
            assert_eq!(room_index(&tokens, &compiled, priority, days.span()), None);
        }

        let line = "SMITH 412 100 Days";
        let tokens = tokenize(line);
        let days = length_of_stay(line).unwrap();
        assert_eq!(
            room_index(&tokens, &compiled, ShapePriority::ShapeOrder, days.span()),
            Some(1)
        );
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = compile_shape(&RoomShape::Pattern("(".to_string())).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidPattern { .. }));
    }

    #[test]
    fn bed_stops_at_days_match() {
        let line = "DOE N29 0.4 Days";
        let tokens = tokenize(line);
        let days = length_of_stay(line).unwrap();
        assert_eq!(bed(&tokens, 1, days.start, &[]), "");
        assert_eq!(bed(&tokens, 3, days.start, &[]), "");
    }

    #[test]
    fn bed_skips_markers() {
        let tokens = tokenize("DOE N29 Days");
        assert_eq!(bed(&tokens, 1, usize::MAX, &["Days".to_string()]), "");
        assert_eq!(bed(&tokens, 1, usize::MAX, &[]), "Days");
    }

    #[test]
    fn name_before_keyword_falls_back_to_room() {
        let line = "DOE, JANE  W4 B";
        let tokens = tokenize(line);
        let rule = NameRule::BeforeKeyword("NURS".to_string());
        assert_eq!(name(line, &tokens, 2, &rule), "DOE, JANE");
    }

    #[test]
    fn unit_between_keyword_and_room() {
        let tokens = tokenize("DOE NURS N TR N29 D");
        let rule = UnitRule::BetweenKeywordAndRoom("NURS".to_string());
        assert_eq!(unit(&tokens, 4, &rule), "N TR");
        let tokens = tokenize("DOE N29 D");
        assert_eq!(unit(&tokens, 1, &rule), "");
    }

    #[test]
    fn patient_number_requires_exact_width() {
        let tokens = tokenize("12345678 1234567890 A123456789 123456789");
        assert_eq!(patient_number(&tokens, 9), "123456789");
        assert_eq!(patient_number(&tokenize("no number"), 9), "");
    }
}

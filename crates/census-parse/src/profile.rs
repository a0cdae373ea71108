//! Parser configuration.
//!
//! A [`ParserProfile`] names every variant-specific choice the parser makes:
//! which room shapes are accepted and in which priority, how the name and
//! unit are anchored, and the patient-number width. Profiles deserialize
//! from TOML so a deployment can override a preset.

use serde::{Deserialize, Serialize};

use census_model::ReportVariant;

/// An accepted room-token shape. Shapes always match the whole token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomShape {
    /// One uppercase letter followed by digits, e.g. `N29`.
    LetterDigits,
    /// Exactly three digits, e.g. `412`.
    BareNumeric,
    /// A custom regular expression, anchored to the whole token.
    Pattern(String),
}

/// How to pick a room when tokens match different shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapePriority {
    /// Leftmost token matching any shape wins.
    TokenOrder,
    /// Earlier shapes win over later ones regardless of token position.
    #[default]
    ShapeOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameRule {
    /// Text before the keyword token; falls back to [`NameRule::BeforeRoom`]
    /// when the keyword is absent or follows the room.
    BeforeKeyword(String),
    /// Tokens preceding the room token, joined by single spaces.
    BeforeRoom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitRule {
    /// The keyword itself when present as a token, otherwise empty.
    Keyword(String),
    /// Always this value.
    Constant(String),
    /// Tokens strictly between the keyword and the room.
    BetweenKeywordAndRoom(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserProfile {
    /// Lines starting with this marker (after trimming) are skipped.
    pub comment_marker: String,
    pub room_shapes: Vec<RoomShape>,
    pub shape_priority: ShapePriority,
    pub name_rule: NameRule,
    pub unit_rule: UnitRule,
    /// Exact digit count of a standalone patient-number token.
    pub patient_number_width: usize,
    /// Tokens that are never taken as a bed.
    pub non_bed_markers: Vec<String>,
}

pub const NURSING_KEYWORD: &str = "NURS";
pub const DEFAULT_COMMENT_MARKER: &str = "#";
pub const DEFAULT_PATIENT_NUMBER_WIDTH: usize = 9;

impl ParserProfile {
    pub fn for_variant(variant: ReportVariant) -> Self {
        match variant {
            ReportVariant::Nursing => Self {
                comment_marker: DEFAULT_COMMENT_MARKER.to_string(),
                room_shapes: vec![RoomShape::LetterDigits],
                shape_priority: ShapePriority::ShapeOrder,
                name_rule: NameRule::BeforeKeyword(NURSING_KEYWORD.to_string()),
                unit_rule: UnitRule::Keyword(NURSING_KEYWORD.to_string()),
                patient_number_width: DEFAULT_PATIENT_NUMBER_WIDTH,
                non_bed_markers: vec!["Days".to_string()],
            },
            ReportVariant::Ward => Self {
                comment_marker: DEFAULT_COMMENT_MARKER.to_string(),
                room_shapes: vec![RoomShape::LetterDigits, RoomShape::BareNumeric],
                shape_priority: ShapePriority::ShapeOrder,
                name_rule: NameRule::BeforeRoom,
                unit_rule: UnitRule::Constant(String::new()),
                patient_number_width: DEFAULT_PATIENT_NUMBER_WIDTH,
                non_bed_markers: vec!["Days".to_string()],
            },
        }
    }
}

impl Default for ParserProfile {
    fn default() -> Self {
        Self::for_variant(ReportVariant::default())
    }
}

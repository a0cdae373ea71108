use thiserror::Error;

use crate::rules::ExtractionRule;

/// Why a line did not produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("blank line")]
    Blank,
    #[error("comment line")]
    Comment,
    #[error("no `<number> Days` pattern")]
    MissingLengthOfStay,
    #[error("length of stay is not a non-negative number")]
    InvalidLengthOfStay,
    #[error("no token matches an accepted room shape")]
    MissingRoom,
}

impl Rejection {
    /// Blank and comment lines are skipped, not counted as failures.
    pub fn is_skip(self) -> bool {
        matches!(self, Rejection::Blank | Rejection::Comment)
    }

    /// The extraction rule that rejected the line, if any.
    pub fn rule(self) -> Option<ExtractionRule> {
        match self {
            Rejection::Blank | Rejection::Comment => None,
            Rejection::MissingLengthOfStay | Rejection::InvalidLengthOfStay => {
                Some(ExtractionRule::LengthOfStay)
            }
            Rejection::MissingRoom => Some(ExtractionRule::Room),
        }
    }
}

/// Errors compiling a [`crate::ParserProfile`].
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid room pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("profile must accept at least one room shape")]
    NoRoomShapes,

    #[error("patient number width must be at least 1")]
    InvalidPatientNumberWidth,
}

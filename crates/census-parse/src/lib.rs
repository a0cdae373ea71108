//! Line-oriented parser for pasted census reports.
//!
//! Each line is handled independently by a fixed sequence of extraction
//! rules (see [`ExtractionRule`]). Lines that fail any required rule are
//! rejected whole; there are no partial records.

#![deny(unsafe_code)]

pub mod error;
pub mod parser;
pub mod profile;
pub mod rules;
pub mod tokens;

pub use error::{ProfileError, Rejection};
pub use parser::{LineParser, ParseOutcome, RejectionCounts};
pub use profile::{NameRule, ParserProfile, RoomShape, ShapePriority, UnitRule};
pub use rules::{DaysMatch, ExtractionRule};
pub use tokens::{Token, tokenize};

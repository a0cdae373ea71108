//! Census pipeline.
//!
//! [`CensusBoard`] is the single entry point for presentation code: hand it
//! the pasted text and the current sort keys, get back a [`CensusView`]. Each
//! call builds a fresh view; nothing is carried over between calls.

#![deny(unsafe_code)]

pub mod board;
pub mod view;

pub use board::CensusBoard;
pub use view::{CensusRow, CensusView, ParseStats};

pub use census_model::{Column, ReportVariant, SortKey, SortKeys};
pub use census_parse::{ParserProfile, ProfileError};

//! Data model for parsed census lines.
//!
//! A [`Record`] is one parsed line of a pasted census report. Records are
//! ordered by a caller-owned [`SortKeys`] list whose columns and defaults come
//! from the deployment's [`ReportVariant`].

#![deny(unsafe_code)]

pub mod column;
pub mod error;
pub mod record;
pub mod room;
pub mod sort_key;
pub mod variant;

pub use column::{Column, SortDirection};
pub use error::{ModelError, Result};
pub use record::{LengthOfStay, MARK_MAX_DAYS, MARK_MIN_DAYS, Record};
pub use room::{Room, RoomKey, RoomNumber};
pub use sort_key::{SortKey, SortKeys};
pub use variant::ReportVariant;

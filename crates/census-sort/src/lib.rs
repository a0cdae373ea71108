//! Multi-key sort and priority partition for census records.
//!
//! The engine holds no state: [`arrange`] takes the records and a
//! caller-owned [`census_model::SortKeys`] list by value and hands both back
//! in an [`Arrangement`].

#![deny(unsafe_code)]

pub mod compare;
pub mod engine;
pub mod partition;

pub use compare::{compare, compare_column, sort_records};
pub use engine::{Arrangement, arrange};
pub use partition::{LosBelow, PartitionRule};

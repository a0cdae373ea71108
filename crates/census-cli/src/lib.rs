//! CLI library components for the census board.

pub mod config;
pub mod logging;
pub mod render;

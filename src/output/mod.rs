//! Terminal output formatting
//!
//! Display utilities for the CLI reporting commands.

pub mod display;
pub mod formatters;

pub use display::{print_achievements, print_statistics};

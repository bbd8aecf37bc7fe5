//! Output formatting for resolved subnets.
//!
//! - [`terminal`] - banner, usage, text report and error hint
//! - [`json`] - machine readable report

pub mod json;
pub mod terminal;

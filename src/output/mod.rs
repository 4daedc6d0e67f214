//! Output for the dump: the JSON report file and console summaries

pub mod formatters;
pub mod json;
pub mod table;

//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::report::Report;

/// One summary row per account
#[derive(Debug, Tabled)]
pub struct AccountSummary {
    #[tabled(rename = "ACCOUNT")]
    pub account: String,
    #[tabled(rename = "CONTEXTS")]
    pub contexts: usize,
    #[tabled(rename = "CONTEXT VARS")]
    pub context_variables: usize,
    #[tabled(rename = "PROJECTS")]
    pub projects: usize,
    #[tabled(rename = "PROJECT VARS")]
    pub project_variables: usize,
    #[tabled(rename = "KEYS")]
    pub keys: usize,
}

/// Summarize every account in the report.
pub fn summary_rows(report: &Report) -> Vec<AccountSummary> {
    report
        .iter()
        .map(|(name, data)| AccountSummary {
            account: name.to_string(),
            contexts: data.contexts.len(),
            context_variables: data.context_variable_count(),
            projects: data.projects.len(),
            project_variables: data.project_variable_count(),
            keys: data.key_count(),
        })
        .collect()
}

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No accounts found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

//! Reusable formatting utilities for console output

use crate::client::VcsProvider;

/// Progress heading for one account.
///
/// `index` is zero-based; the heading shows it one-based.
///
/// # Example output
/// `[2/5] GitHub organization acme`
pub fn format_account_heading(
    provider: VcsProvider,
    account_name: &str,
    index: usize,
    total: usize,
) -> String {
    format!(
        "[{}/{}] {} organization {}",
        index + 1,
        total,
        provider.display_name(),
        account_name
    )
}

/// Pluralize a count, e.g. `1 context`, `3 contexts`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

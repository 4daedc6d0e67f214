//! Dump command implementation

use colored::Colorize;
use log::info;

use crate::client::CircleApi;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::formatters::plural;
use crate::output::json::write_json_file;
use crate::output::table::{format_table, summary_rows};
use crate::report::collect_report;

/// Run the full dump: list accounts, walk each one, write the report.
///
/// A non-2xx answer to the collaborations call is fatal and nothing is
/// written. Any later failure also aborts before the report file is touched.
pub async fn run<C>(client: &C, config: &Config) -> Result<()>
where
    C: CircleApi + ?Sized,
{
    println!("{}", "Fetching accessible organizations...".cyan());
    let response = client.list_collaborations().await?;

    if !response.is_success() {
        return Err(Error::Fatal(format!(
            "Failed to list organizations (HTTP {}): {}",
            response.status(),
            response.raw().trim()
        )));
    }

    let accounts = response.into_data()?;
    println!("Found {}\n", plural(accounts.len(), "organization"));

    let report = collect_report(client, &accounts, &config.app_url).await?;

    write_json_file(&report, &config.output_path)?;
    info!(
        "Wrote {} to {}",
        plural(report.len(), "account"),
        config.output_path.display()
    );

    println!("\n{}", format_table(&summary_rows(&report)));
    println!(
        "\n{} Report written to {}",
        "✓".green(),
        config.output_path.display().to_string().bold()
    );

    Ok(())
}

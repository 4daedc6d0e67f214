//! Sequential walk over every account the token can see
//!
//! For each account: contexts, then each context's variables, then projects,
//! then each project's variables and checkout keys. Calls are issued one at
//! a time; the first failure aborts the whole walk.

use colored::Colorize;
use log::{debug, info};

use super::{AccountData, ContextEntry, KeyEntry, ProjectEntry, Report, context_url, project_url};
use crate::client::{CircleApi, Collaboration, VcsProvider, collect_all};
use crate::error::Result;
use crate::output::formatters::format_account_heading;

/// Build the report for `accounts`, in order.
///
/// Every account's provider tag is checked before the first request, so an
/// unrecognized tag aborts without any per-account calls.
pub async fn collect_report<C>(
    client: &C,
    accounts: &[Collaboration],
    app_url: &str,
) -> Result<Report>
where
    C: CircleApi + ?Sized,
{
    let providers = accounts
        .iter()
        .map(Collaboration::provider)
        .collect::<Result<Vec<VcsProvider>>>()?;

    let mut report = Report::new();
    let total = accounts.len();

    for (index, (account, provider)) in accounts.iter().zip(providers).enumerate() {
        println!(
            "{}",
            format_account_heading(provider, &account.name, index, total).bold()
        );

        let data = collect_account(client, account, app_url).await?;
        info!(
            "Account '{}': {} contexts, {} projects",
            account.name,
            data.contexts.len(),
            data.projects.len()
        );
        report.push(account.name.clone(), data);
    }

    Ok(report)
}

/// Fetch everything for one account.
async fn collect_account<C>(
    client: &C,
    account: &Collaboration,
    app_url: &str,
) -> Result<AccountData>
where
    C: CircleApi + ?Sized,
{
    let contexts = collect_all(|cursor: Option<String>| async move {
        client.list_contexts(&account.id, cursor.as_deref()).await
    })
    .await?;
    debug!("Account '{}' has {} contexts", account.name, contexts.len());

    let mut context_entries = Vec::with_capacity(contexts.len());
    for context in contexts {
        let context_id = context.id.as_str();
        let variables = collect_all(|cursor: Option<String>| async move {
            client
                .list_context_variables(context_id, cursor.as_deref())
                .await
        })
        .await?;

        println!(
            "  {} {} ({} variables)",
            "context".cyan(),
            context.name,
            variables.len()
        );

        context_entries.push(ContextEntry {
            url: context_url(app_url, &account.slug, &context.id),
            id: context.id,
            name: context.name,
            variables: variables.into_iter().map(|v| v.variable).collect(),
        });
    }

    let projects = collect_all(|cursor: Option<String>| async move {
        client.list_projects(&account.id, cursor.as_deref()).await
    })
    .await?;
    debug!("Account '{}' has {} projects", account.name, projects.len());

    let mut project_entries = Vec::with_capacity(projects.len());
    for project in projects {
        let slug = project.slug.as_str();

        let variables = collect_all(|cursor: Option<String>| async move {
            client.list_project_variables(slug, cursor.as_deref()).await
        })
        .await?;

        let keys = collect_all(|cursor: Option<String>| async move {
            client.list_checkout_keys(slug, cursor.as_deref()).await
        })
        .await?;

        println!(
            "  {} {} ({} variables, {} keys)",
            "project".green(),
            project.slug,
            variables.len(),
            keys.len()
        );

        project_entries.push(ProjectEntry {
            url: project_url(app_url, &project.slug),
            name: project.name,
            slug: project.slug,
            variables: variables.into_iter().map(|v| v.name).collect(),
            keys: keys.into_iter().map(KeyEntry::from).collect(),
        });
    }

    Ok(AccountData {
        contexts: context_entries,
        projects: project_entries,
        unavailable: Vec::new(),
    })
}

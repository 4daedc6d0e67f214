//! Cursor pagination for CircleCI list endpoints
//!
//! Every v2 list endpoint returns `{ "items": [...], "next_page_token": ... }`.
//! [`pages`] turns a single-page fetch function into a lazy stream of pages,
//! and [`collect_all`] drains that stream into one ordered vector.

use std::future::Future;

use futures::stream::{self, Stream, TryStreamExt};
use log::debug;
use serde::{Deserialize, Serialize};

use super::ApiResponse;
use crate::error::{Error, Result};

/// Query parameter carrying the cursor on every list endpoint.
pub const PAGE_TOKEN_PARAM: &str = "page-token";

/// A single page returned by a list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page
    pub items: Vec<T>,

    /// Cursor for the next page; null or absent on the last page
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    /// Create a page with an optional cursor to the next one.
    #[cfg(test)]
    pub fn new(items: Vec<T>, next_page_token: Option<&str>) -> Self {
        Self {
            items,
            next_page_token: next_page_token.map(str::to_string),
        }
    }

    /// Create a terminal page.
    #[cfg(test)]
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }

    /// Cursor for the next page. An empty token counts as no cursor.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Where the next fetch should start.
enum Cursor {
    Start,
    Next(String),
    Exhausted,
}

/// Lazily walk a paginated endpoint, yielding one item vector per page.
///
/// `fetch` receives `None` for the first page and the previous page's cursor
/// afterwards. The stream ends after the first page without a cursor; a
/// non-2xx page ends it with an error. Restarting means calling `pages`
/// again.
pub fn pages<T, F, Fut>(mut fetch: F) -> impl Stream<Item = Result<Vec<T>>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ApiResponse<Page<T>>>>,
{
    stream::try_unfold(Cursor::Start, move |cursor| {
        let request = match cursor {
            Cursor::Start => Some(fetch(None)),
            Cursor::Next(token) => Some(fetch(Some(token))),
            Cursor::Exhausted => None,
        };

        async move {
            let Some(request) = request else {
                return Ok::<_, Error>(None);
            };

            let page = request.await?.into_data()?;
            let next = match page.next_cursor() {
                Some(token) => Cursor::Next(token.to_string()),
                None => Cursor::Exhausted,
            };
            debug!(
                "Fetched page with {} items (more: {})",
                page.items.len(),
                matches!(next, Cursor::Next(_))
            );

            Ok(Some((page.items, next)))
        }
    })
}

/// Fetch every page of an endpoint and concatenate the items in order.
pub async fn collect_all<T, F, Fut>(fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ApiResponse<Page<T>>>>,
{
    let items: Vec<T> = pages(fetch).try_concat().await?;
    debug!("Collected {} items across all pages", items.len());
    Ok(items)
}

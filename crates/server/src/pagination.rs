//! Cursor-driven page walks.
//!
//! Shopify list endpoints return a page of nodes plus `pageInfo
//! { hasNextPage, endCursor }`. [`paginate`] drives a page-fetch function
//! either once or to completion, feeding every page into an
//! [`Aggregator`](crate::aggregate::Aggregator).
//!
//! Pages are fetched strictly one after another; the cursor returned by one
//! page is the only input to the next fetch.

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::Aggregator;
use crate::shopify::{Connection, PageInfo};

/// Opaque continuation token returned by a paginated endpoint.
///
/// Only ever passed back to the upstream verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Cursor {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How far to walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// Exactly one fetch.
    #[default]
    FirstPage,
    /// Keep fetching until the upstream reports no further pages.
    All,
}

impl FetchMode {
    #[must_use]
    pub const fn from_fetch_all(fetch_all: bool) -> Self {
        if fetch_all { Self::All } else { Self::FirstPage }
    }
}

/// One fetched page.
///
/// `header` carries the descriptive fields that accompany the page (e.g. the
/// collection a product page belongs to).
#[derive(Debug, Clone)]
pub struct Page<T, H = ()> {
    pub header: H,
    pub items: Vec<T>,
    pub end_cursor: Option<Cursor>,
    pub has_next_page: bool,
}

impl<T, H> Page<T, H> {
    /// Unwrap a Relay connection into a page.
    #[must_use]
    pub fn from_connection(header: H, connection: Connection<T>) -> Self {
        let PageInfo {
            has_next_page,
            end_cursor,
        } = connection.page_info;
        Self {
            header,
            items: connection.edges.into_iter().map(|e| e.node).collect(),
            end_cursor: end_cursor.map(Cursor::from),
            has_next_page,
        }
    }
}

/// Summary of a finished walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk<H> {
    /// Header of the last page fetched.
    pub header: H,
    /// Number of fetches issued.
    pub pages: usize,
}

/// Drive `fetch` from the first page, feeding each page to `aggregator`.
///
/// With [`FetchMode::FirstPage`] exactly one fetch is made. With
/// [`FetchMode::All`] fetching continues while the page reports
/// `has_next_page` and carries an end cursor.
///
/// # Errors
///
/// The first failing fetch aborts the walk; everything accumulated so far is
/// dropped and the error is returned unchanged.
pub async fn paginate<T, H, A, E, F, Fut>(
    mode: FetchMode,
    mut aggregator: A,
    mut fetch: F,
) -> Result<(A::Output, Walk<H>), E>
where
    A: Aggregator<T>,
    F: FnMut(Option<Cursor>) -> Fut,
    Fut: Future<Output = Result<Page<T, H>, E>>,
{
    let mut cursor: Option<Cursor> = None;
    let mut pages = 0_usize;

    loop {
        let page = fetch(cursor.take()).await?;
        pages += 1;

        debug!(
            page = pages,
            items = page.items.len(),
            has_next_page = page.has_next_page,
            "Fetched page"
        );

        aggregator.absorb(page.items);

        match (mode, page.has_next_page, page.end_cursor) {
            (FetchMode::All, true, Some(next)) => cursor = Some(next),
            _ => {
                return Ok((
                    aggregator.finish(),
                    Walk {
                        header: page.header,
                        pages,
                    },
                ));
            }
        }
    }
}

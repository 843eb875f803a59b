//! Offset-Based Pagination.
//!
//! Drives a caller-supplied page fetcher until the backend stops reporting a
//! next page, accumulating every row along the way. No I/O happens here; the
//! fetcher decides how pages are retrieved.

use serde::Deserialize;
use std::future::Future;
use tracing::{debug, trace};

/// One page as returned by a fetcher.
///
/// `next_page` is the offset to request next. `None` or `Some(0)` ends the
/// walk. When deserializing, the camel-case `nextPage` key is accepted too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
    #[serde(default, alias = "nextPage")]
    pub next_page: Option<u64>,
}

impl<T> Page<T> {
    /// A page with no successor.
    pub fn last(rows: Vec<T>) -> Self {
        Self { rows, next_page: None }
    }

    /// A page followed by another one starting at `next_page`.
    pub fn with_next(rows: Vec<T>, next_page: u64) -> Self {
        Self { rows, next_page: Some(next_page) }
    }

    fn next_offset(&self) -> Option<u64> {
        self.next_page.filter(|&offset| offset != 0)
    }
}

/// Fetches pages starting at `offset` until no next page is reported.
///
/// After each page `on_page` is called with every row collected so far and
/// with the rows that page contributed. The first fetch error is returned
/// as-is and no further pages are requested.
///
/// # Examples
/// ```
/// use utilbelt_core::utils::pagination::{paginate, Page};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let rows = paginate(
///     |offset, _limit| async move {
///         Ok::<_, String>(if offset == 0 {
///             Page::with_next(vec![1, 2], 2)
///         } else {
///             Page::last(vec![3])
///         })
///     },
///     0,
///     2,
///     |_all, _new| {},
/// )
/// .await
/// .unwrap();
/// assert_eq!(rows, vec![1, 2, 3]);
/// # }
/// ```
pub async fn paginate<T, E, F, Fut, C>(
    mut fetch: F,
    offset: u64,
    limit: u64,
    mut on_page: C,
) -> Result<Vec<T>, E>
where
    F: FnMut(u64, u64) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
    C: FnMut(&[T], &[T]),
{
    let mut output = Vec::new();
    let mut offset = offset;
    let mut pages = 0usize;

    loop {
        trace!(offset, limit, "Fetching page");
        let page = fetch(offset, limit).await?;
        pages += 1;

        let next = page.next_offset();
        let start = output.len();
        output.extend(page.rows);
        on_page(output.as_slice(), &output[start..]);

        match next {
            Some(next_offset) => offset = next_offset,
            None => break,
        }
    }

    debug!(pages, rows = output.len(), "Pagination complete");
    Ok(output)
}

/// [`paginate`] without a progress callback.
pub async fn collect_pages<T, E, F, Fut>(fetch: F, offset: u64, limit: u64) -> Result<Vec<T>, E>
where
    F: FnMut(u64, u64) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    paginate(fetch, offset, limit, |_, _| {}).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Serves `total` sequential integers in pages of `limit`.
    async fn numbers(total: u64, offset: u64, limit: u64) -> Result<Page<u64>, String> {
        let end = (offset + limit).min(total);
        let rows = (offset..end).collect();
        Ok(if end < total {
            Page::with_next(rows, end)
        } else {
            Page::last(rows)
        })
    }

    #[tokio::test]
    async fn test_paginate_collects_all_pages() {
        let mut calls = Vec::new();
        let rows = paginate(
            |offset, limit| {
                calls.push(offset);
                numbers(7, offset, limit)
            },
            0,
            3,
            |_, _| {},
        )
        .await
        .unwrap();

        assert_eq!(rows, (0..7).collect::<Vec<_>>());
        assert_eq!(calls, vec![0, 3, 6]);
    }

    #[tokio::test]
    async fn test_paginate_reports_progress() {
        let mut seen = Vec::new();
        paginate(
            |offset, limit| numbers(5, offset, limit),
            0,
            2,
            |all, new| seen.push((all.len(), new.to_vec())),
        )
        .await
        .unwrap();

        assert_eq!(
            seen,
            vec![(2, vec![0, 1]), (4, vec![2, 3]), (5, vec![4])]
        );
    }

    #[tokio::test]
    async fn test_paginate_starts_at_offset() {
        let rows = collect_pages(|offset, limit| numbers(6, offset, limit), 4, 10)
            .await
            .unwrap();
        assert_eq!(rows, vec![4, 5]);
    }

    #[tokio::test]
    async fn test_paginate_zero_next_page_stops() {
        let mut calls = 0;
        let rows = collect_pages(
            |_, _| {
                calls += 1;
                async { Ok::<_, String>(Page { rows: vec!["a"], next_page: Some(0) }) }
            },
            0,
            1,
        )
        .await
        .unwrap();
        assert_eq!(rows, vec!["a"]);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_paginate_propagates_fetch_error() {
        let mut calls = 0;
        let result: Result<Vec<u64>, String> = collect_pages(
            |offset, limit| {
                calls += 1;
                async move {
                    if offset >= 2 {
                        Err(format!("backend refused offset {offset}"))
                    } else {
                        numbers(10, offset, limit).await
                    }
                }
            },
            0,
            2,
        )
        .await;

        assert_eq!(result, Err("backend refused offset 2".to_string()));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_page_deserializes_camel_case_alias() {
        let page: Page<u32> = serde_json::from_str(r#"{"rows": [1, 2], "nextPage": 20}"#).unwrap();
        assert_eq!(page, Page::with_next(vec![1, 2], 20));

        let page: Page<u32> = serde_json::from_str(r#"{"rows": [3], "next_page": null}"#).unwrap();
        assert_eq!(page, Page::last(vec![3]));

        let page: Page<u32> = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(page, Page::last(vec![]));
    }
}

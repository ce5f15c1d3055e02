//! Offset pagination over paged listing endpoints.
//!
//! A [`Paginator`] walks a `(limit, offset)` listing one page at a time and
//! hands out items lazily. It stops on an empty page or on a page shorter
//! than the page size. It never backtracks or deduplicates, so items inserted
//! or removed remotely between pages may be skipped or repeated.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::error::Error;

/// Field holding the page items in a listing response.
pub const DEFAULT_ITEMS_FIELD: &str = "data";

/// Future returned by a page fetcher.
pub type PageFuture<'a> = Pin<Box<dyn Future<Output = Result<Value, Error>> + 'a>>;

type PageFetcher<'a> = Box<dyn FnMut(u32, u64) -> PageFuture<'a> + 'a>;

/// Lazy sequence of items drawn from a paged listing operation.
///
/// # Example
///
/// ```rust,ignore
/// let mut lists = client.lists().iter(0, 100)?;
/// while let Some(list) = lists.next_item().await? {
///     println!("{list}");
/// }
/// ```
pub struct Paginator<'a> {
    fetch: PageFetcher<'a>,
    page_size: u32,
    offset: u64,
    items_field: &'static str,
    buffer: VecDeque<Value>,
    exhausted: bool,
    pages_fetched: usize,
}

impl<'a> Paginator<'a> {
    /// Create a paginator over `fetch`, called as `fetch(limit, offset)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `page_size` is zero.
    pub fn new<F>(page_size: u32, fetch: F) -> Result<Self, Error>
    where
        F: FnMut(u32, u64) -> PageFuture<'a> + 'a,
    {
        if page_size == 0 {
            return Err(Error::Validation("page size must be > 0".to_string()));
        }

        Ok(Self {
            fetch: Box::new(fetch),
            page_size,
            offset: 0,
            items_field: DEFAULT_ITEMS_FIELD,
            buffer: VecDeque::new(),
            exhausted: false,
            pages_fetched: 0,
        })
    }

    /// Read items from `field` instead of `"data"`.
    #[must_use]
    pub fn with_items_field(mut self, field: &'static str) -> Self {
        self.items_field = field;
        self
    }

    /// Get the next item, fetching another page when the current one is used up.
    ///
    /// Returns `Ok(None)` once the listing is exhausted. After an error the
    /// paginator is exhausted as well.
    ///
    /// # Errors
    ///
    /// Returns the error of the failed page request.
    pub async fn next_item(&mut self) -> Result<Option<Value>, Error> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            if self.exhausted {
                return Ok(None);
            }
            self.fetch_page().await?;
        }
    }

    /// Drain every remaining item.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failed page request.
    pub async fn collect_all(mut self) -> Result<Vec<Value>, Error> {
        let mut items = Vec::new();
        while let Some(item) = self.next_item().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Number of page requests issued so far.
    #[must_use]
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Offset of the next page request.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    async fn fetch_page(&mut self) -> Result<(), Error> {
        let response = match (self.fetch)(self.page_size, self.offset).await {
            Ok(response) => response,
            Err(e) => {
                self.exhausted = true;
                return Err(e);
            }
        };
        self.pages_fetched += 1;

        let items = take_items(response, self.items_field);
        if items.is_empty() {
            self.exhausted = true;
            return Ok(());
        }

        if items.len() < self.page_size as usize {
            self.exhausted = true;
        } else {
            self.offset += u64::from(self.page_size);
        }
        self.buffer.extend(items);
        Ok(())
    }
}

/// Pull the item array out of a page, treating anything else as empty.
fn take_items(response: Value, field: &str) -> Vec<Value> {
    match response {
        Value::Object(mut map) => match map.remove(field) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Serve canned pages and record every `(limit, offset)` call.
    fn paged<'a>(
        pages: Vec<Value>,
        calls: Rc<RefCell<Vec<(u32, u64)>>>,
    ) -> impl FnMut(u32, u64) -> PageFuture<'a> + 'a {
        let mut pages = VecDeque::from(pages);
        move |limit, offset| -> PageFuture<'a> {
            calls.borrow_mut().push((limit, offset));
            let page = pages.pop_front().unwrap_or_else(|| json!({ "data": [] }));
            Box::pin(async move { Ok::<_, Error>(page) })
        }
    }

    #[tokio::test]
    async fn test_short_page_stops_without_extra_call() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let paginator = Paginator::new(
            2,
            paged(
                vec![
                    json!({ "data": [{ "id": 1 }, { "id": 2 }] }),
                    json!({ "data": [{ "id": 3 }] }),
                ],
                Rc::clone(&calls),
            ),
        )
        .expect("valid page size");

        let items = paginator.collect_all().await.expect("pages should load");

        assert_eq!(items, vec![json!({ "id": 1 }), json!({ "id": 2 }), json!({ "id": 3 })]);
        assert_eq!(*calls.borrow(), vec![(2, 0), (2, 2)]);
    }

    #[tokio::test]
    async fn test_full_last_page_needs_one_more_call() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let paginator = Paginator::new(
            2,
            paged(
                vec![
                    json!({ "data": [{ "id": 1 }, { "id": 2 }] }),
                    json!({ "data": [{ "id": 3 }, { "id": 4 }] }),
                ],
                Rc::clone(&calls),
            ),
        )
        .expect("valid page size");

        let items = paginator.collect_all().await.expect("pages should load");

        assert_eq!(items.len(), 4);
        assert_eq!(*calls.borrow(), vec![(2, 0), (2, 2), (2, 4)]);
    }

    #[tokio::test]
    async fn test_empty_first_page() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut paginator =
            Paginator::new(100, paged(vec![json!({ "data": [] })], Rc::clone(&calls)))
                .expect("valid page size");

        assert!(paginator.next_item().await.expect("page should load").is_none());
        assert!(paginator.next_item().await.expect("still exhausted").is_none());
        assert_eq!(paginator.pages_fetched(), 1);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_or_null_items_field_is_empty() {
        for page in [json!({}), json!({ "data": null }), json!({ "data": "x" }), json!([1])] {
            let calls = Rc::new(RefCell::new(Vec::new()));
            let paginator = Paginator::new(10, paged(vec![page], Rc::clone(&calls)))
                .expect("valid page size");

            assert!(paginator.collect_all().await.expect("page loads").is_empty());
            assert_eq!(calls.borrow().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_custom_items_field() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let paginator = Paginator::new(
            5,
            paged(vec![json!({ "profiles": [{ "id": 9 }] })], Rc::clone(&calls)),
        )
        .expect("valid page size")
        .with_items_field("profiles");

        let items = paginator.collect_all().await.expect("page loads");
        assert_eq!(items, vec![json!({ "id": 9 })]);
    }

    #[tokio::test]
    async fn test_error_exhausts_paginator() {
        let mut paginator = Paginator::new(1, |_, _| -> PageFuture<'static> {
            Box::pin(async { Err::<Value, _>(Error::Http("connection reset".to_string())) })
        })
        .expect("valid page size");

        assert!(paginator.next_item().await.is_err());
        assert!(paginator.next_item().await.expect("exhausted").is_none());
        assert_eq!(paginator.pages_fetched(), 0);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = Paginator::new(0, |_, _| -> PageFuture<'static> {
            Box::pin(async { Ok::<_, Error>(json!({})) })
        });
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}

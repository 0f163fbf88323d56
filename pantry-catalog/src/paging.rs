use serde::Serialize;
use tracing::{debug, error};

use crate::product::{CatalogError, Category, Product, ProductFeed};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The `page`-th (1-based) slice of `products`. Empty past the end.
pub fn page_slice(products: &[Product], page: usize, page_size: usize) -> &[Product] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= products.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(products.len());
    &products[start..end]
}

/// Client-side pagination state for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCursor {
    pub category: Category,
    /// Next page to load, 1-based.
    pub page: usize,
    pub page_size: usize,
    /// Everything loaded so far, in page order.
    pub items: Vec<Product>,
    pub exhausted: bool,
}

impl PageCursor {
    pub fn new(category: Category, page_size: usize) -> Self {
        Self {
            category,
            page: 1,
            page_size: page_size.max(1),
            items: Vec::new(),
            exhausted: false,
        }
    }

    /// A fresh cursor for another category, keeping the page size.
    pub fn reset(&self, category: Category) -> Self {
        Self::new(category, self.page_size)
    }

    /// Append the current page of `fetched` and move to the next one.
    pub fn advance(&self, fetched: &[Product]) -> Self {
        let slice = page_slice(fetched, self.page, self.page_size);
        let mut next = self.clone();

        if slice.is_empty() {
            next.exhausted = true;
            return next;
        }

        next.items.extend_from_slice(slice);
        next.page += 1;
        next.exhausted = next.items.len() >= fetched.len();
        next
    }
}

/// Fetch the category list and advance `cursor` by one page.
///
/// On failure the caller keeps its current cursor.
pub async fn fetch_next_page(
    feed: &dyn ProductFeed,
    cursor: &PageCursor,
) -> Result<PageCursor, CatalogError> {
    if cursor.exhausted {
        return Ok(cursor.clone());
    }

    let fetched = feed.fetch(cursor.category).await.map_err(|e| {
        error!("Error loading {} products: {}", cursor.category, e);
        e
    })?;

    let next = cursor.advance(&fetched);
    debug!(
        "Loaded page {} of {} ({} items total)",
        cursor.page,
        cursor.category,
        next.items.len()
    );
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    fn products(category: Category, count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| Product {
                id: Uuid::new_v4(),
                category,
                name: format!("item-{}", i),
                price: "Rs. 10.00".to_string(),
                image: None,
            })
            .collect()
    }

    struct CountingFeed {
        items: Vec<Product>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ProductFeed for CountingFeed {
        async fn fetch(&self, _category: Category) -> Result<Vec<Product>, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.items.clone())
        }
    }

    struct DownFeed;

    #[async_trait]
    impl ProductFeed for DownFeed {
        async fn fetch(&self, _category: Category) -> Result<Vec<Product>, CatalogError> {
            Err(CatalogError::FeedError("Network request failed".to_string()))
        }
    }

    #[test]
    fn test_page_slice_bounds() {
        let all = products(Category::Meat, 25);
        assert_eq!(page_slice(&all, 1, 10).len(), 10);
        assert_eq!(page_slice(&all, 3, 10).len(), 5);
        assert!(page_slice(&all, 4, 10).is_empty());
        assert_eq!(page_slice(&all, 3, 10)[0].name, "item-20");
    }

    #[test]
    fn test_advance_appends_in_order() {
        let all = products(Category::Vegetables, 23);
        let cursor = PageCursor::new(Category::Vegetables, DEFAULT_PAGE_SIZE);

        let first = cursor.advance(&all);
        assert_eq!(first.page, 2);
        assert_eq!(first.items.len(), 10);
        assert!(!first.exhausted);

        let second = first.advance(&all);
        let third = second.advance(&all);
        assert_eq!(third.items.len(), 23);
        assert!(third.exhausted);

        let names: Vec<_> = third.items.iter().map(|p| p.name.clone()).collect();
        let expected: Vec<_> = all.iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, expected);

        // Original cursor untouched
        assert_eq!(cursor.page, 1);
        assert!(cursor.items.is_empty());
    }

    #[test]
    fn test_advance_past_end_marks_exhausted() {
        let all = products(Category::Meat, 10);
        let cursor = PageCursor::new(Category::Meat, 10).advance(&all);
        assert!(cursor.exhausted);

        let again = PageCursor { exhausted: false, ..cursor.clone() }.advance(&all);
        assert!(again.exhausted);
        assert_eq!(again.page, cursor.page);
        assert_eq!(again.items.len(), 10);
    }

    #[test]
    fn test_reset_on_category_change() {
        let all = products(Category::Meat, 15);
        let cursor = PageCursor::new(Category::Meat, 5).advance(&all);
        let fresh = cursor.reset(Category::Vegetables);

        assert_eq!(fresh.category, Category::Vegetables);
        assert_eq!(fresh.page, 1);
        assert_eq!(fresh.page_size, 5);
        assert!(fresh.items.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_next_page_stops_when_exhausted() {
        let feed = CountingFeed {
            items: products(Category::Meat, 12),
            calls: AtomicUsize::new(0),
        };
        let cursor = PageCursor::new(Category::Meat, 10);

        let cursor = fetch_next_page(&feed, &cursor).await.unwrap();
        let cursor = fetch_next_page(&feed, &cursor).await.unwrap();
        assert!(cursor.exhausted);
        assert_eq!(cursor.items.len(), 12);

        let cursor = fetch_next_page(&feed, &cursor).await.unwrap();
        assert_eq!(cursor.items.len(), 12);
        assert_eq!(feed.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_cursor() {
        let cursor = PageCursor::new(Category::Vegetables, 10);
        let result = fetch_next_page(&DownFeed, &cursor).await;

        assert!(matches!(result, Err(CatalogError::FeedError(_))));
        assert_eq!(cursor.page, 1);
    }
}

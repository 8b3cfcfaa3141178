//! Pagination shapes.

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// Offset-paginated list: `{ total, records }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct PageResult<T> {
    /// Total number of matching records.
    #[serde(deserialize_with = "null_as_default")]
    pub total: i64,
    /// Records on this page.
    #[serde(deserialize_with = "null_as_default")]
    pub records: Vec<T>,
}

impl<T> PageResult<T> {
    /// Number of pages for the given page size.
    pub fn total_pages(&self, page_size: u32) -> u32 {
        if page_size == 0 || self.total <= 0 {
            return 0;
        }
        let pages = (self.total + i64::from(page_size) - 1) / i64::from(page_size);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

/// Cursor-paginated feed: `{ cursor, offset, records }`.
///
/// Pass `cursor` and `offset` back unchanged to fetch the next page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ScrollResult<T> {
    /// Position marker for the next page.
    #[serde(deserialize_with = "null_as_default")]
    pub cursor: i64,
    /// Number of records at `cursor` already returned.
    #[serde(deserialize_with = "null_as_default")]
    pub offset: i64,
    /// Records on this page.
    #[serde(deserialize_with = "null_as_default")]
    pub records: Vec<T>,
}

impl<T> ScrollResult<T> {
    /// Whether the feed returned nothing, meaning the end was reached.
    pub fn is_exhausted(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let page: PageResult<()> = PageResult {
            total: 21,
            records: Vec::new(),
        };
        assert_eq!(page.total_pages(10), 3);
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(PageResult::<()>::default().total_pages(10), 0);
    }

    #[test]
    fn test_scroll_result_defaults() {
        let feed: ScrollResult<i32> = serde_json::from_str(r#"{"cursor":17}"#).unwrap();
        assert_eq!(feed.cursor, 17);
        assert_eq!(feed.offset, 0);
        assert!(feed.is_exhausted());
    }
}

//! Page envelope for listings.

/// One page of a listing: the items plus the figures needed to render a pager.
///
/// `total_count` is observed separately from the item fetch and is therefore
/// a best-effort figure under concurrent writes. `page_number` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageList<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_number: u32,
    pub page_size: u32,
}

impl<T> PageList<T> {
    /// Creates a page envelope.
    pub fn new(items: Vec<T>, total_count: u64, page_number: u32, page_size: u32) -> Self {
        Self {
            items,
            total_count,
            page_number,
            page_size,
        }
    }

    /// Total number of pages at the requested page size.
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(u64::from(self.page_size))
    }

    /// True when a later page still holds items.
    pub fn has_next(&self) -> bool {
        u64::from(self.page_number) < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page = PageList::new(vec![1, 2], 5, 1, 2);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
    }

    #[test]
    fn last_page_has_no_next() {
        let page = PageList::new(vec![5], 5, 3, 2);
        assert!(!page.has_next());
    }

    #[test]
    fn zero_page_size_yields_zero_pages() {
        let page: PageList<i32> = PageList::new(Vec::new(), 10, 1, 0);
        assert_eq!(page.total_pages(), 0);
    }
}

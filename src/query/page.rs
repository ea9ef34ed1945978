//! Pagination over the filtered and sorted sequence

use std::num::NonZeroUsize;

/// 1-based page number and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    page: NonZeroUsize,
    limit: NonZeroUsize,
}

impl PageSpec {
    pub fn new(page: NonZeroUsize, limit: NonZeroUsize) -> Self {
        Self { page, limit }
    }

    /// Build from plain numbers, `None` if either is zero
    pub fn from_numbers(page: usize, limit: usize) -> Option<Self> {
        Some(Self::new(NonZeroUsize::new(page)?, NonZeroUsize::new(limit)?))
    }

    pub fn page(&self) -> usize {
        self.page.get()
    }

    pub fn limit(&self) -> usize {
        self.limit.get()
    }

    /// Number of pages needed for `total` records
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.limit())
    }

    /// Extract the half-open range `[(page-1)*limit, page*limit)`
    ///
    /// A page past the end yields an empty vector.
    pub fn slice<T>(&self, mut records: Vec<T>) -> Vec<T> {
        let start = (self.page() - 1).saturating_mul(self.limit());
        if start >= records.len() {
            return Vec::new();
        }

        let end = start.saturating_add(self.limit()).min(records.len());
        records.truncate(end);
        records.split_off(start)
    }
}

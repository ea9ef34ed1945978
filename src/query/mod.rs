//! Generic query engine: filter, then sort, then page
//!
//! The engine works on a snapshot `Vec<T>` handed over by the store. It takes
//! no locks and never mutates shared state, so concurrent queries are safe.
//!
//! ```rust,ignore
//! let query = RecordQuery::new(PageSpec::from_numbers(1, 10).unwrap())
//!     .with_filter("name::eng.*")
//!     .with_sort("-id");
//! let page = query::execute(groups, &query)?;
//! ```

pub mod filter;
pub mod page;
pub mod params;
pub mod sort;

pub use filter::{FilterPredicate, FilterSpec};
pub use page::PageSpec;
pub use params::QueryParams;
pub use sort::{Direction, SortKey, SortSpec};

use crate::core::entity::Record;
use crate::core::error::QueryError;

/// A complete list query for one record type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    pub page: PageSpec,
    pub filter: Option<String>,
    pub sort: Option<String>,
}

impl RecordQuery {
    pub fn new(page: PageSpec) -> Self {
        Self {
            page,
            filter: None,
            sort: None,
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

/// Run `filter → sort → page` over a snapshot of records
///
/// Either the whole pipeline succeeds or no slice is returned.
pub fn execute<T: Record>(records: Vec<T>, query: &RecordQuery) -> Result<Vec<T>, QueryError> {
    let filter = FilterSpec::parse(query.filter.as_deref())?;
    let sort = SortSpec::parse(query.sort.as_deref());

    let total = records.len();
    let filtered = filter.apply(records);
    let matched = filtered.len();
    let sorted = sort.apply(filtered);
    let page = query.page.slice(sorted);

    tracing::debug!(
        resource = T::resource_name(),
        total,
        matched,
        returned = page.len(),
        page = query.page.page(),
        limit = query.page.limit(),
        "query executed"
    );

    Ok(page)
}

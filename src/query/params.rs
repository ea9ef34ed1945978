//! Query-string parameters for list endpoints

use super::{PageSpec, RecordQuery};
use crate::core::error::RequestError;
use serde::Deserialize;

/// Query parameters for pagination, filtering and sorting
///
/// # Example
/// ```text
/// GET /groups?page=2&limit=10
/// GET /groups?filter=name::eng.*|description::.*core.*
/// GET /groups/1/members?sort=name|-id
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Page number (starts at 1)
    pub page: i64,

    /// Number of items per page; the endpoint default applies when absent
    pub limit: Option<i64>,

    /// Filters, `field::regex` separated by `|`
    pub filter: Option<String>,

    /// Sort keys separated by `|`, `-` prefix for descending
    pub sort: Option<String>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: None,
            filter: None,
            sort: None,
        }
    }
}

impl QueryParams {
    /// Validate and convert into a [`RecordQuery`]
    pub fn into_query(self, default_limit: usize) -> Result<RecordQuery, RequestError> {
        let page = usize::try_from(self.page)
            .ok()
            .filter(|p| *p > 0)
            .ok_or(RequestError::InvalidPage { page: self.page })?;

        let limit = match self.limit {
            Some(limit) => usize::try_from(limit)
                .ok()
                .filter(|l| *l > 0)
                .ok_or(RequestError::InvalidLimit { limit })?,
            None => default_limit,
        };

        let page = PageSpec::from_numbers(page, limit).ok_or(RequestError::InvalidLimit {
            limit: limit as i64,
        })?;

        Ok(RecordQuery {
            page,
            filter: self.filter.filter(|f| !f.is_empty()),
            sort: self.sort.filter(|s| !s.is_empty()),
        })
    }
}

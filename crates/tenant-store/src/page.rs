//! # Pages & List Queries
//!
//! Result envelope and query parameters for list operations.
//!
//! Filtering and paging are not implemented yet: a [`ListQuery`] is accepted so callers can
//! already pass one, but every list returns all of the tenant's resources in a single page with
//! empty cursors and `has_next_page == false`.

use serde::{Deserialize, Serialize};

/// How the values of a [`LabelFilter`] are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    /// The label must carry every listed value.
    #[default]
    All,
    /// The label must carry at least one listed value.
    Any,
}

/// A label-based filter for list queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFilter {
    pub label: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub operator: FilterOperator,
}

impl LabelFilter {
    pub fn new(label: impl Into<String>, values: Vec<String>, operator: FilterOperator) -> Self {
        Self {
            label: label.into(),
            values,
            operator,
        }
    }
}

/// Filter and paging parameters of a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filter: Vec<LabelFilter>,
    pub page_size: Option<usize>,
    pub cursor: Option<String>,
}

impl ListQuery {
    /// True when the query asks for anything beyond "everything in one page".
    pub fn is_constrained(&self) -> bool {
        !self.filter.is_empty() || self.page_size.is_some() || self.cursor.is_some()
    }
}

/// Cursor information of a [`Page`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub start_cursor: String,
    pub end_cursor: String,
    pub has_next_page: bool,
}

/// A page of list results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total_count: usize,
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// Wraps `data` as the only page of a listing.
    pub fn single(data: Vec<T>) -> Self {
        Self {
            total_count: data.len(),
            data,
            page_info: PageInfo::default(),
        }
    }
}

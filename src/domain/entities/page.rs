//! Paginated upstream result set.

use serde::{Deserialize, Serialize};

/// A single page of upstream results with pagination metadata.
///
/// Pagination numbers are upstream-controlled and passed through as-is;
/// `total_results` is not validated against `results.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: i64,
    pub total_pages: i64,
    pub total_results: i64,
    pub results: Vec<T>,
}

//! Common types shared across Niord API models.
//!
//! This module contains generic wrappers used by multiple
//! resource modules. It does NOT contain resource-specific models.

use serde::{Deserialize, Serialize};

/// A page of a server-side search.
///
/// `size` is the number of items in `data`, `total` the number of matches
/// across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedSearchResult<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub size: usize,
    #[serde(default)]
    pub total: usize,
}

impl<T> Default for PagedSearchResult<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            size: 0,
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_result_missing_fields_default() {
        let result: PagedSearchResult<u32> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(result.data, vec![1, 2]);
        assert_eq!(result.size, 0);
        assert_eq!(result.total, 0);
    }
}

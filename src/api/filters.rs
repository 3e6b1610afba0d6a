use std::collections::BTreeMap;

use crate::models::{TransactionKind, TransactionStatus};

/// Open-ended query filters for transaction listing
///
/// Keys and values are forwarded to the store verbatim, without client-side
/// validation: the remote store is authoritative for rejecting malformed
/// filters. The ordered map keeps outgoing query strings deterministic.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilters {
    params: BTreeMap<String, String>,
}

impl TransactionFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary filter key
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Request a specific page of results
    pub fn page(self, page: i64) -> Self {
        self.with("page", page.to_string())
    }

    /// Restrict to one lifecycle status
    pub fn status(self, status: TransactionStatus) -> Self {
        self.with("status", status.as_str())
    }

    /// Restrict to debits or credits
    pub fn kind(self, kind: TransactionKind) -> Self {
        self.with("type", kind.as_str())
    }

    /// Free-text search over merchant and category
    pub fn search(self, term: impl Into<String>) -> Self {
        self.with("search", term)
    }

    /// Restrict to transactions dated within [start, end], ISO date strings
    pub fn date_range(self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.with("start_date", start).with("end_date", end)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<String, String> {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_filter_key_lands_in_the_map_unchanged() {
        let filters = TransactionFilters::new()
            .page(2)
            .status(TransactionStatus::Pending)
            .kind(TransactionKind::Debit)
            .search("coffee")
            .date_range("2024-01-01", "2024-01-31")
            .with("merchant", "Corner Cafe");

        let map = filters.as_map();
        assert_eq!(map.get("page").map(String::as_str), Some("2"));
        assert_eq!(map.get("status").map(String::as_str), Some("pending"));
        assert_eq!(map.get("type").map(String::as_str), Some("debit"));
        assert_eq!(map.get("search").map(String::as_str), Some("coffee"));
        assert_eq!(map.get("start_date").map(String::as_str), Some("2024-01-01"));
        assert_eq!(map.get("end_date").map(String::as_str), Some("2024-01-31"));
        assert_eq!(map.get("merchant").map(String::as_str), Some("Corner Cafe"));
    }

    #[test]
    fn test_later_values_replace_earlier_ones() {
        let filters = TransactionFilters::new().page(1).page(3);
        assert_eq!(filters.as_map().get("page").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_empty_filters() {
        assert!(TransactionFilters::new().is_empty());
        assert!(!TransactionFilters::new().page(1).is_empty());
    }
}

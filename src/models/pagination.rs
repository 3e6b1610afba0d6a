use serde::{Deserialize, Serialize};

/// One page of records plus its position within the full result set
///
/// Pages are 1-indexed: `from` and `to` describe the span of `data` within
/// `total`, and `data.len()` never exceeds `per_page`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_page: i64,
    pub last_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub from: i64,
    pub to: i64,
}

impl<T> Paginated<T> {
    /// Whether this page carries no records
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if on the first page
    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// Check if on the last page
    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.last_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(current: i64, last: i64, data: Vec<u32>) -> Paginated<u32> {
        let len = data.len() as i64;
        Paginated {
            from: (current - 1) * 10 + 1,
            to: (current - 1) * 10 + len,
            data,
            current_page: current,
            last_page: last,
            per_page: 10,
            total: 25,
        }
    }

    #[test]
    fn test_first_and_last_page_checks() {
        let first = page_of(1, 3, (1..=10).collect());
        assert!(first.is_first_page());
        assert!(!first.is_last_page());

        let last = page_of(3, 3, (21..=25).collect());
        assert!(!last.is_first_page());
        assert!(last.is_last_page());
    }

    #[test]
    fn test_deserializes_store_page_metadata() {
        let json = r#"{
            "data": [1, 2, 3],
            "current_page": 2,
            "last_page": 3,
            "per_page": 3,
            "total": 8,
            "from": 4,
            "to": 6
        }"#;

        let page: Paginated<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.from, 4);
        assert_eq!(page.to, 6);
        assert!(page.data.len() as i64 <= page.per_page);
        assert!(!page.is_empty());
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

/// Rows to skip for a 1-based `page`; `None` when the offset does not fit a
/// SQL `BIGINT`.
pub fn page_offset(page: u64, limit: u64) -> Option<u64> {
    page.checked_sub(1)?
        .checked_mul(limit)
        .filter(|offset| i64::try_from(*offset).is_ok())
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 10), Some(0));
        assert_eq!(page_offset(3, 25), Some(50));
        assert_eq!(page_offset(0, 10), None);
    }

    #[test]
    fn test_page_offset_rejects_overflow() {
        assert_eq!(page_offset(u64::MAX / 2, 100), None);
        assert_eq!(
            page_offset(92_233_720_368_547_759, 100),
            Some(9_223_372_036_854_775_800)
        );
        assert_eq!(page_offset(92_233_720_368_547_760, 100), None);
        assert_eq!(page_offset(i64::MAX as u64 + 1, 1), None);
        assert_eq!(page_offset(i64::MAX as u64, 1), Some(i64::MAX as u64 - 1));
    }
}

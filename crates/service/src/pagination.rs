//! Pagination utilities for service layer
//!
//! Converts a 1-based page request into the `skip`/`limit` window handed to
//! the store. Inputs are taken as-is; bounds are enforced by the caller.

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub page_size: u64,
}

impl Pagination {
    pub fn new(page: u64, page_size: u64) -> Self { Self { page, page_size } }

    /// `(skip, limit)` where `skip = (page - 1) * page_size`.
    ///
    /// Saturates instead of wrapping: page 0 behaves like page 1 and an
    /// overflowing product pins `skip` at `u64::MAX`.
    pub fn window(self) -> (u64, u64) {
        let skip = self.page.saturating_sub(1).saturating_mul(self.page_size);
        (skip, self.page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, page_size: 10 } }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(Pagination::new(1, 10).window(), (0, 10));
    }

    #[test]
    fn later_pages_skip_whole_pages() {
        assert_eq!(Pagination::new(2, 10).window(), (10, 10));
        assert_eq!(Pagination::new(3, 7).window(), (14, 7));
    }

    #[test]
    fn page_zero_saturates_to_first_window() {
        assert_eq!(Pagination::new(0, 10).window(), (0, 10));
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(Pagination::new(u64::MAX, u64::MAX).window(), (u64::MAX, u64::MAX));
    }

    #[test]
    fn default_values_match_api_defaults() {
        let d = Pagination::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.page_size, 10);
    }
}

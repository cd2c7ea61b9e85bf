//! Page arithmetic for task list queries.

use super::TaskQueryError;

/// Validated page request.
///
/// By construction `page >= 1` and `1 <= page_size <= 100`; requests above
/// the cap are rejected outright rather than silently clamped so client
/// expectations stay explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    /// Page size applied when the caller does not supply one.
    pub const DEFAULT_PAGE_SIZE: u64 = 50;

    /// Largest permitted page size.
    pub const MAX_PAGE_SIZE: u64 = 100;

    /// Creates a validated page request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::InvalidPage`] when `page` is zero and
    /// [`TaskQueryError::InvalidPageSize`] when `page_size` is zero or
    /// exceeds [`Self::MAX_PAGE_SIZE`].
    pub const fn new(page: u64, page_size: u64) -> Result<Self, TaskQueryError> {
        if page < 1 {
            return Err(TaskQueryError::InvalidPage(page));
        }
        if page_size < 1 || page_size > Self::MAX_PAGE_SIZE {
            return Err(TaskQueryError::InvalidPageSize {
                max: Self::MAX_PAGE_SIZE,
                actual: page_size,
            });
        }
        Ok(Self { page, page_size })
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Returns the number of records to skip.
    ///
    /// Saturates at `u64::MAX` for page numbers far past any real result
    /// set; such a page simply reads back empty.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Returns the maximum number of records to fetch.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.page_size
    }

    /// Returns the total page count for `total` matching records.
    ///
    /// Zero when `total` is zero, otherwise `ceil(total / page_size)`.
    #[must_use]
    pub const fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

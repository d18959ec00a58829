//! Page position and list parameters for the submissions endpoint.
//!
//! The backend is queried with `limit`/`offset` and does not report a page
//! count, so whether another page exists is inferred from how full the
//! current page is.

/// Number of submissions requested per page.
pub const PAGE_SIZE: u32 = 20;

/// Current page position within the submissions listing.
///
/// # Example
///
/// ```
/// use feedback_console::api::PageInfo;
///
/// let info = PageInfo::first();
/// assert!(info.is_first_page());
/// assert!(!info.has_prev());
/// assert_eq!(info.offset(), 0);
///
/// let third = PageInfo::new(3);
/// assert_eq!(third.offset(), 40);
/// assert!(third.has_next(20));
/// assert!(!third.has_next(19));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number (1-based).
    current_page: u32,
    /// Items per page.
    per_page: u32,
}

impl PageInfo {
    /// Creates page info for `current_page`, clamped to at least 1.
    #[must_use]
    pub const fn new(current_page: u32) -> Self {
        Self {
            current_page: if current_page == 0 { 1 } else { current_page },
            per_page: PAGE_SIZE,
        }
    }

    /// Returns page info for the first page.
    #[must_use]
    pub const fn first() -> Self {
        Self::new(1)
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the number of items per page.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Returns the offset of the first item on this page.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.current_page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Returns true if this is the first page.
    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// Returns true if pages exist before the current one.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        !self.is_first_page()
    }

    /// Returns true if a page holding `item_count` items may have a successor.
    ///
    /// Only a completely full page counts; a short or empty page is treated
    /// as the last one.
    #[must_use]
    pub const fn has_next(&self, item_count: usize) -> bool {
        item_count as u64 == self.per_page as u64
    }

    /// Returns the following page.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self::new(self.current_page.saturating_add(1))
    }

    /// Returns the preceding page, staying on the first page.
    #[must_use]
    pub const fn prev(&self) -> Self {
        Self::new(self.current_page.saturating_sub(1))
    }

    /// Builds list parameters for this page and the given filter value.
    #[must_use]
    pub fn list_params(&self, filter: &str) -> ListSubmissionsParams {
        ListSubmissionsParams {
            limit: self.per_page,
            offset: self.offset(),
            filter: Some(filter.to_owned()),
        }
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::first()
    }
}

/// Parameters for listing submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSubmissionsParams {
    /// Maximum number of submissions to return.
    pub limit: u32,
    /// Number of submissions to skip.
    pub offset: u32,
    /// Filter value forwarded to the backend unchanged, if any.
    pub filter: Option<String>,
}

impl Default for ListSubmissionsParams {
    fn default() -> Self {
        Self {
            limit: PAGE_SIZE,
            offset: 0,
            filter: None,
        }
    }
}

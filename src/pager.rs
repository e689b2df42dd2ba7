//! Page-window planning for paginated lists.
//!
//! Given the current page, the total item count and a fixed page size,
//! [`PageWindow::plan`] produces the ordered sequence of controls a pager
//! should render: numbered buttons plus at most two ellipsis markers
//! collapsing the gaps between the first/last anchors and the sliding
//! window around the current page.

use std::fmt;

use crate::error::{DeskError, Result};

/// One control in a rendered pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A clickable page number.
    Page(usize),
    /// A non-interactive marker for a collapsed run of page numbers.
    Ellipsis,
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{}", n),
            PageToken::Ellipsis => write!(f, "…"),
        }
    }
}

/// Input tuple for one pager render.
///
/// Recomputed on every render; the planner reads only these four values,
/// so identical inputs always yield identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    current_page: usize,
    total_items: usize,
    page_size: usize,
    page_range: usize,
}

impl PageWindow {
    /// Build a window, rejecting arguments the planner is not defined over.
    ///
    /// `current_page` must already be clamped into `1..=max(total_pages, 1)`
    /// by the caller; only the structurally invalid cases (`page_size == 0`,
    /// `current_page == 0`) are rejected here.
    pub fn new(
        current_page: usize,
        total_items: usize,
        page_size: usize,
        page_range: usize,
    ) -> Result<Self> {
        if page_size == 0 {
            return Err(DeskError::InvalidArgument("page_size must be >= 1".into()));
        }
        if current_page == 0 {
            return Err(DeskError::InvalidArgument(
                "current_page must be >= 1".into(),
            ));
        }
        Ok(Self {
            current_page,
            total_items,
            page_size,
            page_range,
        })
    }

    /// Build a window from a possibly stale page request, clamping the page
    /// into `1..=max(total_pages, 1)` and the page size up to at least 1.
    ///
    /// This is the constructor the views use: filtering can shrink the list
    /// under a previously valid page number, and the planner itself never
    /// clamps.
    pub fn clamped(
        requested_page: usize,
        total_items: usize,
        page_size: usize,
        page_range: usize,
    ) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(page_size);
        Self {
            current_page: clamp_page(requested_page, total_pages),
            total_items,
            page_size,
            page_range,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Half-open index range `[start, end)` of the current page's slice.
    pub fn page_bounds(&self) -> (usize, usize) {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        let start = start.min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        (start, end)
    }

    /// Plan the pager controls for this window.
    ///
    /// Dense case: when every page fits alongside the first/last anchors
    /// (`total <= 2*page_range + 3`), all page numbers are emitted and no
    /// ellipsis ever appears. Otherwise a window of `2*page_range + 1`
    /// pages slides around the current page, anchored by page 1 and the
    /// last page, with each gap collapsed to a single ellipsis.
    ///
    /// Total function: never fails, never emits a duplicate page number.
    pub fn plan(&self) -> Vec<PageToken> {
        let total = self.total_pages();
        if total == 0 {
            return Vec::new();
        }

        let max_buttons = 2 * self.page_range + 1;
        if total <= max_buttons + 2 {
            return (1..=total).map(PageToken::Page).collect();
        }

        let current = self.current_page;
        let left = current.saturating_sub(self.page_range).max(1);
        let right = (current + self.page_range).min(total);

        let mut tokens = Vec::with_capacity(max_buttons + 4);

        if current > self.page_range + 1 {
            tokens.push(PageToken::Page(1));
        }
        if left > 2 {
            tokens.push(PageToken::Ellipsis);
        }
        for page in left..=right {
            if !tokens.contains(&PageToken::Page(page)) {
                tokens.push(PageToken::Page(page));
            }
        }
        if right < total - 1 {
            tokens.push(PageToken::Ellipsis);
        }
        if total != 1 && !tokens.contains(&PageToken::Page(total)) {
            tokens.push(PageToken::Page(total));
        }

        tokens
    }
}

/// Clamp a requested page into `1..=max(total_pages, 1)`.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

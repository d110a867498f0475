//! Viewport width to page size mapping.

/// Page size on wide viewports.
pub const PAGE_SIZE_WIDE: usize = 12;
/// Page size on medium viewports.
pub const PAGE_SIZE_MEDIUM: usize = 8;
/// Page size on narrow viewports.
pub const PAGE_SIZE_NARROW: usize = 6;

/// Width thresholds (terminal columns) between the three page sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoints {
    /// Widths at or above this use [`PAGE_SIZE_WIDE`].
    pub wide: u16,
    /// Widths at or above this (and below `wide`) use [`PAGE_SIZE_MEDIUM`].
    pub medium: u16,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            wide: 120,
            medium: 80,
        }
    }
}

/// What: Derive the page size from the viewport width.
///
/// Inputs:
/// - `width`: Viewport width in columns
/// - `breakpoints`: Thresholds between narrow, medium and wide
///
/// Output:
/// - 12, 8 or 6 recipes per page.
#[must_use]
pub const fn page_size_for_width(width: u16, breakpoints: Breakpoints) -> usize {
    if width >= breakpoints.wide {
        PAGE_SIZE_WIDE
    } else if width >= breakpoints.medium {
        PAGE_SIZE_MEDIUM
    } else {
        PAGE_SIZE_NARROW
    }
}

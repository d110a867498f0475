//! Core non-UI logic split into modular submodules.

pub mod filter;
pub mod pagination;
pub mod sort;
pub mod view;
pub mod viewport;

// Re-export public APIs to keep short import paths (crate::logic::...)
pub use filter::{filter_by_tags, filter_by_text};
pub use pagination::{PaginationControls, page_items, page_slice, total_pages};
pub use sort::sort_recipes;
pub use view::{CatalogView, compute_view};
pub use viewport::{Breakpoints, page_size_for_width};

//! Catalog state split into value types and the query-state value.
//!
//! Public API lives under `crate::state::*` via re-exports.

pub mod query;
pub mod types;

pub use query::{DEFAULT_PAGE_SIZE, QueryState};
pub use types::{DetailState, LoadState, PageItem, Recipe, SortDirection, SortField};

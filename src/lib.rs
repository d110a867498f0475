//! Library entry for recipe-book exposing the catalog engine for integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod location;
pub mod logic;
pub mod sources;
pub mod state;
pub mod sync;
pub mod util;

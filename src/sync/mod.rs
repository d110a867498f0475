//! Query-state transitions mirrored into the location, and the session that drives them.

pub mod action;
pub mod session;
pub mod url;

pub use action::Action;
pub use session::Session;
pub use url::{PARAM_PAGE, PARAM_QUERY, PARAM_TAG, TransitionContext, parse_page, read_tags, transition};

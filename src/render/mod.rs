//! Plain-text rendering of a session for the terminal.
//!
//! - `list`: the timing list (run first, then loads) with badges
//! - `summary`: RTA / LRT / load totals
//! - `warnings`: the global warning list

mod list;
mod summary;
mod warnings;

pub use list::{format_time, render_timing_list};
pub use summary::render_summary;
pub use warnings::render_warnings;

//! CLI command handlers.

mod list;

pub use list::{run_list, ListOptions};

//! CLI command handlers.

mod open;
mod usage;

pub use open::run_open;
pub use usage::run_usage;

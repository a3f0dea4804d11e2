//! CLI command handlers, one per file.

mod check;
mod clear_history;
mod export;
mod recent;
mod rules;
mod show;

pub use check::{run_check, CheckArgs};
pub use clear_history::run_clear_history;
pub use export::run_export;
pub use recent::run_recent;
pub use rules::run_rules;
pub use show::run_show;

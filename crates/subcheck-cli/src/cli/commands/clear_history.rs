//! `subcheck clear-history` – forget recent results.

use anyhow::Result;
use subcheck_core::history::RecentHistory;

/// Overwrite the history file with an empty list; the old contents are never read.
pub fn run_clear_history(mut history: RecentHistory) -> Result<()> {
    history.clear()?;
    println!("Cleared recent results ({}).", history.path().display());
    Ok(())
}

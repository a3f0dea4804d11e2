//! `subcheck recent` – list recent results.

use anyhow::Result;
use subcheck_core::history::RecentHistory;
use subcheck_core::render;

pub fn run_recent(history: &RecentHistory) -> Result<()> {
    if history.list().is_empty() {
        println!("No recent results.");
    } else {
        print!("{}", render::render_recent(history.list()));
    }
    Ok(())
}

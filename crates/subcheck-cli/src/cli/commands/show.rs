//! `subcheck show <n>` – result card of a recent result.

use anyhow::Result;
use subcheck_core::history::RecentHistory;
use subcheck_core::render;

pub fn run_show(history: &RecentHistory, n: usize) -> Result<()> {
    let Some(eval) = history.get(n) else {
        anyhow::bail!(
            "no recent result #{n} ({} stored, see `subcheck recent`)",
            history.list().len()
        );
    };
    print!("{}", render::render_card(eval));
    Ok(())
}

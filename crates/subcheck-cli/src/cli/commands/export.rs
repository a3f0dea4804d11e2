//! `subcheck export <csv|json>` – write a recent result to a file.

use anyhow::Result;
use std::path::{Path, PathBuf};
use subcheck_core::export::{self, ExportFormat};
use subcheck_core::history::RecentHistory;

pub fn run_export(
    history: &RecentHistory,
    format: ExportFormat,
    index: Option<usize>,
    output: Option<&Path>,
) -> Result<()> {
    let eval = match index {
        Some(n) => history
            .get(n)
            .ok_or_else(|| anyhow::anyhow!("no recent result #{n}"))?,
        None => history
            .latest()
            .ok_or_else(|| anyhow::anyhow!("nothing to export; run `subcheck check` first"))?,
    };
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format.default_file_name()));
    export::write_export(eval, format, &path, &mut std::io::stdout())?;
    if path.as_os_str() != "-" {
        println!("Exported {} to {}", format, path.display());
    }
    Ok(())
}

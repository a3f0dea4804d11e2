//! `subcheck check <link> --assignment <type>` – evaluate a submission.

use anyhow::Result;
use std::path::PathBuf;
use subcheck_core::config::SubcheckConfig;
use subcheck_core::evaluate::Grader;
use subcheck_core::export::{self, ExportFormat};
use subcheck_core::history::RecentHistory;
use subcheck_core::probe::CurlClient;
use subcheck_core::render;
use subcheck_core::rules::AssignmentType;

#[derive(Debug)]
pub struct CheckArgs {
    pub link: String,
    pub assignment: AssignmentType,
    pub export: Option<ExportFormat>,
    pub output: Option<PathBuf>,
}

/// Evaluate, print the card, optionally export, and record the result in
/// `history` when one is given.
pub fn run_check(
    cfg: &SubcheckConfig,
    history: Option<&mut RecentHistory>,
    args: CheckArgs,
) -> Result<()> {
    let client = CurlClient::new(&cfg.http);
    let eval = Grader::new(client, cfg).evaluate(&args.link, args.assignment)?;

    print!("{}", render::render_card(&eval));

    if let Some(format) = args.export {
        let path = args
            .output
            .unwrap_or_else(|| PathBuf::from(format.default_file_name()));
        export::write_export(&eval, format, &path, &mut std::io::stdout())?;
        if path.as_os_str() != "-" {
            println!("Exported {} to {}", format, path.display());
        }
    }

    if let Some(history) = history {
        history.push(eval)?;
    }
    Ok(())
}

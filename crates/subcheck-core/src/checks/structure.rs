//! Does the submission have the expected project layout?

use super::{CheckOutcome, UNKNOWN_LINK};
use crate::config::SubcheckConfig;
use crate::link::LinkKind;
use crate::rules::{match_paths, rules_for, AssignmentType};

/// Structure check, computed from the required-files `found` list.
///
/// Conventional directories seen in the paths are listed in the message but
/// never change the outcome.
pub fn check_structure(
    cfg: &SubcheckConfig,
    kind: LinkKind,
    assignment: AssignmentType,
    found: &[String],
) -> CheckOutcome {
    match kind {
        LinkKind::GithubRepo | LinkKind::GithubPages => {
            let m = match_paths(&rules_for(cfg, assignment), found);
            let mut outcome = if m.all_found() {
                CheckOutcome::pass("Project structure is correct.")
            } else {
                CheckOutcome::fail(format!("Missing file type(s): {}", m.missing.join(", ")))
            };
            let dirs = conventional_dirs(&cfg.conventional_dirs, found);
            if !dirs.is_empty() {
                outcome.message.push_str(&format!(" Directories: {}", dirs.join(", ")));
            }
            outcome
        }
        LinkKind::GoogleDrive => CheckOutcome::pass("N/A for Google Drive."),
        LinkKind::Unknown => CheckOutcome::fail(UNKNOWN_LINK),
    }
}

/// Conventional directory names appearing as a directory component of any path,
/// in the order they are configured.
fn conventional_dirs<'a>(known: &'a [String], paths: &[String]) -> Vec<&'a str> {
    known
        .iter()
        .filter(|dir| {
            paths.iter().any(|p| {
                let mut parts: Vec<&str> = p.split('/').collect();
                parts.pop();
                parts.iter().any(|part| part.eq_ignore_ascii_case(dir))
            })
        })
        .map(String::as_str)
        .collect()
}

//! Is the submission reachable at all?

use super::{CheckOutcome, INVALID_REPO, UNKNOWN_LINK};
use crate::link::{GithubRepoRef, LinkKind};
use crate::probe::{self, HttpClient};

const NETWORK_ERROR: &str = "Network error or link not accessible.";

/// Accessibility check.
///
/// Repositories are looked up through the GitHub API so that private and
/// missing repos can be told apart from rate limiting; Pages sites and Drive
/// files only need to answer a HEAD request.
pub fn check_accessibility(
    client: &dyn HttpClient,
    api_base: &str,
    link: &str,
    kind: LinkKind,
) -> CheckOutcome {
    match kind {
        LinkKind::GithubRepo => {
            let Some(repo) = GithubRepoRef::parse(link) else {
                return CheckOutcome::fail(INVALID_REPO);
            };
            match client.get(&repo.api_url(api_base)) {
                Ok(resp) => repo_status_outcome(resp.status),
                Err(e) => {
                    tracing::warn!(link, error = %e, "repository lookup failed");
                    CheckOutcome::fail(NETWORK_ERROR)
                }
            }
        }
        LinkKind::GithubPages | LinkKind::GoogleDrive => match client.head(link) {
            Ok(status) if probe::is_reachable(status) => CheckOutcome::pass("Link is accessible."),
            Ok(status) => {
                tracing::info!(link, status, "link answered with an error status");
                CheckOutcome::fail(format!("Link not accessible. Status: {status}"))
            }
            Err(e) => {
                tracing::warn!(link, error = %e, "link probe failed");
                CheckOutcome::fail(NETWORK_ERROR)
            }
        },
        LinkKind::Unknown => CheckOutcome::fail(UNKNOWN_LINK),
    }
}

fn repo_status_outcome(status: u32) -> CheckOutcome {
    match status {
        200 => CheckOutcome::pass("Repo is public and accessible."),
        404 => CheckOutcome::fail("Repo not found (may be private or does not exist)."),
        403 => CheckOutcome::fail("API rate limit exceeded. Try again later."),
        other => CheckOutcome::fail(format!("Repo not accessible. Status: {other}")),
    }
}

//! Submission link classification.
//!
//! Links are classified by pattern on the raw string, in a fixed order:
//! Pages sites first (a `github.io` URL never counts as a repository), then
//! GitHub repositories, then Google Drive.

mod github;
mod site;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use github::GithubRepoRef;
pub use site::site_file_url;

static PAGES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"github\.io").unwrap());
static DRIVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"drive\.google\.com").unwrap());

/// Kind of submission link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    GithubPages,
    GithubRepo,
    GoogleDrive,
    Unknown,
}

impl LinkKind {
    pub fn detect(url: &str) -> Self {
        if PAGES_RE.is_match(url) {
            LinkKind::GithubPages
        } else if github::REPO_RE.is_match(url) {
            LinkKind::GithubRepo
        } else if DRIVE_RE.is_match(url) {
            LinkKind::GoogleDrive
        } else {
            LinkKind::Unknown
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LinkKind::GithubPages => "github-pages",
            LinkKind::GithubRepo => "github-repo",
            LinkKind::GoogleDrive => "google-drive",
            LinkKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_pages_before_repo() {
        assert_eq!(
            LinkKind::detect("https://alice.github.io/portfolio/"),
            LinkKind::GithubPages
        );
        // A repo named like a Pages site is still a Pages link.
        assert_eq!(
            LinkKind::detect("https://github.com/alice/alice.github.io"),
            LinkKind::GithubPages
        );
    }

    #[test]
    fn detects_repo_only_with_owner_and_name() {
        assert_eq!(
            LinkKind::detect("https://github.com/alice/webapp"),
            LinkKind::GithubRepo
        );
        assert_eq!(
            LinkKind::detect("https://github.com/alice"),
            LinkKind::Unknown
        );
        assert_eq!(LinkKind::detect("https://github.com/"), LinkKind::Unknown);
    }

    #[test]
    fn detects_drive_and_unknown() {
        assert_eq!(
            LinkKind::detect("https://drive.google.com/file/d/abc123/view"),
            LinkKind::GoogleDrive
        );
        assert_eq!(
            LinkKind::detect("https://gitlab.com/alice/webapp"),
            LinkKind::Unknown
        );
        assert_eq!(LinkKind::detect(""), LinkKind::Unknown);
    }

    #[test]
    fn display_matches_serde_name() {
        assert_eq!(LinkKind::GithubRepo.to_string(), "github-repo");
        assert_eq!(
            serde_json::to_string(&LinkKind::GoogleDrive).unwrap(),
            "\"google-drive\""
        );
    }
}

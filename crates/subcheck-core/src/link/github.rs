//! GitHub repository references and REST API URLs.

use once_cell::sync::Lazy;
use regex::Regex;

pub(super) static REPO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/([^/]+)/([^/]+)").unwrap());

/// Owner and repository name extracted from a `github.com/<owner>/<repo>` link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubRepoRef {
    pub owner: String,
    pub repo: String,
}

impl GithubRepoRef {
    /// Parse the first `github.com/<owner>/<repo>` occurrence in `url`.
    ///
    /// Query strings, fragments and a trailing `.git` are dropped from the
    /// repository name. Returns `None` when no owner/repo pair is present.
    pub fn parse(url: &str) -> Option<Self> {
        let caps = REPO_RE.captures(url)?;
        let owner = caps.get(1)?.as_str();
        let raw_repo = caps.get(2)?.as_str();
        let repo = raw_repo
            .split(['?', '#'])
            .next()
            .unwrap_or(raw_repo)
            .trim_end_matches(".git");
        if owner.is_empty() || repo.is_empty() {
            return None;
        }
        Some(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// `GET {api_base}/repos/{owner}/{repo}`: repository metadata.
    pub fn api_url(&self, api_base: &str) -> String {
        format!(
            "{}/repos/{}/{}",
            api_base.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }

    /// `GET {api_base}/repos/{owner}/{repo}/contents/`: root directory listing.
    pub fn contents_url(&self, api_base: &str) -> String {
        format!("{}/contents/", self.api_url(api_base))
    }
}

//! The three checks run against a submission link.
//!
//! Every check degrades to a failed outcome with a message; network errors
//! never propagate out of here.

mod access;
mod files;
mod listing;
mod structure;

pub use access::check_accessibility;
pub use files::check_required_files;
pub use listing::{list_repo_files, ListingError};
pub use structure::check_structure;

use serde::{Deserialize, Serialize};

pub(crate) const UNKNOWN_LINK: &str = "Unknown link type.";
pub(crate) const INVALID_REPO: &str = "Invalid GitHub repo URL.";

/// Pass/fail result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub passed: bool,
    pub message: String,
}

impl CheckOutcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}

/// Result of the required-files check.
///
/// `found` holds every repository path for GitHub repos, the satisfied rule
/// labels for Pages sites, and the link itself for Drive files. The structure
/// check works from this list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesOutcome {
    pub passed: bool,
    pub message: String,
    #[serde(default)]
    pub found: Vec<String>,
}

impl FilesOutcome {
    pub(crate) fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            found: Vec::new(),
        }
    }

    pub fn outcome(&self) -> CheckOutcome {
        CheckOutcome {
            passed: self.passed,
            message: self.message.clone(),
        }
    }
}

/// All three outcomes for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResults {
    pub accessibility: CheckOutcome,
    pub required_files: FilesOutcome,
    pub structure: CheckOutcome,
}

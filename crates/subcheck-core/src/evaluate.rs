//! Evaluation pipeline: classify, check, score.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::checks::{check_accessibility, check_required_files, check_structure, CheckResults};
use crate::config::SubcheckConfig;
use crate::link::LinkKind;
use crate::probe::HttpClient;
use crate::rules::AssignmentType;
use crate::score::calculate_score;

/// The flat result record for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub link: String,
    pub assignment_type: AssignmentType,
    pub results: CheckResults,
    /// Weighted score in percent.
    pub score: u32,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluateError {
    #[error("submission link is empty")]
    EmptyLink,
}

/// Runs the checks for submissions using one HTTP client and config.
pub struct Grader<'a, C: HttpClient> {
    client: C,
    cfg: &'a SubcheckConfig,
}

impl<'a, C: HttpClient> Grader<'a, C> {
    pub fn new(client: C, cfg: &'a SubcheckConfig) -> Self {
        Self { client, cfg }
    }

    /// Check one submission. The checks run one after another; only an empty
    /// link is an error, every other failure is reported inside the result.
    pub fn evaluate(
        &self,
        link: &str,
        assignment: AssignmentType,
    ) -> Result<Evaluation, EvaluateError> {
        let link = link.trim();
        if link.is_empty() {
            return Err(EvaluateError::EmptyLink);
        }
        let kind = LinkKind::detect(link);
        tracing::info!(link, %kind, %assignment, "evaluating submission");

        let accessibility =
            check_accessibility(&self.client, &self.cfg.http.github_api_base, link, kind);
        tracing::debug!(
            passed = accessibility.passed,
            message = %accessibility.message,
            "accessibility"
        );

        let required_files = check_required_files(&self.client, self.cfg, link, kind, assignment);
        tracing::debug!(
            passed = required_files.passed,
            message = %required_files.message,
            "required files"
        );

        let structure = check_structure(self.cfg, kind, assignment, &required_files.found);
        tracing::debug!(passed = structure.passed, message = %structure.message, "structure");

        let results = CheckResults {
            accessibility,
            required_files,
            structure,
        };
        let score = calculate_score(&results, &self.cfg.weights);
        tracing::info!(link, score, "evaluation finished");

        Ok(Evaluation {
            link: link.to_string(),
            assignment_type: assignment,
            results,
            score,
            timestamp: now_millis(),
        })
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

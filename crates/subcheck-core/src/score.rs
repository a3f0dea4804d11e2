//! Weighted score over the three checks.

use crate::checks::CheckResults;
use crate::config::Weights;

/// Integer percentage: each passed check adds `weight * 100`, rounded at the end.
pub fn calculate_score(results: &CheckResults, weights: &Weights) -> u32 {
    let mut score = 0.0;
    if results.accessibility.passed {
        score += weights.accessibility * 100.0;
    }
    if results.required_files.passed {
        score += weights.required_files * 100.0;
    }
    if results.structure.passed {
        score += weights.structure * 100.0;
    }
    score.round().max(0.0) as u32
}

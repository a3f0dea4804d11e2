//! Plain-text rendering of result cards and the recent list.

use std::fmt::Write;

use crate::checks::CheckOutcome;
use crate::evaluate::Evaluation;

fn mark(passed: bool) -> &'static str {
    if passed {
        "✅"
    } else {
        "❌"
    }
}

fn check_line(out: &mut String, title: &str, outcome: &CheckOutcome) {
    let _ = writeln!(out, "  {} {}: {}", mark(outcome.passed), title, outcome.message);
}

/// Result card for one evaluation.
pub fn render_card(eval: &Evaluation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Submission: {}", eval.link);
    let _ = writeln!(out, "Assignment: {}", eval.assignment_type);
    check_line(&mut out, "Accessibility", &eval.results.accessibility);
    check_line(&mut out, "Required Files", &eval.results.required_files.outcome());
    check_line(&mut out, "Structure", &eval.results.structure);
    let _ = writeln!(out, "Final Score: {}%", eval.score);
    out
}

/// Numbered recent-results list, newest first. Empty history renders as an empty string.
pub fn render_recent(recent: &[Evaluation]) -> String {
    if recent.is_empty() {
        return String::new();
    }
    let mut out = String::from("Recent Results\n");
    for (i, r) in recent.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} — {} — {}%",
            i + 1,
            r.assignment_type,
            r.link,
            r.score
        );
    }
    out
}

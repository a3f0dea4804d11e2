//! Required-file rules per assignment category.
//!
//! A rule is written as a string: `.ext` means "some file with this
//! extension", anything else is an exact file name. Under Web Development
//! the name `index.html` also accepts `index.php`.

mod assignment;
mod matcher;

pub use assignment::AssignmentType;
pub use matcher::{match_paths, RuleMatch};

use crate::config::SubcheckConfig;

const INDEX_LABEL: &str = "index.html/index.php";

/// A single required-file rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Any file ending with this extension (leading dot included).
    Extension(String),
    /// A file with exactly this base name (case-insensitive).
    FileName(String),
    /// `index.html` or `index.php`.
    IndexPage,
}

impl Rule {
    pub fn parse(raw: &str, assignment: AssignmentType) -> Self {
        let raw = raw.trim();
        if raw.starts_with('.') {
            Rule::Extension(raw.to_string())
        } else if assignment == AssignmentType::WebDevelopment
            && raw.eq_ignore_ascii_case("index.html")
        {
            Rule::IndexPage
        } else {
            Rule::FileName(raw.to_string())
        }
    }

    /// Text used in found/missing lists.
    pub fn label(&self) -> String {
        match self {
            Rule::Extension(s) | Rule::FileName(s) => s.clone(),
            Rule::IndexPage => INDEX_LABEL.to_string(),
        }
    }
}

/// Rules in effect for `assignment`: the config override if present, else the built-ins.
pub fn rules_for(cfg: &SubcheckConfig, assignment: AssignmentType) -> Vec<Rule> {
    let parse = |raw: &str| Rule::parse(raw, assignment);
    match cfg.rule_override(assignment) {
        Some(custom) => custom.iter().map(|r| parse(r.as_str())).collect(),
        None => assignment.default_rules().iter().copied().map(parse).collect(),
    }
}

//! Match required rules against a list of file paths.

use super::Rule;

/// Labels of satisfied and unsatisfied rules, deduplicated, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleMatch {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl RuleMatch {
    pub fn all_found(&self) -> bool {
        self.missing.is_empty()
    }

    /// Record one rule's outcome, ignoring labels already recorded on that side.
    pub fn record(&mut self, label: String, hit: bool) {
        let bucket = if hit { &mut self.found } else { &mut self.missing };
        if !bucket.contains(&label) {
            bucket.push(label);
        }
    }
}

fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

impl Rule {
    /// True if `path` satisfies this rule.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Rule::Extension(ext) => path.to_lowercase().ends_with(&ext.to_lowercase()),
            Rule::FileName(name) => base_name(path).eq_ignore_ascii_case(name),
            Rule::IndexPage => {
                let base = base_name(path);
                base.eq_ignore_ascii_case("index.html") || base.eq_ignore_ascii_case("index.php")
            }
        }
    }
}

/// Check every rule against `paths`.
pub fn match_paths<S: AsRef<str>>(rules: &[Rule], paths: &[S]) -> RuleMatch {
    let mut result = RuleMatch::default();
    for rule in rules {
        let hit = paths.iter().any(|p| rule.matches(p.as_ref()));
        result.record(rule.label(), hit);
    }
    result
}

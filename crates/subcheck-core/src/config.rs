use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::rules::AssignmentType;

/// Score weights per check (optional section in config.toml).
///
/// Each passed check contributes `weight * 100` points; the total is rounded
/// to the nearest integer percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub accessibility: f64,
    pub required_files: f64,
    pub structure: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            accessibility: 0.4,
            required_files: 0.3,
            structure: 0.3,
        }
    }
}

/// HTTP probe settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header; the GitHub API rejects requests without one.
    pub user_agent: String,
    /// Base URL of the GitHub REST API (no trailing slash).
    pub github_api_base: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            timeout_secs: 20,
            user_agent: concat!("subcheck/", env!("CARGO_PKG_VERSION")).to_string(),
            github_api_base: "https://api.github.com".to_string(),
        }
    }
}

/// Directory names reported as conventional project layout by the structure check.
pub const DEFAULT_CONVENTIONAL_DIRS: &[&str] = &[
    "models",
    "views",
    "controllers",
    "public",
    "static",
    "routes",
    "assets",
    "templates",
    "src",
];

/// File stems tried on a Pages site when looking for an extension.
pub const DEFAULT_PAGE_GUESSES: &[&str] = &[
    "index",
    "main",
    "script",
    "style",
    "app",
    "notebook",
    "data",
    "model",
    "requirements",
    "log",
    "design",
];

fn default_conventional_dirs() -> Vec<String> {
    DEFAULT_CONVENTIONAL_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_page_guesses() -> Vec<String> {
    DEFAULT_PAGE_GUESSES.iter().map(|s| s.to_string()).collect()
}

fn default_recent_limit() -> usize {
    5
}

/// Global configuration loaded from `~/.config/subcheck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcheckConfig {
    /// Number of recent results kept in the history file.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// Directory names listed by the structure check when present.
    #[serde(default = "default_conventional_dirs")]
    pub conventional_dirs: Vec<String>,
    /// File stems probed on Pages sites for extension rules.
    #[serde(default = "default_page_guesses")]
    pub page_guesses: Vec<String>,
    #[serde(default)]
    pub weights: Weights,
    #[serde(default)]
    pub http: HttpConfig,
    /// Per-assignment rule overrides, keyed by display name or slug
    /// (e.g. `"Web Development" = [...]` or `web-development = [...]`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, Vec<String>>,
}

impl Default for SubcheckConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            conventional_dirs: default_conventional_dirs(),
            page_guesses: default_page_guesses(),
            weights: Weights::default(),
            http: HttpConfig::default(),
            rules: BTreeMap::new(),
        }
    }
}

impl SubcheckConfig {
    /// Rule override for `assignment`; keys may be display names or slugs.
    pub fn rule_override(&self, assignment: AssignmentType) -> Option<&[String]> {
        self.rules
            .iter()
            .find(|(key, _)| key.parse::<AssignmentType>().ok() == Some(assignment))
            .map(|(_, rules)| rules.as_slice())
    }

    /// Reject weights that would make the score meaningless and rule
    /// overrides that would never apply.
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        for (name, value) in [
            ("accessibility", w.accessibility),
            ("required_files", w.required_files),
            ("structure", w.structure),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("weights.{name} must be a non-negative number, got {value}");
            }
        }
        let total = w.accessibility + w.required_files + w.structure;
        if (total - 1.0).abs() > 1e-6 {
            tracing::warn!("score weights sum to {total}, scores will not top out at 100");
        }
        if self.recent_limit == 0 {
            anyhow::bail!("recent_limit must be at least 1");
        }
        let mut seen = Vec::new();
        for key in self.rules.keys() {
            let assignment: AssignmentType = key
                .parse()
                .map_err(|e: String| anyhow::anyhow!("rules.\"{key}\": {e}"))?;
            if seen.contains(&assignment) {
                anyhow::bail!("rules for {assignment} are given more than once");
            }
            seen.push(assignment);
        }
        Ok(())
    }
}

/// State directory (`~/.local/state/subcheck`), created if missing.
/// Holds the log file and the recent-results history.
pub fn state_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("subcheck")?;
    let dir = xdg_dirs.get_state_home().join("subcheck");
    fs::create_dir_all(&dir).with_context(|| format!("create dir: {}", dir.display()))?;
    Ok(dir)
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("subcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SubcheckConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SubcheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load and validate configuration from a specific file.
pub fn load_from_path(path: &Path) -> Result<SubcheckConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SubcheckConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SubcheckConfig::default();
        assert_eq!(cfg.recent_limit, 5);
        assert_eq!(cfg.weights, Weights::default());
        assert_eq!(cfg.conventional_dirs.len(), 9);
        assert_eq!(cfg.page_guesses.first().map(String::as_str), Some("index"));
        assert!(cfg.rules.is_empty());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SubcheckConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SubcheckConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.recent_limit, cfg.recent_limit);
        assert_eq!(parsed.weights, cfg.weights);
        assert_eq!(parsed.page_guesses, cfg.page_guesses);
        assert_eq!(parsed.http.github_api_base, cfg.http.github_api_base);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            recent_limit = 10

            [weights]
            accessibility = 0.5
            required_files = 0.25
            structure = 0.25
        "#;
        let cfg: SubcheckConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.recent_limit, 10);
        assert!((cfg.weights.accessibility - 0.5).abs() < 1e-9);
        assert_eq!(cfg.http.timeout_secs, 20);
        assert_eq!(cfg.conventional_dirs.len(), 9);
    }

    #[test]
    fn config_toml_rule_overrides() {
        let toml = r#"
            [rules]
            "Web Development" = [".html", "index.html", "README.md"]
        "#;
        let cfg: SubcheckConfig = toml::from_str(toml).unwrap();
        let web = cfg.rules.get("Web Development").unwrap();
        assert_eq!(web, &vec![".html", "index.html", "README.md"]);
    }

    #[test]
    fn rule_override_accepts_slug_key() {
        let toml = r#"
            [rules]
            "web-development" = ["LICENSE"]
        "#;
        let cfg: SubcheckConfig = toml::from_str(toml).unwrap();
        assert!(cfg.validate().is_ok());
        assert_eq!(
            cfg.rule_override(AssignmentType::WebDevelopment),
            Some(&["LICENSE".to_string()][..])
        );
        assert!(cfg.rule_override(AssignmentType::DataAnalysis).is_none());
    }

    #[test]
    fn validate_rejects_unknown_rule_key() {
        let toml = r#"
            [rules]
            "Web Developement" = [".html"]
        "#;
        let cfg: SubcheckConfig = toml::from_str(toml).unwrap();
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("Web Developement"), "{err}");
    }

    #[test]
    fn validate_rejects_duplicate_rule_keys() {
        let toml = r#"
            [rules]
            "web-development" = [".html"]
            "Web Development" = [".css"]
        "#;
        let cfg: SubcheckConfig = toml::from_str(toml).unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_weight() {
        let mut cfg = SubcheckConfig::default();
        cfg.weights.structure = -0.1;
        assert!(cfg.validate().is_err());
        cfg.weights.structure = f64::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "recent_limit = 3\n").unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.recent_limit, 3);

        fs::write(&path, "recent_limit = 0\n").unwrap();
        assert!(load_from_path(&path).is_err());
    }
}

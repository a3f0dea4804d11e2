//! Are the files the assignment asks for present?

use super::{list_repo_files, FilesOutcome, INVALID_REPO, UNKNOWN_LINK};
use crate::config::SubcheckConfig;
use crate::link::{site_file_url, GithubRepoRef, LinkKind};
use crate::probe::{self, HttpClient};
use crate::rules::{match_paths, rules_for, AssignmentType, Rule, RuleMatch};

const ALL_FOUND: &str = "All required file types/extensions found.";

fn summarize(m: RuleMatch, found: Vec<String>) -> FilesOutcome {
    let passed = m.all_found();
    let message = if passed {
        ALL_FOUND.to_string()
    } else {
        format!("Missing: {}", m.missing.join(", "))
    };
    FilesOutcome {
        passed,
        message,
        found,
    }
}

/// Required-files check.
pub fn check_required_files(
    client: &dyn HttpClient,
    cfg: &SubcheckConfig,
    link: &str,
    kind: LinkKind,
    assignment: AssignmentType,
) -> FilesOutcome {
    let rules = rules_for(cfg, assignment);
    match kind {
        LinkKind::GithubRepo => check_repo(client, cfg, link, &rules),
        LinkKind::GithubPages => check_site(client, cfg, link, &rules),
        LinkKind::GoogleDrive => match client.head(link) {
            Ok(status) if probe::is_reachable(status) => FilesOutcome {
                passed: true,
                message: "File is accessible.".to_string(),
                found: vec![link.to_string()],
            },
            _ => FilesOutcome::fail("File not accessible."),
        },
        LinkKind::Unknown => FilesOutcome::fail(UNKNOWN_LINK),
    }
}

fn check_repo(
    client: &dyn HttpClient,
    cfg: &SubcheckConfig,
    link: &str,
    rules: &[Rule],
) -> FilesOutcome {
    let Some(repo) = GithubRepoRef::parse(link) else {
        return FilesOutcome::fail(INVALID_REPO);
    };
    match list_repo_files(client, &repo.contents_url(&cfg.http.github_api_base)) {
        Ok(paths) => summarize(match_paths(rules, &paths), paths),
        Err(e) => {
            tracing::warn!(link, error = %e, "repository listing failed");
            FilesOutcome::fail("Error checking files.")
        }
    }
}

/// Pages sites cannot be listed, so each rule is probed at guessed URLs.
fn check_site(
    client: &dyn HttpClient,
    cfg: &SubcheckConfig,
    link: &str,
    rules: &[Rule],
) -> FilesOutcome {
    let present = |url: String| -> bool {
        match client.head(&url) {
            Ok(status) => probe::is_present(status),
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "probe failed");
                false
            }
        }
    };

    let mut m = RuleMatch::default();
    for rule in rules {
        let hit = match rule {
            Rule::Extension(ext) => cfg
                .page_guesses
                .iter()
                .any(|stem| present(site_file_url(link, &format!("{stem}{ext}")))),
            Rule::IndexPage => ["index.html", "index.php"]
                .into_iter()
                .any(|name| present(site_file_url(link, name))),
            Rule::FileName(name) => present(site_file_url(link, name)),
        };
        m.record(rule.label(), hit);
    }
    let found = m.found.clone();
    summarize(m, found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::fake::FakeClient;

    fn cfg() -> SubcheckConfig {
        let mut cfg = SubcheckConfig::default();
        cfg.http.github_api_base = "https://api.test".to_string();
        cfg
    }

    #[test]
    fn repo_with_all_files_passes() {
        let client = FakeClient::new().route(
            "https://api.test/repos/alice/webapp/contents/",
            200,
            r#"[
                {"type": "file", "path": "index.html"},
                {"type": "file", "path": "css/site.css"},
                {"type": "file", "path": "js/app.js"},
                {"type": "file", "path": "readme.md"}
            ]"#,
        );
        let out = check_required_files(
            &client,
            &cfg(),
            "https://github.com/alice/webapp",
            LinkKind::GithubRepo,
            AssignmentType::WebDevelopment,
        );
        assert!(out.passed, "{}", out.message);
        assert_eq!(out.message, "All required file types/extensions found.");
        assert_eq!(out.found.len(), 4);
    }

    #[test]
    fn repo_reports_missing_in_rule_order() {
        let client = FakeClient::new().route(
            "https://api.test/repos/bob/analysis/contents/",
            200,
            r#"[{"type": "file", "path": "data.csv"}]"#,
        );
        let out = check_required_files(
            &client,
            &cfg(),
            "https://github.com/bob/analysis",
            LinkKind::GithubRepo,
            AssignmentType::DataAnalysis,
        );
        assert!(!out.passed);
        assert_eq!(out.message, "Missing: .ipynb, README.md");
        assert_eq!(out.found, vec!["data.csv"]);
    }

    #[test]
    fn repo_listing_error() {
        let client = FakeClient::new().unreachable("https://api.test/repos/bob/x/contents/");
        let out = check_required_files(
            &client,
            &cfg(),
            "https://github.com/bob/x",
            LinkKind::GithubRepo,
            AssignmentType::Cybersecurity,
        );
        assert_eq!(out, FilesOutcome::fail("Error checking files."));
    }

    #[test]
    fn repo_link_without_name_is_invalid() {
        let link = "https://github.com/alice/.git";
        assert_eq!(LinkKind::detect(link), LinkKind::GithubRepo);
        let client = FakeClient::new();
        let out = check_required_files(
            &client,
            &cfg(),
            link,
            LinkKind::GithubRepo,
            AssignmentType::WebDevelopment,
        );
        assert!(!out.passed);
        assert_eq!(out.message, "Invalid GitHub repo URL.");
        assert!(out.found.is_empty());
        assert!(client.requests.borrow().is_empty());
    }

    #[test]
    fn site_probe_failures_count_as_missing() {
        let mut cfg = cfg();
        cfg.rules.insert(
            "cybersecurity".to_string(),
            vec![
                "README.md".to_string(),
                "report.txt".to_string(),
                "notes.txt".to_string(),
                "LICENSE".to_string(),
            ],
        );
        let client = FakeClient::new()
            .ok("https://bob.github.io/sec/README.md")
            .unreachable("https://bob.github.io/sec/report.txt")
            .route("https://bob.github.io/sec/notes.txt", 301, "")
            .route("https://bob.github.io/sec/LICENSE", 500, "");
        let out = check_required_files(
            &client,
            &cfg,
            "https://bob.github.io/sec",
            LinkKind::GithubPages,
            AssignmentType::Cybersecurity,
        );
        assert!(!out.passed);
        assert_eq!(out.message, "Missing: report.txt, notes.txt, LICENSE");
        assert_eq!(out.found, vec!["README.md"]);
    }

    #[test]
    fn site_probes_guessed_names() {
        let site = "https://alice.github.io/demo/";
        let client = FakeClient::new()
            .ok("https://alice.github.io/demo/index.html")
            .ok("https://alice.github.io/demo/style.css")
            .ok("https://alice.github.io/demo/README.md");
        let out = check_required_files(
            &client,
            &cfg(),
            site,
            LinkKind::GithubPages,
            AssignmentType::WebDevelopment,
        );
        assert!(!out.passed);
        assert_eq!(out.message, "Missing: .js");
        assert_eq!(out.found, vec![".html", ".css", "README.md"]);
        // .html hits on the first guess; .js exhausts every guess.
        let guesses = cfg().page_guesses.len();
        assert_eq!(client.count("HEAD"), 1 + 4 + guesses + 1);
    }

    #[test]
    fn site_index_rule_accepts_php() {
        let mut cfg = cfg();
        cfg.rules
            .insert("Web Development".to_string(), vec!["index.html".to_string()]);
        let client = FakeClient::new().ok("https://alice.github.io/index.php");
        let out = check_required_files(
            &client,
            &cfg,
            "https://alice.github.io",
            LinkKind::GithubPages,
            AssignmentType::WebDevelopment,
        );
        assert!(out.passed);
        assert_eq!(out.found, vec!["index.html/index.php"]);
    }

    #[test]
    fn drive_file() {
        let link = "https://drive.google.com/file/d/abc/view";
        let check = |client: &FakeClient| {
            check_required_files(
                client,
                &cfg(),
                link,
                LinkKind::GoogleDrive,
                AssignmentType::GenerativeAi,
            )
        };
        let out = check(&FakeClient::new().ok(link));
        assert!(out.passed);
        assert_eq!(out.message, "File is accessible.");
        assert_eq!(out.found, vec![link]);

        let out = check(&FakeClient::new().unreachable(link));
        assert_eq!(out, FilesOutcome::fail("File not accessible."));
    }

    #[test]
    fn unknown_link() {
        let client = FakeClient::new();
        let out = check_required_files(
            &client,
            &cfg(),
            "https://example.com",
            LinkKind::Unknown,
            AssignmentType::GraphicsDesign,
        );
        assert_eq!(out.message, "Unknown link type.");
        assert!(out.found.is_empty());
    }
}

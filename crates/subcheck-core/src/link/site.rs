//! Candidate file URLs on a static site.

/// Join a site URL and a file name, dropping one trailing `/` from the site.
pub fn site_file_url(site: &str, file: &str) -> String {
    let base = site.strip_suffix('/').unwrap_or(site);
    format!("{base}/{file}")
}

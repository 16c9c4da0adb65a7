//! URL normalization and the harvest pipeline.
//!
//! The normalizer rewrites every query parameter value to a placeholder
//! token while keeping the parameter names, their order, and repeated
//! occurrences intact, so the output marks injection points without losing
//! structure. Records whose path ends with a blacklisted extension are
//! dropped, and records that do not parse as absolute URLs are skipped
//! silently. Normalization is idempotent.

use percent_encoding::percent_decode_str;
use url::Url;
use url::form_urlencoded::Serializer;

use crate::archive::{ArchiveQuery, FetchEnv, fetch_index};
use crate::config::NetworkConfig;
use crate::errors::Result;

/// Path suffix blacklist, built once from user input and read-only after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// Build from suffixes that already carry their leading dots.
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }

    /// Build from raw comma-separated CLI input without dots (`png,svg`).
    pub fn from_cli_list(raw: &str) -> Self {
        Self::new(crate::config::parse_extension_list(raw))
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Exact, case-sensitive suffix match against a URL path.
    pub fn matches_path(&self, path: &str) -> bool {
        self.suffixes.iter().any(|ext| path.ends_with(ext.as_str()))
    }
}

/// Normalize one raw URL record.
///
/// Returns `None` for records that do not parse as absolute URLs and for
/// records whose path hits the extension blacklist. A URL with no query
/// string passes through unchanged; otherwise every parameter value is
/// replaced by `placeholder` with names kept in original order (repeated
/// names are rewritten independently).
pub fn normalize_url(raw: &str, filter: &ExtensionFilter, placeholder: &str) -> Option<String> {
    let mut url = Url::parse(raw.trim()).ok()?;

    if filter.matches_path(url.path()) {
        return None;
    }

    match url.query() {
        None | Some("") => return Some(url.into()),
        Some(_) => {}
    }

    let names: Vec<String> = url.query_pairs().map(|(name, _)| name.into_owned()).collect();
    let mut query = Serializer::new(String::new());
    for name in &names {
        query.append_pair(name, placeholder);
    }
    url.set_query(Some(&query.finish()));

    Some(url.into())
}

/// Percent-decode the whole archive response, split it into one record per
/// line, and normalize each record in arrival order. Blank lines are
/// ignored; skipped records leave no trace in the output.
pub fn extract_from_body(body: &str, filter: &ExtensionFilter, placeholder: &str) -> Vec<String> {
    let decoded = percent_decode_str(body).decode_utf8_lossy();
    decoded
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| normalize_url(line, filter, placeholder))
        .collect()
}

/// Run the full harvest: one archive request, then a single in-process pass
/// over the returned records. A definitive fetch failure propagates as an
/// error and produces no partial output.
pub async fn harvest<E: FetchEnv>(
    query: &ArchiveQuery,
    filter: &ExtensionFilter,
    placeholder: &str,
    net: &NetworkConfig,
    env: &E,
) -> Result<Vec<String>> {
    let url = query.to_url(&net.archive_endpoint);
    let body = fetch_index(&url, net, env).await?;
    Ok(extract_from_body(&body, filter, placeholder))
}

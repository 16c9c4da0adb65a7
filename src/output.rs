//! Output handling for harvest results.
//!
//! Provides the result/metadata structures, human-readable and JSON
//! formatters behind a common trait, and the file sink that persists one
//! normalized URL per line. The sink is only invoked after a successful
//! harvest; a failed fetch never produces a file.

#![allow(dead_code)]

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::errors::{IoResultExt, Result};

/// Final results of a harvest run.
#[derive(Debug, Clone, Serialize)]
pub struct HarvestResults {
    /// The sanitized target domain
    pub domain: String,

    /// Normalized URLs in arrival order
    pub urls: Vec<String>,

    /// Metadata about the run
    pub metadata: HarvestMetadata,
}

/// Metadata about the harvest run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HarvestMetadata {
    /// Wall-clock duration, measured by the caller and passed in explicitly
    pub duration_ms: Option<u64>,

    /// Archive endpoint that was queried
    pub archive_endpoint: String,

    /// Whether the query used the subdomain wildcard
    pub include_subdomains: bool,

    /// Extensions excluded from the output
    pub excluded_extensions: Vec<String>,

    /// Placeholder substituted for query values
    pub placeholder: String,

    /// Non-fatal notes gathered along the way
    pub warnings: Vec<String>,
}

impl HarvestResults {
    pub fn total(&self) -> usize {
        self.urls.len()
    }
}

/// Output format options.
#[derive(Debug, Clone)]
pub enum OutputFormat {
    /// Human-readable listing
    Text {
        /// Append the metadata block after the listing
        show_metadata: bool,
    },

    /// JSON document
    Json {
        /// Pretty-print the JSON
        pretty: bool,
    },
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text {
            show_metadata: false,
        }
    }
}

/// Output formatter trait, one implementation per format.
pub trait OutputFormatter {
    /// Render the results into a printable string
    fn format_results(&self, results: &HarvestResults) -> io::Result<String>;

    /// Get the MIME type for this format
    fn mime_type(&self) -> &'static str;

    /// Get the file extension for this format
    fn file_extension(&self) -> &'static str;
}

/// Plain text formatter: one URL per line, optional metadata block.
pub struct TextFormatter {
    show_metadata: bool,
}

impl TextFormatter {
    pub fn new(show_metadata: bool) -> Self {
        Self { show_metadata }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_results(&self, results: &HarvestResults) -> io::Result<String> {
        let mut out = String::new();

        for url in &results.urls {
            out.push_str(url);
            out.push('\n');
        }

        if self.show_metadata {
            out.push('\n');
            out.push_str(&format!("domain: {}\n", results.domain));
            out.push_str(&format!("total: {}\n", results.total()));
            if let Some(ms) = results.metadata.duration_ms {
                out.push_str(&format!("duration_ms: {ms}\n"));
            }
            for warning in &results.metadata.warnings {
                out.push_str(&format!("warning: {warning}\n"));
            }
        }

        Ok(out)
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}

/// JSON formatter over the serde representation of the results.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_results(&self, results: &HarvestResults) -> io::Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(results)
        } else {
            serde_json::to_string(results)
        };
        rendered.map_err(io::Error::other)
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}

/// Create the formatter matching the requested output format.
pub fn create_formatter(format: &OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text { show_metadata } => Box::new(TextFormatter::new(*show_metadata)),
        OutputFormat::Json { pretty } => Box::new(JsonFormatter::new(*pretty)),
    }
}

/// Write the ordered URL sequence to `path`, one URL per line, UTF-8,
/// creating parent directories as needed.
pub fn write_urls(path: &Path, urls: &[String]) -> Result<()> {
    let display = path.display().to_string();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_path(parent.display().to_string(), "create directory")?;
    }

    let mut contents = String::with_capacity(urls.iter().map(|u| u.len() + 1).sum());
    for url in urls {
        contents.push_str(url);
        contents.push('\n');
    }

    fs::write(path, contents).with_path(display, "write")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_results() -> HarvestResults {
        HarvestResults {
            domain: "example.com".to_string(),
            urls: vec![
                "https://example.com/a?x=FUZZ".to_string(),
                "https://example.com/b?y=FUZZ".to_string(),
            ],
            metadata: HarvestMetadata {
                duration_ms: Some(1200),
                archive_endpoint: "https://web.archive.org/cdx/search/cdx".to_string(),
                include_subdomains: true,
                placeholder: "FUZZ".to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn text_format_lists_urls_in_order() {
        let formatter = TextFormatter::new(false);
        let out = formatter.format_results(&sample_results()).unwrap();
        assert_eq!(
            out,
            "https://example.com/a?x=FUZZ\nhttps://example.com/b?y=FUZZ\n"
        );
    }

    #[test]
    fn text_format_metadata_block() {
        let formatter = TextFormatter::new(true);
        let out = formatter.format_results(&sample_results()).unwrap();
        assert!(out.contains("domain: example.com"));
        assert!(out.contains("total: 2"));
        assert!(out.contains("duration_ms: 1200"));
    }

    #[test]
    fn json_format_round_trips_urls() {
        let formatter = JsonFormatter::new(false);
        let out = formatter.format_results(&sample_results()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["domain"], "example.com");
        assert_eq!(value["urls"].as_array().unwrap().len(), 2);
        assert_eq!(value["metadata"]["placeholder"], "FUZZ");
    }

    #[test]
    fn formatter_dispatch() {
        let text = create_formatter(&OutputFormat::default());
        assert_eq!(text.file_extension(), "txt");
        let json = create_formatter(&OutputFormat::Json { pretty: true });
        assert_eq!(json.mime_type(), "application/json");
    }

    #[test]
    fn write_urls_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output").join("example.com.txt");
        let urls = vec![
            "https://example.com/a?x=FUZZ".to_string(),
            "https://example.com/b?y=FUZZ".to_string(),
        ];

        write_urls(&path, &urls).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "https://example.com/a?x=FUZZ\nhttps://example.com/b?y=FUZZ\n"
        );
    }

    #[test]
    fn write_urls_accepts_empty_result_set() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        write_urls(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}

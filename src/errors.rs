//! Unified error handling.
//!
//! All fallible operations in the crate return `Result<T>` with a
//! `thiserror`-based model:
//!   * Typed variants for the failure domains we actually hit
//!   * A categorization layer (`ErrorCategory`) for structured reporting
//!   * Helper constructors
//!   * `From` conversions for common lower-level errors
//!
//! The only fatal condition in the core pipeline is `ArchiveUnavailable`
//! (retries exhausted). Per-record problems (unparseable URLs) are handled
//! by skipping the record and never surface as errors.

use std::io;

use thiserror::Error;

/// High-level classification for structured reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Io,
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCategory::Input => "input",
            ErrorCategory::Network => "network",
            ErrorCategory::Io => "io",
            ErrorCategory::Internal => "internal",
        };
        f.write_str(s)
    }
}

/// Primary application error type.
#[derive(Error, Debug)]
pub enum ParamHarvestError {
    // ------------------------ Input / Validation ----------------------------
    #[error("Invalid target domain '{input}': {reason}")]
    InvalidDomain { input: String, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    // ----------------------------- Network ----------------------------------
    #[error("Archive index unavailable after {attempts} attempt(s) for {url}: {last_error}")]
    ArchiveUnavailable {
        url: String,
        attempts: u32,
        last_error: String,
    },

    #[error("Network error during {operation} for '{target}': {source}")]
    Network {
        operation: String,
        target: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ----------------------------- I/O / FS ---------------------------------
    #[error("I/O error during {operation} on {path}: {source}")]
    Io {
        path: String,
        operation: String,
        #[source]
        source: io::Error,
    },

    // ---------------------------- Internal ----------------------------------
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ParamHarvestError {
    /// Categorize the error for structured output.
    pub fn category(&self) -> ErrorCategory {
        use ParamHarvestError::*;
        match self {
            InvalidDomain { .. } | Configuration { .. } => ErrorCategory::Input,
            ArchiveUnavailable { .. } | Network { .. } => ErrorCategory::Network,
            Io { .. } => ErrorCategory::Io,
            Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// True when the failure means the harvest produced no result at all
    /// (as opposed to being rejected before any network traffic).
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            ParamHarvestError::ArchiveUnavailable { .. } | ParamHarvestError::Network { .. }
        )
    }

    // ---------------------------- Constructors -----------------------------

    pub fn invalid_domain(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDomain {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn archive_unavailable(
        url: impl Into<String>,
        attempts: u32,
        last_error: impl Into<String>,
    ) -> Self {
        Self::ArchiveUnavailable {
            url: url.into(),
            attempts,
            last_error: last_error.into(),
        }
    }

    pub fn network(
        operation: impl Into<String>,
        target: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Network {
            operation: operation.into(),
            target: target.into(),
            source: source.into(),
        }
    }

    pub fn io(path: impl Into<String>, operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    pub fn internal_with(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Public result alias.
pub type Result<T> = std::result::Result<T, ParamHarvestError>;

/// Map standard IO errors into the `Io` variant (generic context).
impl From<io::Error> for ParamHarvestError {
    fn from(e: io::Error) -> Self {
        ParamHarvestError::Io {
            path: "<unknown>".into(),
            operation: "unspecified".into(),
            source: e,
        }
    }
}

/// Extension trait for enriching IO results with path + operation context.
pub trait IoResultExt<T> {
    fn with_path(self, path: impl Into<String>, operation: impl Into<String>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, io::Error> {
    fn with_path(self, path: impl Into<String>, operation: impl Into<String>) -> Result<T> {
        self.map_err(|e| ParamHarvestError::io(path.into(), operation.into(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_mapping() {
        assert_eq!(
            ParamHarvestError::invalid_domain("x", "empty").category(),
            ErrorCategory::Input
        );
        assert_eq!(
            ParamHarvestError::archive_unavailable("http://a", 4, "HTTP 500").category(),
            ErrorCategory::Network
        );
        assert_eq!(
            ParamHarvestError::internal("boom").category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn display_snippets() {
        let e = ParamHarvestError::archive_unavailable("http://idx/cdx", 4, "HTTP 503");
        let s = e.to_string();
        assert!(s.contains("4 attempt(s)"));
        assert!(s.contains("http://idx/cdx"));
        assert!(s.contains("HTTP 503"));

        let d = ParamHarvestError::invalid_domain("exa mple", "whitespace in label");
        assert!(d.to_string().contains("exa mple"));
    }

    #[test]
    fn fetch_failure_classification() {
        assert!(ParamHarvestError::archive_unavailable("u", 1, "x").is_fetch_failure());
        assert!(!ParamHarvestError::configuration("bad").is_fetch_failure());
    }

    #[test]
    fn io_context() {
        let res: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let mapped = res.with_path("output/example.com.txt", "write");
        match mapped.err().unwrap() {
            ParamHarvestError::Io {
                path, operation, ..
            } => {
                assert_eq!(path, "output/example.com.txt");
                assert_eq!(operation, "write");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}

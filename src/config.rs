//! Configuration management for paramharvest.
//!
//! Centralizes the archive endpoint, network timeouts, retry policy, the
//! extension blacklist and placeholder, and output location. Values come
//! from built-in defaults, then environment variables, then command-line
//! arguments (CLI wins).

#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

/// Wayback Machine CDX index endpoint.
pub const DEFAULT_ARCHIVE_ENDPOINT: &str = "https://web.archive.org/cdx/search/cdx";

/// Fixed browser User-Agent sent with every archive request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for paramharvest.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Network operation settings
    pub network: NetworkConfig,

    /// URL filtering and normalization preferences
    pub filter: FilterConfig,

    /// Output location settings
    pub output: OutputConfig,
}

/// Network-related configuration options
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Base URL of the CDX index
    pub archive_endpoint: String,

    /// User-Agent header for archive requests
    pub user_agent: String,

    /// Per-attempt request timeout
    pub request_timeout: Duration,

    /// Retries after the first failed attempt (total attempts = retries + 1)
    pub retries: u32,

    /// Fixed delay between attempts
    pub retry_backoff: Duration,

    /// Optional proxy URL, routed for both HTTP and HTTPS
    pub proxy: Option<String>,
}

/// URL filtering and normalization configuration
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Path suffixes to reject, with leading dots (e.g. ".png")
    pub exclude_extensions: Vec<String>,

    /// Token substituted for every query parameter value
    pub placeholder: String,
}

/// Output location configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Directory for the default output file
    pub directory: PathBuf,

    /// Explicit output file path, overriding the default
    pub file: Option<PathBuf>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            archive_endpoint: DEFAULT_ARCHIVE_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(10),
            retries: 3,
            retry_backoff: Duration::from_secs(2),
            proxy: None,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            exclude_extensions: Vec::new(),
            placeholder: "FUZZ".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("output"),
            file: None,
        }
    }
}

impl OutputConfig {
    /// Resolve the effective output path for a target domain.
    pub fn resolve_path(&self, domain: &str) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => self.directory.join(format!("{domain}.txt")),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var("PARAMHARVEST_ARCHIVE_ENDPOINT")
            && !endpoint.trim().is_empty()
        {
            config.network.archive_endpoint = endpoint;
        }

        if let Ok(timeout) = std::env::var("PARAMHARVEST_TIMEOUT_SECS")
            && let Ok(secs) = timeout.parse::<u64>()
        {
            config.network.request_timeout = Duration::from_secs(secs);
        }

        if let Ok(backoff) = std::env::var("PARAMHARVEST_RETRY_BACKOFF_MS")
            && let Ok(ms) = backoff.parse::<u64>()
        {
            config.network.retry_backoff = Duration::from_millis(ms);
        }

        if let Ok(agent) = std::env::var("PARAMHARVEST_USER_AGENT")
            && !agent.trim().is_empty()
        {
            config.network.user_agent = agent;
        }

        if let Ok(dir) = std::env::var("PARAMHARVEST_OUTPUT_DIR")
            && !dir.trim().is_empty()
        {
            config.output.directory = PathBuf::from(dir);
        }

        config
    }

    /// Merge with CLI arguments, giving CLI precedence
    pub fn merge_with_cli(&mut self, cli: &Cli) {
        self.network.retries = cli.retries;
        self.network.proxy = cli.proxy.clone();

        self.filter.placeholder = cli.placeholder.clone();
        if let Some(ref raw) = cli.exclude {
            self.filter.exclude_extensions = parse_extension_list(raw);
        }

        if let Some(ref path) = cli.output {
            self.output.file = Some(PathBuf::from(path));
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.network.archive_endpoint.trim();
        match url::Url::parse(endpoint) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
            Ok(parsed) => {
                return Err(ConfigError::InvalidValue {
                    field: "network.archive_endpoint".to_string(),
                    value: endpoint.to_string(),
                    reason: format!("Unsupported scheme '{}'", parsed.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::InvalidValue {
                    field: "network.archive_endpoint".to_string(),
                    value: endpoint.to_string(),
                    reason: e.to_string(),
                });
            }
        }

        if self.network.request_timeout.as_millis() == 0 {
            return Err(ConfigError::InvalidValue {
                field: "network.request_timeout".to_string(),
                value: "0".to_string(),
                reason: "Timeout must be greater than 0".to_string(),
            });
        }

        if self.filter.placeholder.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "filter.placeholder".to_string(),
                value: "".to_string(),
                reason: "Placeholder must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Split a comma-separated extension list and normalize each entry to a
/// leading-dot suffix. Entries already carrying a dot are kept as-is.
pub fn parse_extension_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(|ext| {
            if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{ext}")
            }
        })
        .collect()
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
    /// Invalid configuration value
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    /// Missing required configuration
    MissingRequired { field: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for '{}': {}", value, field, reason)
            }
            ConfigError::MissingRequired { field } => {
                write!(f, "Missing required configuration field: {}", field)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

//! Wayback Machine CDX index client.
//!
//! One archive request per harvest: an HTTP GET with a fixed browser
//! User-Agent, a bounded per-attempt timeout, an optional proxy for both
//! schemes, and a fixed-backoff retry loop. Only status 200 counts as
//! success; any other status or transport error is a failed attempt.
//! Exhausted retries surface as `ParamHarvestError::ArchiveUnavailable`,
//! never as a panic.

use reqwest::{Client, Proxy, StatusCode};
use tokio::time::sleep;

use crate::cli::Cli;
use crate::config::NetworkConfig;
use crate::errors::{ParamHarvestError, Result};

/// Abstraction over environment / verbosity for fetch diagnostics.
/// This removes the direct dependency of the fetch loop on the concrete
/// CLI type and enables reuse from library consumers and tests.
pub trait FetchEnv {
    fn is_trace(&self) -> bool;
    fn error_enabled(&self) -> bool;
}

impl FetchEnv for Cli {
    fn is_trace(&self) -> bool {
        self.is_trace()
    }
    fn error_enabled(&self) -> bool {
        self.error_enabled()
    }
}

/// Env that swallows all diagnostics (library / test use).
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentEnv;

impl FetchEnv for SilentEnv {
    fn is_trace(&self) -> bool {
        false
    }
    fn error_enabled(&self) -> bool {
        false
    }
}

/// Input describing what to retrieve from the archive index.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveQuery {
    pub domain: String,
    pub include_subdomains: bool,
}

impl ArchiveQuery {
    pub fn new(domain: impl Into<String>, include_subdomains: bool) -> Self {
        Self {
            domain: domain.into(),
            include_subdomains,
        }
    }

    /// Render the CDX request URL: plain-text output, one `original` field
    /// per record, deduplicated by URL key.
    pub fn to_url(&self, endpoint: &str) -> String {
        let target = if self.include_subdomains {
            format!("*.{}/*", self.domain)
        } else {
            format!("{}/*", self.domain)
        };
        format!("{endpoint}?url={target}&output=txt&fl=original&collapse=urlkey&page=/")
    }
}

/// Fetch the archive index body for `url`.
///
/// Performs up to `net.retries + 1` attempts, sleeping `net.retry_backoff`
/// between attempts but not after the last. Each failed attempt emits one
/// diagnostic line (status code or error message) through `env`.
pub async fn fetch_index<E: FetchEnv>(url: &str, net: &NetworkConfig, env: &E) -> Result<String> {
    let client = build_client(net)?;
    let attempts = net.retries.saturating_add(1);
    let mut last_error = String::from("no attempt made");

    for attempt in 0..attempts {
        if attempt > 0 {
            sleep(net.retry_backoff).await;
        }
        if env.is_trace() {
            eprintln!("Archive request attempt {}/{}: {url}", attempt + 1, attempts);
        }

        match client.get(url).send().await {
            Ok(resp) if resp.status() == StatusCode::OK => match resp.text().await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    if env.error_enabled() {
                        eprintln!("Error reading archive response for {url}: {e}");
                    }
                    last_error = e.to_string();
                }
            },
            Ok(resp) => {
                let status = resp.status();
                if env.error_enabled() {
                    eprintln!("Failed to retrieve {url}. Status Code: {status}");
                }
                last_error = format!("HTTP {status}");
            }
            Err(e) => {
                if env.error_enabled() {
                    eprintln!("Error fetching {url}: {e}");
                }
                last_error = e.to_string();
            }
        }
    }

    Err(ParamHarvestError::archive_unavailable(
        url, attempts, last_error,
    ))
}

fn build_client(net: &NetworkConfig) -> Result<Client> {
    let mut builder = Client::builder()
        .timeout(net.request_timeout)
        .user_agent(net.user_agent.clone());

    if let Some(ref proxy_url) = net.proxy {
        let proxy = Proxy::all(proxy_url).map_err(|e| {
            ParamHarvestError::configuration(format!("invalid proxy address '{proxy_url}': {e}"))
        })?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| ParamHarvestError::network("client construction", "archive index", e))
}

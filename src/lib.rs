//! paramharvest Library
//!
//! A Rust library for discovering historical URLs for a domain via the
//! Wayback Machine CDX index and rewriting their query parameter values
//! into fuzzing placeholders. This library provides functionality to:
//!
//! - Build and fetch CDX index queries with bounded retries and backoff
//! - Normalize URLs: every query value becomes a placeholder token while
//!   parameter names, order, and repetitions are preserved
//! - Filter out static assets by path extension
//! - Format and persist the resulting URL sequence
//!
//! # Example
//!
//! ```rust
//! use paramharvest::extract::{ExtensionFilter, extract_from_body};
//!
//! let filter = ExtensionFilter::from_cli_list("png,svg");
//! let body = "https://example.com/search?q=rust\nhttps://example.com/logo.png?v=2";
//! let urls = extract_from_body(body, &filter, "FUZZ");
//! assert_eq!(urls, vec!["https://example.com/search?q=FUZZ"]);
//! ```

// Re-export all modules for library use
pub mod archive;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod extract;
pub mod output;
pub mod styled;

// Re-export commonly used types and functions for convenience
pub use archive::{ArchiveQuery, FetchEnv, SilentEnv, fetch_index};
pub use config::Config;
pub use errors::{ErrorCategory, ParamHarvestError, Result};
pub use extract::{ExtensionFilter, extract_from_body, harvest, normalize_url};
pub use output::{HarvestResults, OutputFormat};
pub use styled::StyledFormatter;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

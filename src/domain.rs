//! Target domain hygiene with Public Suffix List integration.
//!
//! Users paste whole URLs as often as bare domains. This module strips the
//! artifacts (scheme, path, port, trailing dot), validates the label syntax
//! before any network traffic happens, and exposes the PSL split so the
//! caller can warn when the input already names a subdomain while the
//! archive query is about to prepend the `*.` wildcard anyway.

use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;
use psl::{domain_str, suffix_str};
use regex::Regex;

/// Hostname labels: alphanumerics and hyphens, no leading/trailing hyphen.
static LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").expect("static label pattern"));

/// Domain information extracted using PSL or fallback parsing
#[derive(Debug, Clone, PartialEq)]
pub struct DomainInfo {
    /// The sanitized domain as queried
    pub full_domain: String,
    /// The registrable domain (what you can actually register)
    pub registrable_domain: Option<String>,
    /// The subdomain part (if any)
    pub subdomain: Option<String>,
    /// The public suffix (TLD or effective TLD)
    pub suffix: Option<String>,
}

impl DomainInfo {
    /// Parse a sanitized domain string into structured domain information
    pub fn parse(domain: &str) -> Result<Self> {
        let clean = sanitize_target(domain)?;

        let mut registrable_domain = domain_str(&clean).map(|s| s.to_string());
        let mut subdomain = registrable_domain
            .as_ref()
            .and_then(|reg| subdomain_for(&clean, reg));

        if registrable_domain.is_none() {
            let (fallback_reg, fallback_sub) = fallback_registrable_domain(&clean);
            registrable_domain = fallback_reg;
            subdomain = fallback_sub;
        }

        let suffix = suffix_str(&clean)
            .map(|s| s.to_string())
            .filter(|s| !s.is_empty());

        Ok(DomainInfo {
            full_domain: clean,
            registrable_domain,
            subdomain,
            suffix,
        })
    }

    /// True when the input already names something below the registrable
    /// domain (e.g. `www.example.com`).
    pub fn has_subdomain(&self) -> bool {
        self.subdomain.is_some()
    }
}

/// Clean a user-supplied target down to a bare lowercase domain.
///
/// Accepts `https://Example.com/path`, `example.com:8443`, `example.com.`
/// and the like; rejects inputs with no usable hostname or with labels
/// that are not valid in a DNS name.
pub fn sanitize_target(input: &str) -> Result<String> {
    let clean = input
        .trim()
        .trim_start_matches("http://")
        .trim_start_matches("https://")
        .split(['/', '?', '#'])
        .next()
        .unwrap_or("")
        .split(':')
        .next()
        .unwrap_or("")
        .trim_start_matches("*.")
        .trim_end_matches('.')
        .to_lowercase();

    if clean.is_empty() {
        return Err(anyhow!("no domain found in input"));
    }

    if !clean.contains('.') {
        return Err(anyhow!("'{clean}' is not a fully qualified domain"));
    }

    for label in clean.split('.') {
        if !LABEL_RE.is_match(label) {
            return Err(anyhow!("invalid label '{label}'"));
        }
    }

    Ok(clean)
}

fn subdomain_for(full_domain: &str, registrable: &str) -> Option<String> {
    if full_domain == registrable || !full_domain.ends_with(registrable) {
        return None;
    }
    let prefix_len = full_domain.len().checked_sub(registrable.len() + 1)?;
    if prefix_len == 0 {
        None
    } else {
        Some(full_domain[..prefix_len].to_string())
    }
}

fn fallback_registrable_domain(domain: &str) -> (Option<String>, Option<String>) {
    let parts: Vec<&str> = domain.split('.').collect();
    if parts.len() < 2 {
        return (Some(domain.to_string()), None);
    }
    let registrable = format!("{}.{}", parts[parts.len() - 2], parts[parts.len() - 1]);
    let subdomain = if parts.len() > 2 {
        Some(parts[..parts.len() - 2].join("."))
    } else {
        None
    };
    (Some(registrable), subdomain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_bare_domain() {
        assert_eq!(sanitize_target("example.com").unwrap(), "example.com");
        assert_eq!(sanitize_target("Example.Com.").unwrap(), "example.com");
    }

    #[test]
    fn test_sanitize_pasted_url() {
        assert_eq!(
            sanitize_target("https://example.com/path?x=1").unwrap(),
            "example.com"
        );
        assert_eq!(
            sanitize_target("http://sub.example.com:8080/login").unwrap(),
            "sub.example.com"
        );
        assert_eq!(sanitize_target("*.example.com").unwrap(), "example.com");
    }

    #[test]
    fn test_sanitize_rejects_garbage() {
        assert!(sanitize_target("").is_err());
        assert!(sanitize_target("   ").is_err());
        assert!(sanitize_target("localhost").is_err());
        assert!(sanitize_target("exa mple.com").is_err());
        assert!(sanitize_target("-bad-.com").is_err());
    }

    #[test]
    fn test_basic_domain_parsing() {
        let info = DomainInfo::parse("www.example.com").unwrap();
        assert_eq!(info.registrable_domain, Some("example.com".to_string()));
        assert_eq!(info.subdomain, Some("www".to_string()));
        assert_eq!(info.suffix, Some("com".to_string()));
        assert!(info.has_subdomain());
    }

    #[test]
    fn test_complex_tld() {
        let info = DomainInfo::parse("shop.example.co.uk").unwrap();
        assert_eq!(info.registrable_domain, Some("example.co.uk".to_string()));
        assert_eq!(info.subdomain, Some("shop".to_string()));
        assert_eq!(info.suffix, Some("co.uk".to_string()));
    }

    #[test]
    fn test_registrable_input_has_no_subdomain() {
        let info = DomainInfo::parse("example.com").unwrap();
        assert!(!info.has_subdomain());
    }

    #[test]
    fn test_multi_level_subdomains() {
        let info = DomainInfo::parse("a.b.c.example.co.uk").unwrap();
        assert_eq!(info.registrable_domain, Some("example.co.uk".to_string()));
        assert_eq!(info.subdomain, Some("a.b.c".to_string()));
    }
}

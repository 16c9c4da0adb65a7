use clap::Parser;

/// Command-line interface definition.
/// Provides command-line options for historical URL parameter discovery.
///
/// Verbosity levels:
/// 0 - silent (only final output)
/// 1 - errors (default)
/// 2 - warnings + errors
/// 5 - trace/debug
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Discover historical URLs for a domain and rewrite their query values into fuzzing placeholders"
)]
pub struct Cli {
    /// Domain name of the target (e.g. example.com)
    #[arg(short, long)]
    pub domain: String,

    /// Restrict the archive query to the exact domain instead of *.domain
    #[arg(long = "no-subs", default_value_t = false)]
    pub no_subs: bool,

    /// Nesting level for parameter discovery (reserved, currently not used)
    #[arg(short, long)]
    pub level: Option<String>,

    /// Comma-separated path extensions to exclude, without dots (e.g. png,svg,css)
    #[arg(short, long)]
    pub exclude: Option<String>,

    /// Output file path (defaults to output/<domain>.txt)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Placeholder substituted for every query parameter value
    #[arg(short, long, default_value = "FUZZ")]
    pub placeholder: String,

    /// Proxy address for archive requests, applied to both HTTP and HTTPS
    #[arg(long)]
    pub proxy: Option<String>,

    /// Do not echo the harvested URLs to the screen
    #[arg(short, long)]
    pub quiet: bool,

    /// Number of retries after a failed archive request
    #[arg(short, long, default_value_t = 3)]
    pub retries: u32,

    /// Verbosity level (0,1,2,5)
    #[arg(long, default_value_t = 1)]
    pub verbose: u8,

    /// Emit the results as JSON on stdout instead of the plain listing
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long = "no-color", default_value_t = false)]
    pub no_color: bool,
}

impl Cli {
    /// Parse CLI arguments from process args.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Should the archive query use the subdomain wildcard?
    pub fn include_subdomains(&self) -> bool {
        !self.no_subs
    }

    /// Effective verbosity; --quiet forces silent mode.
    pub fn verbosity(&self) -> u8 {
        if self.quiet { 0 } else { self.verbose }
    }

    /// Convenience: are we in very verbose/debug mode?
    pub fn is_trace(&self) -> bool {
        self.verbosity() >= 5
    }

    /// Are warning-level messages enabled?
    pub fn warn_enabled(&self) -> bool {
        self.verbosity() >= 2
    }

    /// Are error-level messages enabled?
    pub fn error_enabled(&self) -> bool {
        self.verbosity() >= 1
    }

    /// Should the banner and the URL echo be suppressed?
    pub fn suppress_console(&self) -> bool {
        self.quiet || self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["paramharvest", "-d", "example.com"]);
        assert_eq!(cli.domain, "example.com");
        assert!(cli.include_subdomains());
        assert_eq!(cli.placeholder, "FUZZ");
        assert_eq!(cli.retries, 3);
        assert!(!cli.quiet);
        assert!(cli.error_enabled());
        assert!(!cli.warn_enabled());
    }

    #[test]
    fn no_subs_flag() {
        let cli = Cli::parse_from(["paramharvest", "-d", "example.com", "--no-subs"]);
        assert!(!cli.include_subdomains());
    }

    #[test]
    fn quiet_silences_diagnostics() {
        let cli = Cli::parse_from(["paramharvest", "-d", "example.com", "-q", "--verbose", "5"]);
        assert!(!cli.is_trace());
        assert!(!cli.error_enabled());
        assert!(cli.suppress_console());
    }

    #[test]
    fn domain_is_required() {
        assert!(Cli::try_parse_from(["paramharvest"]).is_err());
    }
}

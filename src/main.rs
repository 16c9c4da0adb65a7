mod archive;
mod cli;
mod config;
mod domain;
mod errors;
mod extract;
mod output;
mod styled;

use std::time::Instant;

use archive::ArchiveQuery;
use cli::Cli;
use config::Config;
use domain::DomainInfo;
use errors::{ParamHarvestError, Result};
use extract::ExtensionFilter;
use output::{HarvestMetadata, HarvestResults, OutputFormat, OutputFormatter, create_formatter};
use styled::StyledFormatter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();
    let start = Instant::now();

    // Load configuration
    let mut config = Config::from_env();
    config.merge_with_cli(&cli);

    if let Err(e) = config.validate() {
        if cli.error_enabled() {
            eprintln!("Configuration error: {e}");
        }
        return Ok(());
    }

    let formatter = if cli.no_color {
        StyledFormatter::without_colors()
    } else {
        StyledFormatter::new()
    };

    if !cli.suppress_console() {
        println!("{}", formatter.banner());
    }

    // Input hygiene before any network traffic
    let domain = match domain::sanitize_target(&cli.domain) {
        Ok(d) => d,
        Err(e) => {
            let err = ParamHarvestError::invalid_domain(cli.domain.clone(), e.to_string());
            if cli.error_enabled() {
                eprintln!("{}", formatter.format_failure(&err.to_string()));
            }
            return Ok(());
        }
    };

    let query = ArchiveQuery::new(domain.clone(), cli.include_subdomains());
    let filter = ExtensionFilter::new(config.filter.exclude_extensions.clone());

    let mut warnings = Vec::new();
    if query.include_subdomains
        && let Ok(info) = DomainInfo::parse(&domain)
        && info.has_subdomain()
    {
        let hint = format!(
            "'{domain}' already names a subdomain; the wildcard query only covers *.{domain}"
        );
        if cli.warn_enabled() {
            eprintln!("{}", formatter.format_warning(&hint));
        }
        warnings.push(hint);
    }

    if cli.is_trace() {
        eprintln!(
            "Archive query: {}",
            query.to_url(&config.network.archive_endpoint)
        );
    }

    let urls = match extract::harvest(
        &query,
        &filter,
        &config.filter.placeholder,
        &config.network,
        &cli,
    )
    .await
    {
        Ok(urls) => urls,
        Err(e) => {
            // Definitive fetch failure: report and terminate without
            // writing any output file.
            if cli.error_enabled() {
                eprintln!(
                    "{}",
                    formatter.format_failure("Failed to fetch URLs from the archive index.")
                );
                eprintln!("{}", formatter.format_failure(&e.to_string()));
            }
            return Ok(());
        }
    };

    let output_path = config.output.resolve_path(&domain);
    output::write_urls(&output_path, &urls)?;

    let elapsed = start.elapsed();
    let results = HarvestResults {
        domain,
        urls,
        metadata: HarvestMetadata {
            duration_ms: Some(elapsed.as_millis() as u64),
            archive_endpoint: config.network.archive_endpoint.clone(),
            include_subdomains: query.include_subdomains,
            excluded_extensions: config.filter.exclude_extensions.clone(),
            placeholder: config.filter.placeholder.clone(),
            warnings,
        },
    };

    if cli.json {
        let json = create_formatter(&OutputFormat::Json { pretty: true });
        match json.format_results(&results) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                if cli.error_enabled() {
                    eprintln!("Error formatting JSON output: {e}");
                }
            }
        }
        return Ok(());
    }

    if !cli.suppress_console() && !results.urls.is_empty() {
        print!("{}", formatter.format_url_list(&results.urls));
    }

    print!(
        "{}",
        formatter.format_summary(&results, &output_path.display().to_string(), elapsed)
    );

    Ok(())
}

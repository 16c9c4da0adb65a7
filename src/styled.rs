//! Styled terminal output using anstyle.
//!
//! Banner, URL echo, and the end-of-run summary. Colors are dropped when
//! stdout is not a terminal, when `NO_COLOR` is set, or on `--no-color`.

use std::time::Duration;

use anstyle::{AnsiColor, Color, Style};

use crate::output::HarvestResults;

const BANNER: &str = r#"
                                   __                                __
    ___  ___ ________ ___ _  ___  / /  ___ _______  _____ ___ ___ __/ /_
   / _ \/ _ `/ __/ _ `/  ' \/ _ \/ _ \/ _ `/ __/ |/ / -_|_-</ _  / __/
  / .__/\_,_/_/  \_,_/_/_/_/_//_/_//_/\_,_/_/  |___/\__/___/\_,_/\__/
 /_/
"#;

/// Style definitions for the UI elements we print
pub struct Styles {
    pub banner: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub url: Style,
    pub muted: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            banner: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
            success: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
            warning: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
            error: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
            url: Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))),
            muted: Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))),
        }
    }
}

/// Styled output formatter for the harvest run
pub struct StyledFormatter {
    styles: Styles,
    use_colors: bool,
}

impl StyledFormatter {
    /// Create a new styled formatter
    pub fn new() -> Self {
        Self {
            styles: Styles::default(),
            use_colors: Self::should_use_colors(),
        }
    }

    /// Create a formatter without colors (for non-interactive use)
    pub fn without_colors() -> Self {
        Self {
            styles: Styles::default(),
            use_colors: false,
        }
    }

    /// Determine if colors should be used based on environment
    fn should_use_colors() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    /// Apply style to text if colors are enabled
    fn styled(&self, text: &str, style: &Style) -> String {
        if self.use_colors {
            format!("{}{}{}", style.render(), text, style.render_reset())
        } else {
            text.to_string()
        }
    }

    /// Startup banner
    pub fn banner(&self) -> String {
        self.styled(BANNER, &self.styles.banner)
    }

    /// Echo the harvested URLs, one per line
    pub fn format_url_list(&self, urls: &[String]) -> String {
        let mut out = String::new();
        for url in urls {
            out.push_str(&self.styled(url, &self.styles.url));
            out.push('\n');
        }
        out
    }

    /// End-of-run summary. The elapsed duration is measured by the caller
    /// and handed in, the formatter holds no clock state.
    pub fn format_summary(
        &self,
        results: &HarvestResults,
        output_path: &str,
        elapsed: Duration,
    ) -> String {
        let mut out = String::new();
        out.push_str(&self.styled(
            &format!("[+] Total unique URLs found: {}", results.total()),
            &self.styles.success,
        ));
        out.push('\n');
        out.push_str(&self.styled(
            &format!("[+] Output saved here: {output_path}"),
            &self.styles.success,
        ));
        out.push('\n');
        out.push_str(&self.styled(
            &format!("[!] Total execution time: {:.2}s", elapsed.as_secs_f64()),
            &self.styles.muted,
        ));
        out.push('\n');
        out
    }

    /// One-line failure notice
    pub fn format_failure(&self, message: &str) -> String {
        self.styled(&format!("[!] {message}"), &self.styles.error)
    }

    /// One-line warning notice
    pub fn format_warning(&self, message: &str) -> String {
        self.styled(&format!("[!] {message}"), &self.styles.warning)
    }
}

impl Default for StyledFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::HarvestMetadata;

    fn plain() -> StyledFormatter {
        StyledFormatter::without_colors()
    }

    fn results(urls: Vec<String>) -> HarvestResults {
        HarvestResults {
            domain: "example.com".to_string(),
            urls,
            metadata: HarvestMetadata::default(),
        }
    }

    #[test]
    fn summary_without_colors_is_plain_text() {
        let out = plain().format_summary(
            &results(vec!["https://example.com/a?x=FUZZ".to_string()]),
            "output/example.com.txt",
            Duration::from_millis(1530),
        );
        assert!(out.contains("[+] Total unique URLs found: 1"));
        assert!(out.contains("[+] Output saved here: output/example.com.txt"));
        assert!(out.contains("[!] Total execution time: 1.53s"));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn url_list_is_one_per_line() {
        let out = plain().format_url_list(&[
            "https://example.com/a?x=FUZZ".to_string(),
            "https://example.com/b?y=FUZZ".to_string(),
        ]);
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn failure_line_is_tagged() {
        assert!(plain().format_failure("boom").starts_with("[!] boom"));
    }
}

use anyhow::Context;
use clap::{Parser, ValueEnum};
use octoprofile_core::client::{Client, GITHUB_API_BASE_URL};
use octoprofile_core::presenter::{DEFAULT_DATE_PATTERN, DEFAULT_LOCALE, DateStyle, Presenter};
use std::path::PathBuf;

/// Username looked up when none is given.
pub const DEFAULT_USERNAME: &str = "gary-ascuy";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "octoprofile")]
#[command(about = "Fetch a GitHub user profile and print or save it", long_about = None)]
#[command(version)]
pub struct Cli {
    /// GitHub username to look up
    #[arg(default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "OCTOPROFILE_API_BASE_URL", default_value = GITHUB_API_BASE_URL)]
    pub base_url: String,

    /// strftime pattern for the account dates
    #[arg(long, env = "OCTOPROFILE_DATE_FORMAT", default_value = DEFAULT_DATE_PATTERN)]
    pub date_format: String,

    /// Locale for month and weekday names (e.g. en_US, de_DE)
    #[arg(long, env = "OCTOPROFILE_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// What to print on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the text report to this file
    #[arg(long)]
    pub text_out: Option<PathBuf>,

    /// Also write the JSON document to this file
    #[arg(long)]
    pub json_out: Option<PathBuf>,

    /// Do not print the profile on stdout
    #[arg(long, short)]
    pub quiet: bool,
}

impl Cli {
    pub fn date_style(&self) -> Result<DateStyle, octoprofile_core::ProfileError> {
        DateStyle::new(self.date_format.as_str(), &self.locale)
    }
}

/// Fetch, print and persist one profile as requested on the command line.
///
/// Writes happen in order (text, then JSON); a failed write leaves earlier ones in place.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let presenter = Presenter::new(cli.date_style()?);
    let client = Client::builder().base_url(&cli.base_url).build();

    tracing::debug!(
        base_url = client.base_url(),
        date_format = presenter.date_style().pattern(),
        "Configured client"
    );

    let profile = client
        .fetch_profile(&cli.username)
        .await
        .with_context(|| format!("Error fetching GitHub user `{}`", cli.username))?;

    if !cli.quiet {
        match cli.format {
            OutputFormat::Text => presenter.display(&profile),
            OutputFormat::Json => presenter.display_json(&profile)?,
        }
    }

    if let Some(path) = &cli.text_out {
        presenter.persist_text(&profile, path).await?;
        tracing::info!(path = %path.display(), "Saved text report");
    }

    if let Some(path) = &cli.json_out {
        presenter.persist_json(&profile, path).await?;
        tracing::info!(path = %path.display(), "Saved JSON document");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["octoprofile"]).unwrap();

        assert_eq!(cli.username, "gary-ascuy");
        assert_eq!(cli.base_url, "https://api.github.com");
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.text_out, None);
        assert_eq!(cli.json_out, None);
        assert!(!cli.quiet);
        assert_eq!(
            cli.date_style().unwrap().format("2015-01-01T00:00:00Z").as_deref(),
            Some("1/1/2015")
        );
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "octoprofile",
            "octocat",
            "--format",
            "json",
            "--text-out",
            "out/profile.txt",
            "--json-out",
            "out/profile.json",
            "--locale",
            "fr_FR",
            "--date-format",
            "%d %B %Y",
            "-q",
        ])
        .unwrap();

        assert_eq!(cli.username, "octocat");
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.text_out, Some(PathBuf::from("out/profile.txt")));
        assert_eq!(cli.json_out, Some(PathBuf::from("out/profile.json")));
        assert!(cli.quiet);
        assert_eq!(
            cli.date_style().unwrap().format("2015-01-01T00:00:00Z").as_deref(),
            Some("01 janvier 2015")
        );
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["octoprofile", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_bad_locale_surfaces_as_error() {
        let cli = Cli::try_parse_from(["octoprofile", "--locale", "klingon"]).unwrap();
        assert!(cli.date_style().is_err());
    }
}

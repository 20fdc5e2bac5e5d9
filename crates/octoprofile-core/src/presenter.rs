//! Text and JSON rendering of a [`Profile`], to the console or to disk.
//!
//! # Example
//! ```
//! use octoprofile_core::presenter::{DateStyle, Presenter};
//!
//! let presenter = Presenter::new(DateStyle::new("%Y-%m-%d", "en_US").unwrap());
//! assert_eq!(presenter.date_style().format("2015-01-01T00:00:00Z").as_deref(), Some("2015-01-01"));
//! ```
use crate::error::{ProfileError, Result};
use crate::profile::Profile;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Locale, Utc};
use std::fmt::Write;
use std::path::Path;

/// Month/day/year without padding, e.g. `1/1/2015`.
pub const DEFAULT_DATE_PATTERN: &str = "%-m/%-d/%Y";
pub const DEFAULT_LOCALE: &str = "en_US";

/// Placeholder for a field the API returned as `null`.
pub const NOT_AVAILABLE: &str = "N/A";

/// How account timestamps are rendered: a strftime pattern and the locale
/// used for month and weekday names. Timestamps are shown in UTC.
#[derive(Debug, Clone)]
pub struct DateStyle {
    pattern: String,
    locale: Locale,
}

impl DateStyle {
    pub fn new(pattern: impl Into<String>, locale: &str) -> Result<Self> {
        let pattern = pattern.into();
        let locale = Locale::try_from(locale)
            .map_err(|_| ProfileError::InvalidDateStyle(format!("unknown locale `{locale}`")))?;

        if StrftimeItems::new_with_locale(&pattern, locale).any(|item| matches!(item, Item::Error))
        {
            return Err(ProfileError::InvalidDateStyle(format!(
                "invalid date pattern `{pattern}`"
            )));
        }

        Ok(Self { pattern, locale })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Format an RFC 3339 timestamp. `None` if it does not parse.
    pub fn format(&self, timestamp: &str) -> Option<String> {
        let parsed = DateTime::parse_from_rfc3339(timestamp)
            .ok()?
            .with_timezone(&Utc);

        let mut out = String::new();
        write!(out, "{}", parsed.format_localized(&self.pattern, self.locale)).ok()?;
        Some(out)
    }
}

impl Default for DateStyle {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_PATTERN.to_string(),
            locale: Locale::en_US,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Presenter {
    date_style: DateStyle,
}

impl Presenter {
    pub fn new(date_style: DateStyle) -> Self {
        Self { date_style }
    }

    pub fn date_style(&self) -> &DateStyle {
        &self.date_style
    }

    /// Render the fixed-layout report. The result has no trailing newline.
    pub fn format_text(&self, profile: &Profile) -> String {
        let lines = [
            "GitHub User Information".to_string(),
            "========================".to_string(),
            format!("Username:     {}", profile.login),
            format!("Name:         {}", or_placeholder(profile.name.as_deref())),
            format!("Bio:          {}", or_placeholder(profile.bio.as_deref())),
            format!("Location:     {}", or_placeholder(profile.location.as_deref())),
            format!("Company:      {}", or_placeholder(profile.company.as_deref())),
            format!("Email:        {}", or_placeholder(profile.email.as_deref())),
            format!("Blog:         {}", or_placeholder(profile.blog.as_deref())),
            format!("Twitter:      {}", or_placeholder(profile.twitter_username.as_deref())),
            String::new(),
            "Stats".to_string(),
            "-----".to_string(),
            format!("Public Repos:   {}", profile.public_repos),
            format!("Public Gists:   {}", profile.public_gists),
            format!("Followers:      {}", profile.followers),
            format!("Following:      {}", profile.following),
            String::new(),
            "Dates".to_string(),
            "-----".to_string(),
            format!("Account Created: {}", self.format_date(&profile.created_at)),
            format!("Profile Updated: {}", self.format_date(&profile.updated_at)),
            String::new(),
            format!("Profile URL: {}", profile.html_url),
            format!("Avatar URL:  {}", profile.avatar_url),
        ];

        lines.join("\n")
    }

    /// Pretty JSON with two-space indentation, camelCase keys in declaration order.
    pub fn format_json(&self, profile: &Profile) -> Result<String> {
        serde_json::to_string_pretty(profile).map_err(ProfileError::Encode)
    }

    pub fn display(&self, profile: &Profile) {
        println!("{}", self.format_text(profile));
    }

    pub fn display_json(&self, profile: &Profile) -> Result<()> {
        println!("{}", self.format_json(profile)?);
        Ok(())
    }

    /// Write the text report to `path`, replacing any existing content.
    pub async fn persist_text(&self, profile: &Profile, path: impl AsRef<Path>) -> Result<()> {
        write_file(path.as_ref(), self.format_text(profile)).await
    }

    /// Write the JSON document to `path`, replacing any existing content.
    pub async fn persist_json(&self, profile: &Profile, path: impl AsRef<Path>) -> Result<()> {
        write_file(path.as_ref(), self.format_json(profile)?).await
    }

    fn format_date(&self, timestamp: &str) -> String {
        self.date_style.format(timestamp).unwrap_or_else(|| {
            tracing::warn!(timestamp, "Unparsable timestamp, rendering it verbatim");
            timestamp.to_string()
        })
    }
}

fn or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

async fn write_file(path: &Path, contents: String) -> Result<()> {
    let len = contents.len();

    tokio::fs::write(path, contents)
        .await
        .map_err(|source| ProfileError::Storage {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), bytes = len, "Wrote profile");
    Ok(())
}

//! GitHub users API client.
//!
//! # Example
//! ```no_run
//! use octoprofile_core::client::Client;
//!
//! # async fn example() -> Result<(), octoprofile_core::ProfileError> {
//! let client = Client::new();
//! let profile = client.fetch_profile("octocat").await?;
//! println!("{} has {} followers", profile.login, profile.followers);
//! # Ok(())
//! # }
//! ```
use crate::error::{ProfileError, Result};
use crate::http_client::{self, HttpClientExt, Method, NoBody, Request, header};
use crate::profile::{Profile, RawProfile, normalize};
use tracing::{Instrument, info_span};

pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Name used when reporting a non-success status.
pub const GITHUB_API_NAME: &str = "GitHub API";

/// Versioned media type of the REST API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

pub const USER_AGENT: &str = "GitHub-User-Fetcher";

pub struct ClientBuilder<'a, T = reqwest::Client> {
    base_url: &'a str,
    http_client: T,
}

impl ClientBuilder<'_, reqwest::Client> {
    pub fn new() -> Self {
        Self {
            base_url: GITHUB_API_BASE_URL,
            http_client: reqwest::Client::default(),
        }
    }
}

impl Default for ClientBuilder<'_, reqwest::Client> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> ClientBuilder<'a, T> {
    pub fn base_url(mut self, base_url: &'a str) -> Self {
        self.base_url = base_url;
        self
    }

    /// Swap the transport, e.g. for a stub in tests.
    pub fn with_client<U>(self, http_client: U) -> ClientBuilder<'a, U> {
        ClientBuilder {
            base_url: self.base_url,
            http_client,
        }
    }

    pub fn build(self) -> Client<T> {
        Client {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            http_client: self.http_client,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Client<T = reqwest::Client> {
    base_url: String,
    http_client: T,
}

impl Client<reqwest::Client> {
    /// Create a new client builder.
    ///
    /// # Example
    /// ```
    /// use octoprofile_core::client::Client;
    ///
    /// let client = Client::builder()
    ///    .base_url("http://localhost:8080")
    ///    .build();
    /// assert_eq!(client.user_url("octocat"), "http://localhost:8080/users/octocat");
    /// ```
    pub fn builder<'a>() -> ClientBuilder<'a> {
        ClientBuilder::new()
    }

    /// Create a client for the public GitHub API. For more control, use the `builder` method.
    pub fn new() -> Self {
        Self::builder().build()
    }
}

impl Default for Client<reqwest::Client> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Client<T> {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http_client(&self) -> &T {
        &self.http_client
    }

    /// Endpoint of a user. The identifier is inserted as-is, without escaping.
    pub fn user_url(&self, identifier: &str) -> String {
        format!("{}/users/{}", self.base_url, identifier)
    }

    fn get(&self, url: &str) -> http_client::Result<Request<NoBody>> {
        Request::builder()
            .method(Method::GET)
            .uri(url)
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .header(header::USER_AGENT, USER_AGENT)
            .body(NoBody)
            .map_err(http_client::Error::Protocol)
    }
}

impl<T> Client<T>
where
    T: HttpClientExt,
{
    /// Look up a single user and return its normalized profile.
    ///
    /// Exactly one request is sent. Non-success statuses become
    /// [`ProfileError::Remote`]; nothing is retried.
    pub async fn fetch_profile(&self, identifier: &str) -> Result<Profile> {
        let url = self.user_url(identifier);
        let span = info_span!(
            target: "octoprofile::fetch",
            "fetch_profile",
            identifier,
            http.status = tracing::field::Empty,
        );

        async move {
            let req = self.get(&url)?;
            tracing::debug!(%url, "Sending request");

            let response = self.http_client.send(req).await?;
            let status = response.status();
            tracing::Span::current().record("http.status", status.as_u16());

            if !status.is_success() {
                tracing::error!(body = %http_client::text(&response), "Error response");
                return Err(ProfileError::Remote {
                    api: GITHUB_API_NAME,
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or_default().to_string(),
                });
            }

            let raw: RawProfile = serde_json::from_slice(response.body()).map_err(|e| {
                tracing::error!("Failed to parse response: {}", e);
                ProfileError::Decode(e)
            })?;

            Ok(normalize(raw))
        }
        .instrument(span)
        .await
    }
}

/// Fetch a profile from the public GitHub API with a default client.
pub async fn fetch_profile(identifier: &str) -> Result<Profile> {
    Client::new().fetch_profile(identifier).await
}

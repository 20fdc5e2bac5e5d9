//! octoprofile looks up a single GitHub user and renders the profile for people and programs.
//!
//! # Table of contents
//!
//! - [Pipeline](#pipeline)
//! - [Simple Example](#simple-example)
//! - [Swapping the transport](#swapping-the-transport)
//!
//! # Pipeline
//! A lookup runs three steps in sequence:
//! - [`Client::fetch_profile`](client::Client::fetch_profile) sends one `GET /users/{username}`
//!   and decodes the body into a [`RawProfile`](profile::RawProfile).
//! - [`normalize`](profile::normalize) renames the wire fields to camelCase, producing a
//!   [`Profile`](profile::Profile).
//! - [`Presenter`](presenter::Presenter) renders the profile as a text report or pretty JSON,
//!   to stdout or to a file.
//!
//! # Simple example:
//! ```no_run
//! use octoprofile_core::{client::Client, presenter::Presenter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), octoprofile_core::ProfileError> {
//!     let profile = Client::new().fetch_profile("octocat").await?;
//!
//!     let presenter = Presenter::default();
//!     presenter.display(&profile);
//!     presenter.persist_json(&profile, "octocat.json").await?;
//!     Ok(())
//! }
//! ```
//!
//! # Swapping the transport
//! [`Client`](client::Client) is generic over [`HttpClientExt`](http_client::HttpClientExt) and
//! defaults to [`reqwest::Client`]. Any other implementation can be injected with
//! [`ClientBuilder::with_client`](client::ClientBuilder::with_client).

pub mod client;
pub mod error;
pub mod http_client;
pub mod presenter;
pub mod profile;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;

pub use client::{Client, fetch_profile};
pub use error::ProfileError;
pub use presenter::{DateStyle, Presenter};
pub use profile::{Profile, RawProfile, normalize};

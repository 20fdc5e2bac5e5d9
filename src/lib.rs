//! Command-line front end for [`octoprofile_core`], re-exported here in full.
//!
//! ```no_run
//! use octoprofile::{Client, Presenter};
//!
//! # async fn example() -> Result<(), octoprofile::ProfileError> {
//! let profile = Client::new().fetch_profile("gary-ascuy").await?;
//! Presenter::default().display(&profile);
//! # Ok(())
//! # }
//! ```

pub mod cli;

pub use octoprofile_core::*;

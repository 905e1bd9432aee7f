//! Google Scholar author profiles
//!
//! Builds structured author records from Google Scholar citation pages:
//! identity, affiliation, citation metrics, citations per year, co-authors and
//! the full publication list.
//!
//! # Features
//!
//! - **Incremental fill**: sections are parsed on demand and remembered
//! - **Paginated publications**: follows "show more" until the list ends
//! - **Co-author stubs**: one lightweight record per co-author panel
//! - **Selector table**: all markup knowledge in one versioned place
//!
//! # Example
//!
//! ```no_run
//! use scholar_profile::{Author, Config, ScholarClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ScholarClient::new(Config::from_env()?)?;
//!
//!     let mut author = Author::new("4bahYMkAAAAJ");
//!     author.fill(&client, &["basics", "indices"]).await?;
//!     println!("{author}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod formatters;
pub mod models;
pub mod profile;

pub use client::{DocumentFetcher, ScholarClient};
pub use config::Config;
pub use error::{ClientError, ProfileError};
pub use models::{Author, Publication, Section};
pub use profile::FillRequest;

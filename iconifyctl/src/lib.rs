//! Iconify CLI Library
//!
//! Command line front end for the Iconify icon API.
//!
//! # Public API
//!
//! The primary public API is the [`client::IconifyClient`], which provides
//! programmatic access to the Iconify REST API. Naming, placement, templates
//! and configuration live in the `iconify-core` crate.
//!
//! ```no_run
//! use iconify_core::Config;
//! use iconifyctl::client::IconifyClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::builder(std::env::current_dir()?)
//!     .with_config_file(true)?
//!     .build();
//! let client = IconifyClient::new(&config)?;
//!
//! let result = client.search_icons("home", &[], Some(32), None).await?;
//! println!("{} icons found", result.total);
//! # Ok(())
//! # }
//! ```

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// HTTP client for the Iconify API.
pub mod client;

// Internal formatting functions - not part of public API
#[doc(hidden)]
pub mod format;

#[cfg(test)]
pub mod test_utils;

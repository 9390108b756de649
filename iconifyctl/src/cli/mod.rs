//! CLI command definitions and handlers
//!
//! - [`commands`] - Command and argument definitions
//! - [`handlers`] - Command execution handlers

mod commands;
mod handlers;

pub use commands::*;
pub use handlers::*;

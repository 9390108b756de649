//! Iconify CLI Core Library
//!
//! Pure building blocks of the Iconify CLI: icon naming and placement,
//! output templates, `.iconify.ini` parsing and configuration resolution.
//! Nothing in this crate talks to the network.
//!
//! ```
//! use iconify_core::{generate_icon_path, NamingStrategy, PlacementStrategy, TemplateKind};
//! use std::path::Path;
//!
//! let info = generate_icon_path(
//!     Path::new("/out"),
//!     TemplateKind::Vue,
//!     "mdi",
//!     "arrow-left",
//!     NamingStrategy::Pascal,
//!     PlacementStrategy::Prefixed,
//! );
//! assert_eq!(info.filename, "MdiArrowLeft.vue");
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod icon;
pub mod ini;
pub mod naming;
pub mod placement;
pub mod template;

// Re-export commonly used types
pub use api::{CollectionInfo, CollectionsResponse, SearchResult};
pub use config::{parse_port, Config, ConfigBuilder, CONFIG_FILE_NAME};
pub use error::*;
pub use icon::IconId;
pub use ini::{IniFile, IniSection};
pub use naming::{transform, NamingStrategy};
pub use placement::{generate_icon_path, IconPathInfo, PlacementStrategy};
pub use template::{
    apply_template, apply_template_at, config_template, decode_template, extension_for,
    TemplateKind,
};

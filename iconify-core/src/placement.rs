//! Output path planning for downloaded icons
//!
//! The planner is the single place deciding where an icon lands on disk. It
//! never touches the filesystem; callers create [`IconPathInfo::folder`]
//! before writing [`IconPathInfo::filepath`].

use crate::error::{IconifyError, Result};
use crate::naming::{transform, NamingStrategy};
use crate::template::TemplateKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where icon files are placed relative to the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementStrategy {
    /// Everything goes into the output directory.
    Flat,
    /// Like `Flat`, but the collection prefix becomes part of the file name.
    Prefixed,
    /// One subfolder per collection prefix.
    Grouped,
}

impl PlacementStrategy {
    pub const ALL: [PlacementStrategy; 3] = [
        PlacementStrategy::Flat,
        PlacementStrategy::Prefixed,
        PlacementStrategy::Grouped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementStrategy::Flat => "flat",
            PlacementStrategy::Prefixed => "prefixed",
            PlacementStrategy::Grouped => "grouped",
        }
    }
}

impl fmt::Display for PlacementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlacementStrategy {
    type Err = IconifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "flat" => Ok(PlacementStrategy::Flat),
            "prefixed" => Ok(PlacementStrategy::Prefixed),
            "grouped" => Ok(PlacementStrategy::Grouped),
            other => Err(IconifyError::UnknownPlacementStrategy(other.to_string())),
        }
    }
}

/// Computed location of an icon file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPathInfo {
    /// File name including the template extension
    pub filename: String,
    /// Folder the file is written into
    pub folder: PathBuf,
    /// `folder` joined with `filename`
    pub filepath: PathBuf,
}

/// Plan the output location of `prefix:icon` rendered with `template`.
///
/// The icon name is split on `-` and re-joined with `naming`. With
/// [`PlacementStrategy::Prefixed`] the split prefix is prepended to the
/// fragments; with [`PlacementStrategy::Grouped`] the raw prefix becomes a
/// subfolder of `base_dir`.
pub fn generate_icon_path(
    base_dir: &Path,
    template: TemplateKind,
    prefix: &str,
    icon: &str,
    naming: NamingStrategy,
    placement: PlacementStrategy,
) -> IconPathInfo {
    let mut parts: Vec<&str> = Vec::new();
    if placement == PlacementStrategy::Prefixed {
        parts.extend(prefix.split('-'));
    }
    parts.extend(icon.split('-'));

    let filename = format!("{}{}", transform(&parts, naming), template.extension());
    let folder = match placement {
        PlacementStrategy::Grouped => base_dir.join(prefix),
        PlacementStrategy::Flat | PlacementStrategy::Prefixed => base_dir.to_path_buf(),
    };
    let filepath = folder.join(&filename);

    IconPathInfo {
        filename,
        folder,
        filepath,
    }
}

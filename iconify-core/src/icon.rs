//! Icon identifiers (`prefix:name`)

use crate::error::{IconifyError, Result};
use std::fmt;
use std::str::FromStr;

/// Fully qualified icon name, e.g. `mdi:arrow-left`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconId {
    /// Collection prefix (`mdi`, `material-symbols`)
    pub prefix: String,
    /// Icon name inside the collection
    pub name: String,
}

impl FromStr for IconId {
    type Err = IconifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((prefix, name)) if !prefix.is_empty() && !name.is_empty() => Ok(Self {
                prefix: prefix.to_string(),
                name: name.to_string(),
            }),
            _ => Err(IconifyError::InvalidIconId(s.to_string())),
        }
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.name)
    }
}

//! Naming strategies for generated icon files

use crate::error::{IconifyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Case convention applied to the fragments of an icon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingStrategy {
    /// `arrowleft`
    Lower,
    /// `ARROWLEFT`
    Upper,
    /// `arrowLeft`
    Camel,
    /// `ArrowLeft`
    Pascal,
    /// `arrow-left`
    Kebab,
}

impl NamingStrategy {
    /// All strategies, in the order they are documented.
    pub const ALL: [NamingStrategy; 5] = [
        NamingStrategy::Lower,
        NamingStrategy::Upper,
        NamingStrategy::Camel,
        NamingStrategy::Pascal,
        NamingStrategy::Kebab,
    ];

    /// The name used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingStrategy::Lower => "lower",
            NamingStrategy::Upper => "upper",
            NamingStrategy::Camel => "camel",
            NamingStrategy::Pascal => "pascal",
            NamingStrategy::Kebab => "kebab",
        }
    }
}

impl fmt::Display for NamingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingStrategy {
    type Err = IconifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lower" => Ok(NamingStrategy::Lower),
            "upper" => Ok(NamingStrategy::Upper),
            "camel" => Ok(NamingStrategy::Camel),
            "pascal" => Ok(NamingStrategy::Pascal),
            "kebab" => Ok(NamingStrategy::Kebab),
            other => Err(IconifyError::UnknownNamingStrategy(other.to_string())),
        }
    }
}

/// Upper-case the first character, leave the rest untouched.
fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join name fragments into a single identifier using `strategy`.
///
/// Fragments are lower-cased before the strategy is applied, so
/// `["Arrow", "LEFT"]` and `["arrow", "left"]` produce the same result.
/// Empty fragments are kept as they are.
pub fn transform<S: AsRef<str>>(parts: &[S], strategy: NamingStrategy) -> String {
    let normalized: Vec<String> = parts.iter().map(|p| p.as_ref().to_lowercase()).collect();

    match strategy {
        NamingStrategy::Lower => normalized.concat(),
        NamingStrategy::Upper => normalized.concat().to_uppercase(),
        NamingStrategy::Camel => normalized
            .iter()
            .enumerate()
            .map(|(i, part)| if i == 0 { part.clone() } else { capitalize(part) })
            .collect(),
        NamingStrategy::Pascal => normalized.iter().map(|part| capitalize(part)).collect(),
        NamingStrategy::Kebab => normalized.join("-"),
    }
}

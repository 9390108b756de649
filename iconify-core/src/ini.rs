//! Minimal INI reader for `.iconify.ini`
//!
//! Supported syntax:
//! - blank lines and lines starting with `;` are skipped
//! - `[name]` opens a section
//! - `key = value`, where neither side contains whitespace
//!
//! Repeating a key inside a section appends to its values instead of
//! replacing them. Keys before the first header belong to
//! [`IniFile::DEFAULT_SECTION`].

use crate::error::{IconifyError, Result};
use indexmap::IndexMap;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

static ENTRY_RE: OnceLock<Regex> = OnceLock::new();

fn entry_regex() -> &'static Regex {
    ENTRY_RE.get_or_init(|| Regex::new(r"^(\S+)\s*=\s*(\S+)$").unwrap())
}

type SectionData = IndexMap<String, Vec<String>>;

/// Parse a whole number, accepting forms like `443` and `443.0`.
pub(crate) fn parse_integer(raw: &str) -> Option<i64> {
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }

    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

/// A named section of an [`IniFile`]
#[derive(Debug, Clone, Copy)]
pub struct IniSection<'a> {
    name: &'a str,
    data: &'a SectionData,
}

impl<'a> IniSection<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Whether `key` appears in the section at least once
    pub fn has_value(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// All values of `key`, in file order
    pub fn values(&self, key: &str) -> Result<&'a [String]> {
        self.data
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| self.error(format!("contains no values for the key '{}'", key)))
    }

    /// The single value of `key`; fails if the key is missing or repeated
    pub fn get_string(&self, key: &str) -> Result<&'a str> {
        match self.values(key)? {
            [value] => Ok(value.as_str()),
            _ => Err(self.error(format!("contains multiple values for the key '{}'", key))),
        }
    }

    pub fn get_integer(&self, key: &str) -> Result<i64> {
        let raw = self.get_string(key)?;
        parse_integer(raw).ok_or_else(|| {
            self.error(format!("has an invalid integer '{}' for the key '{}'", raw, key))
        })
    }

    pub fn get_number(&self, key: &str) -> Result<f64> {
        let raw = self.get_string(key)?;
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| {
                self.error(format!("has an invalid number '{}' for the key '{}'", raw, key))
            })
    }

    /// `true`, `True`, `1` or `false`, `False`, `0`
    pub fn get_boolean(&self, key: &str) -> Result<bool> {
        match self.get_string(key)? {
            "true" | "True" | "1" => Ok(true),
            "false" | "False" | "0" => Ok(false),
            raw => Err(self.error(format!(
                "has an invalid boolean '{}' for the key '{}'",
                raw, key
            ))),
        }
    }

    fn error(&self, message: String) -> IconifyError {
        IconifyError::ConfigSection(format!("Section '{}' {}", self.name, message))
    }
}

/// Parsed INI document
#[derive(Debug, Clone, Default)]
pub struct IniFile {
    sections: IndexMap<String, SectionData>,
}

impl IniFile {
    /// Section holding keys that appear before any `[section]` header
    pub const DEFAULT_SECTION: &'static str = "[__DEFAULT__]";

    /// Parse INI text.
    ///
    /// # Errors
    ///
    /// Returns [`IconifyError::ConfigFileParse`] with the 1-based line number
    /// of the first line that is neither blank, a comment, a header nor an
    /// entry.
    pub fn parse(content: &str) -> Result<Self> {
        let mut sections: IndexMap<String, SectionData> = IndexMap::new();
        sections.insert(Self::DEFAULT_SECTION.to_string(), SectionData::new());
        let mut active = Self::DEFAULT_SECTION.to_string();

        for (index, line) in content.split('\n').map(str::trim).enumerate() {
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') && line.len() >= 2 {
                active = line[1..line.len() - 1].to_string();
                sections.entry(active.clone()).or_default();
                continue;
            }

            let caps = entry_regex()
                .captures(line)
                .ok_or_else(|| IconifyError::ConfigFileParse {
                    line: index + 1,
                    message: "Line has wrong format".to_string(),
                })?;

            sections
                .entry(active.clone())
                .or_default()
                .entry(caps[1].to_string())
                .or_default()
                .push(caps[2].to_string());
        }

        Ok(Self { sections })
    }

    /// Read and parse the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Look up a section, failing if it does not exist
    pub fn section(&self, name: &str) -> Result<IniSection<'_>> {
        self.try_section(name)
            .ok_or_else(|| IconifyError::ConfigSection(format!("Unknown section '{}'", name)))
    }

    pub fn try_section(&self, name: &str) -> Option<IniSection<'_>> {
        self.sections
            .get_key_value(name)
            .map(|(name, data)| IniSection { name, data })
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

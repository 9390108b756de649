//! Output templates for downloaded icons
//!
//! A template body is decoded from the registry, a license comment is built
//! from the collection metadata, and the placeholders are replaced in a
//! single pass. Substituted values are never scanned again, so `{...}` text
//! inside an SVG or icon name reaches the output untouched.

mod registry;

use crate::api::CollectionInfo;
use crate::error::{IconifyError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{([^\s}]+)\}").unwrap())
}

/// Built-in output template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateKind {
    #[serde(rename = "raw")]
    Raw,
    #[serde(rename = "raw-ts")]
    RawTs,
    #[serde(rename = "svg")]
    Svg,
    #[serde(rename = "vue")]
    Vue,
    #[serde(rename = "php")]
    Php,
    #[serde(rename = "jsx")]
    Jsx,
    #[serde(rename = "tsx")]
    Tsx,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 7] = [
        TemplateKind::Raw,
        TemplateKind::RawTs,
        TemplateKind::Svg,
        TemplateKind::Vue,
        TemplateKind::Php,
        TemplateKind::Jsx,
        TemplateKind::Tsx,
    ];

    /// Key used in config files and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            TemplateKind::Raw => "raw",
            TemplateKind::RawTs => "raw-ts",
            TemplateKind::Svg => "svg",
            TemplateKind::Vue => "vue",
            TemplateKind::Php => "php",
            TemplateKind::Jsx => "jsx",
            TemplateKind::Tsx => "tsx",
        }
    }

    /// File extension of rendered files, including the dot
    pub fn extension(&self) -> &'static str {
        match self {
            TemplateKind::Raw => ".js",
            TemplateKind::RawTs => ".ts",
            TemplateKind::Svg => ".svg",
            TemplateKind::Vue => ".vue",
            TemplateKind::Php => ".php",
            TemplateKind::Jsx => ".jsx",
            TemplateKind::Tsx => ".tsx",
        }
    }

    /// Prefix for every line of the license comment
    pub fn comment_prefix(&self) -> &'static str {
        match self {
            TemplateKind::Raw
            | TemplateKind::RawTs
            | TemplateKind::Php
            | TemplateKind::Jsx
            | TemplateKind::Tsx => " * ",
            TemplateKind::Svg | TemplateKind::Vue => "",
        }
    }

    fn payload(&self) -> &'static str {
        match self {
            TemplateKind::Raw => registry::RAW,
            TemplateKind::RawTs => registry::RAW_TS,
            TemplateKind::Svg => registry::SVG,
            TemplateKind::Vue => registry::VUE,
            TemplateKind::Php => registry::PHP,
            TemplateKind::Jsx => registry::JSX,
            TemplateKind::Tsx => registry::TSX,
        }
    }

    /// Decoded template body
    pub fn body(&self) -> Result<String> {
        decode_template(self.payload())
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TemplateKind {
    type Err = IconifyError;

    fn from_str(s: &str) -> Result<Self> {
        TemplateKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| IconifyError::UnknownTemplate(s.to_string()))
    }
}

/// File extension for a template key such as `"raw-ts"`.
pub fn extension_for(key: &str) -> Result<&'static str> {
    key.parse::<TemplateKind>().map(|kind| kind.extension())
}

/// Decode a base64 template payload into UTF-8 text.
///
/// Unlike lenient decoders, invalid base64 is rejected instead of being
/// truncated.
pub fn decode_template(payload: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| IconifyError::MalformedTemplate(format!("invalid base64: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| IconifyError::MalformedTemplate(format!("invalid UTF-8: {}", e)))
}

/// Contents of the starter configuration file
pub fn config_template() -> Result<String> {
    decode_template(registry::CONFIG)
}

fn build_comment(
    prefix: &str,
    icon: &str,
    collection: &CollectionInfo,
    comment_prefix: &str,
    downloaded_at: DateTime<Utc>,
) -> String {
    let lines = [
        format!(
            "This file was generated with the UNOFFICIAL Iconify CLI v{}",
            env!("CARGO_PKG_VERSION")
        ),
        String::new(),
        format!("Icon: {}:{}", prefix, icon),
        format!("Collection: {}", collection.name),
        format!(
            "License: {} ({})",
            collection.license.title,
            collection.license.spdx.as_deref().unwrap_or("N/A")
        ),
        format!("Version: {}", collection.version.as_deref().unwrap_or("N/A")),
        format!(
            "Author: {} ({})",
            collection.author.name,
            collection.author.url.as_deref().unwrap_or("N/A")
        ),
        format!(
            "Downloaded: {}",
            downloaded_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
    ];

    lines
        .iter()
        .map(|line| format!("{}{}", comment_prefix, line))
        .collect::<Vec<_>>()
        .join(LINE_ENDING)
}

/// Values for the placeholders a template may reference
struct Substitutions<'a> {
    license: &'a str,
    svg: &'a str,
    svg_base64: &'a str,
    icon: &'a str,
    collection: &'a str,
}

impl<'a> Substitutions<'a> {
    fn get(&self, key: &str) -> Option<&'a str> {
        match key {
            "license" => Some(self.license),
            "svg" => Some(self.svg),
            "svg:base64" => Some(self.svg_base64),
            "icon" => Some(self.icon),
            "collection" => Some(self.collection),
            _ => None,
        }
    }
}

fn substitute(template: &str, values: &Substitutions<'_>) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Render `svg` with the given template, stamping the current time.
pub fn apply_template(
    kind: TemplateKind,
    prefix: &str,
    icon: &str,
    collection: &CollectionInfo,
    svg: &str,
) -> Result<String> {
    apply_template_at(kind, prefix, icon, collection, svg, Utc::now())
}

/// Render `svg` with the given template and an explicit download timestamp.
pub fn apply_template_at(
    kind: TemplateKind,
    prefix: &str,
    icon: &str,
    collection: &CollectionInfo,
    svg: &str,
    downloaded_at: DateTime<Utc>,
) -> Result<String> {
    let license = build_comment(prefix, icon, collection, kind.comment_prefix(), downloaded_at);
    let svg_base64 = STANDARD.encode(svg.as_bytes());
    let body = kind.body()?;

    Ok(substitute(
        &body,
        &Substitutions {
            license: &license,
            svg,
            svg_base64: &svg_base64,
            icon,
            collection: prefix,
        },
    ))
}

//! Configuration for the Iconify CLI
//!
//! The effective [`Config`] is assembled once per invocation by
//! [`ConfigBuilder`] from three layers, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. The nearest `.iconify.ini` above the working directory
//! 3. Explicit overrides (command line flags)
//!
//! Overrides always win regardless of the order the builder methods are
//! called in. A configuration file that exists but cannot be parsed is an
//! error, even when every value it sets is overridden.

mod paths;

pub use paths::{find_nearest_config_file, normalize_path, CONFIG_FILE_NAME};

use crate::error::{IconifyError, Result};
use crate::ini::{parse_integer, IniFile, IniSection};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default Iconify API host
pub const DEFAULT_API_HOST: &str = "api.iconify.design";

/// Default Iconify API port
pub const DEFAULT_API_PORT: u16 = 443;

/// Effective configuration of one CLI invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// API host name
    pub api_host: String,

    /// API port
    pub api_port: u16,

    /// Base directory for downloaded icons (absolute)
    pub out_dir: PathBuf,

    /// Placement strategy name, validated where it is used
    pub placement: Option<String>,

    /// Naming strategy name, validated where it is used
    pub naming: Option<String>,

    /// Template key, validated where it is used
    pub template: Option<String>,

    /// Configuration file the values were read from, if any
    pub source: Option<PathBuf>,
}

impl Config {
    /// Built-in defaults; `working_dir` becomes the output directory.
    pub fn defaults(working_dir: &Path) -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            api_port: DEFAULT_API_PORT,
            out_dir: working_dir.to_path_buf(),
            placement: None,
            naming: None,
            template: None,
            source: None,
        }
    }

    /// Create a new builder rooted at `working_dir`
    pub fn builder(working_dir: impl Into<PathBuf>) -> ConfigBuilder {
        ConfigBuilder::new(working_dir)
    }

    /// Base URL of the API, e.g. `https://api.iconify.design:443`
    pub fn api_base_url(&self) -> String {
        format!("https://{}:{}", self.api_host, self.api_port)
    }
}

/// Parse a port given on the command line.
///
/// Accepts whole numbers in `0..=65535`; anything else is an
/// [`IconifyError::InvalidInput`].
pub fn parse_port(raw: &str) -> Result<u16> {
    parse_integer(raw)
        .and_then(|port| u16::try_from(port).ok())
        .ok_or_else(|| IconifyError::InvalidInput(format!("'{}' is not a valid port", raw)))
}

/// Builder for [`Config`] with layered precedence
#[derive(Debug)]
pub struct ConfigBuilder {
    working_dir: PathBuf,
    api_host: Option<String>,
    api_port: Option<u16>,
    out_dir: Option<PathBuf>,
    placement: Option<String>,
    naming: Option<String>,
    template: Option<String>,
    source: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Create a builder; relative paths and the file search start at `working_dir`
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            api_host: None,
            api_port: None,
            out_dir: None,
            placement: None,
            naming: None,
            template: None,
            source: None,
        }
    }

    /// Set the API host
    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = Some(host.into());
        self
    }

    /// Set the API port
    pub fn with_api_port(mut self, port: u16) -> Self {
        self.api_port = Some(port);
        self
    }

    /// Set the output directory; relative paths resolve against the working directory
    pub fn with_out_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.out_dir = Some(normalize_path(&self.working_dir.join(dir.as_ref())));
        self
    }

    pub fn with_placement(mut self, placement: impl Into<String>) -> Self {
        self.placement = Some(placement.into());
        self
    }

    pub fn with_naming(mut self, naming: impl Into<String>) -> Self {
        self.naming = Some(naming.into());
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Load the nearest configuration file, if `search` is set and one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// recognized key holds an invalid value.
    pub fn with_config_file(self, search: bool) -> Result<Self> {
        if !search {
            debug!("Config file search disabled");
            return Ok(self);
        }

        match find_nearest_config_file(&self.working_dir)? {
            Some(path) => {
                info!(path = %path.display(), "Config found");
                let ini = IniFile::from_file(&path)?;
                self.with_ini(&ini, &path)
            }
            None => {
                debug!("No config file found");
                Ok(self)
            }
        }
    }

    /// Apply an already parsed configuration file located at `path`.
    ///
    /// Values only fill fields that no override has set.
    pub fn with_ini(mut self, ini: &IniFile, path: &Path) -> Result<Self> {
        if let Some(section) = ini.try_section("api") {
            self.apply_api_section(section)?;
        }

        if let Some(section) = ini.try_section("output") {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            self.apply_output_section(section, base)?;
        }

        self.source = Some(path.to_path_buf());
        Ok(self)
    }

    fn apply_api_section(&mut self, section: IniSection<'_>) -> Result<()> {
        if section.has_value("host") {
            let host = section.get_string("host")?;
            self.api_host.get_or_insert_with(|| host.to_string());
        }

        if section.has_value("port") {
            let port = section.get_integer("port")?;
            let port = u16::try_from(port).map_err(|_| {
                IconifyError::ConfigSection(format!(
                    "Section '{}' has an out of range port {}",
                    section.name(),
                    port
                ))
            })?;
            self.api_port.get_or_insert(port);
        }

        Ok(())
    }

    fn apply_output_section(&mut self, section: IniSection<'_>, base: &Path) -> Result<()> {
        if section.has_value("out_dir") {
            let raw = Path::new(section.get_string("out_dir")?);
            let out_dir = if raw.is_absolute() {
                raw.to_path_buf()
            } else {
                normalize_path(&base.join(raw))
            };
            self.out_dir.get_or_insert(out_dir);
        }

        let optional = [
            ("placement", &mut self.placement),
            ("naming", &mut self.naming),
            ("template", &mut self.template),
        ];
        for (key, field) in optional {
            if section.has_value(key) {
                let value = section.get_string(key)?;
                field.get_or_insert_with(|| value.to_string());
            }
        }

        Ok(())
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        let defaults = Config::defaults(&self.working_dir);

        Config {
            api_host: self.api_host.unwrap_or(defaults.api_host),
            api_port: self.api_port.unwrap_or(defaults.api_port),
            out_dir: self.out_dir.unwrap_or(defaults.out_dir),
            placement: self.placement,
            naming: self.naming,
            template: self.template,
            source: self.source,
        }
    }
}

//! CLI command and subcommand definitions

use clap::{Args, Parser, Subcommand};
use iconify_core::ConfigBuilder;
use std::path::PathBuf;

/// Iconify icon CLI
#[derive(Parser, Debug)]
#[command(name = "iconify")]
#[command(version, about = "Search and download icons from the Iconify API", long_about = None)]
pub struct Cli {
    /// API host (overrides config file)
    #[arg(long, global = true, value_name = "HOST")]
    pub config_host: Option<String>,

    /// API port (overrides config file)
    #[arg(long, global = true, value_name = "PORT", value_parser = parse_port_arg)]
    pub config_port: Option<u16>,

    /// Don't load the nearest .iconify.ini
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_port_arg(raw: &str) -> Result<u16, String> {
    iconify_core::parse_port(raw).map_err(|e| e.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty table output
    Table,
    /// JSON output
    Json,
}

impl From<&OutputFormat> for crate::format::OutputFormat {
    fn from(format: &OutputFormat) -> Self {
        match format {
            OutputFormat::Table => crate::format::OutputFormat::Table,
            OutputFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display information about icon sets
    Sets(SetsArgs),

    /// Search icons
    Search(SearchArgs),

    /// Download one or more icons
    Download(DownloadArgs),

    /// Create or inspect the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug)]
pub struct SetsArgs {
    /// Maximum number of sets to list
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,

    /// Number of sets to skip
    #[arg(short, long, default_value_t = 0)]
    pub offset: u32,

    /// Only list sets with this prefix (repeatable)
    #[arg(short, long = "prefix", value_name = "PREFIX")]
    pub prefixes: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search pattern
    pub pattern: String,

    /// Maximum number of results
    #[arg(
        short,
        long,
        default_value_t = 999,
        value_parser = clap::value_parser!(u32).range(32..=999)
    )]
    pub limit: u32,

    /// Index of the first result
    #[arg(short, long, default_value_t = 0)]
    pub offset: u32,

    /// Only search sets with this prefix (repeatable)
    #[arg(short, long = "prefix", value_name = "PREFIX")]
    pub prefixes: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Icons to download, as prefix:name
    #[arg(required = true, value_name = "ICON")]
    pub icons: Vec<String>,

    /// Template the icon gets wrapped in
    #[arg(short, long)]
    pub template: Option<String>,

    /// Placement strategy (flat, prefixed, grouped)
    #[arg(short, long)]
    pub placement: Option<String>,

    /// Naming strategy (lower, upper, camel, pascal, kebab)
    #[arg(short, long)]
    pub naming: Option<String>,

    /// Base output folder
    #[arg(short, long, value_name = "FOLDER")]
    pub output: Option<PathBuf>,
}

impl DownloadArgs {
    /// Apply the download flags as configuration overrides
    pub fn apply_overrides(&self, mut builder: ConfigBuilder) -> ConfigBuilder {
        if let Some(ref template) = self.template {
            builder = builder.with_template(template);
        }
        if let Some(ref placement) = self.placement {
            builder = builder.with_placement(placement);
        }
        if let Some(ref naming) = self.naming {
            builder = builder.with_naming(naming);
        }
        if let Some(ref output) = self.output {
            builder = builder.with_out_dir(output);
        }
        builder
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Create a config file in the current working directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show the resolved configuration
    Show,
}

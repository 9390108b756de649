//! Output formatting utilities for the CLI
//!
//! Provides tagged console lines plus table and JSON formatting with colors.

use anyhow::Result;
use colored::*;
use iconify_core::{CollectionsResponse, Config, SearchResult};
use indexmap::IndexMap;
use tabled::{builder::Builder, settings::Style, Table, Tabled};

/// Number of icon names per row of the search grid
pub const SEARCH_GRID_COLUMNS: usize = 4;

/// Output format options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

fn tag(name: &str, color: Color) -> String {
    format!("[{}]: ", name.color(color))
}

/// Print an `[Info]` line to stdout
pub fn write_info(message: &str) {
    println!("{}{}", tag("Info", Color::BrightBlue), message);
}

/// Print a `[Fetch]` line to stdout
pub fn write_fetch(message: &str) {
    println!("{}{}", tag("Fetch", Color::Green), message);
}

/// Print an `[Error]` line to stderr
pub fn write_error(message: &str) {
    eprintln!("{}{}", tag("Error", Color::Red), message);
}

/// Format success message
pub fn format_success(message: &str) -> String {
    format!("{} {}", "✓".green().bold(), message)
}

/// Format the collections in `[offset, offset + limit)`.
///
/// Row numbers are 1-based positions in the full response, so a listing
/// continued with `--offset` keeps counting where the previous one stopped.
pub fn format_collections(
    collections: &CollectionsResponse,
    offset: usize,
    limit: Option<usize>,
    format: &OutputFormat,
) -> Result<String> {
    let selected = collections
        .iter()
        .enumerate()
        .skip(offset)
        .take(limit.unwrap_or(usize::MAX));

    match format {
        OutputFormat::Json => {
            let subset: IndexMap<_, _> = selected.map(|(_, entry)| entry).collect();
            Ok(serde_json::to_string_pretty(&subset)?)
        }
        OutputFormat::Table => {
            #[derive(Tabled)]
            struct CollectionRow {
                #[tabled(rename = "#")]
                index: usize,
                #[tabled(rename = "Prefix")]
                prefix: String,
                #[tabled(rename = "Name")]
                name: String,
                #[tabled(rename = "Amount Icons")]
                total: String,
            }

            let rows: Vec<CollectionRow> = selected
                .map(|(i, (prefix, info))| CollectionRow {
                    index: i + 1,
                    prefix: prefix.cyan().to_string(),
                    name: info.name.clone(),
                    total: info
                        .total
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| "-".dimmed().to_string()),
                })
                .collect();

            Ok(Table::new(rows).with(Style::rounded()).to_string())
        }
    }
}

/// Format search results as a grid of icon names.
pub fn format_search(result: &SearchResult, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Table => {
            if result.icons.is_empty() {
                return Ok(String::new());
            }

            let mut builder = Builder::default();
            for chunk in result.icons.chunks(SEARCH_GRID_COLUMNS) {
                let mut row: Vec<String> = chunk.to_vec();
                row.resize(SEARCH_GRID_COLUMNS, String::new());
                builder.push_record(row);
            }

            Ok(builder.build().with(Style::blank()).to_string())
        }
    }
}

/// Format the resolved configuration
pub fn format_config(config: &Config, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Table => {
            let unset = || "(unset)".dimmed().to_string();
            let rows = [
                ("API Host", config.api_host.clone()),
                ("API Port", config.api_port.to_string()),
                ("Output Dir", config.out_dir.display().to_string()),
                ("Template", config.template.clone().unwrap_or_else(unset)),
                ("Placement", config.placement.clone().unwrap_or_else(unset)),
                ("Naming", config.naming.clone().unwrap_or_else(unset)),
                (
                    "Config File",
                    config
                        .source
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(none)".dimmed().to_string()),
                ),
            ];

            let mut output = String::new();
            output.push_str(&"Iconify Configuration:".bold().to_string());
            output.push('\n');
            output.push_str(&format!("{:<20} Value\n", "Setting"));
            output.push_str(&"-".repeat(40));
            for (setting, value) in rows {
                output.push('\n');
                output.push_str(&format!("{:<20} {}", setting, value));
            }

            Ok(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconify_core::api::{Author, CollectionInfo, License};
    use std::path::Path;

    fn collections() -> CollectionsResponse {
        let info = |name: &str, total: u32| CollectionInfo {
            name: name.to_string(),
            total: Some(total),
            version: None,
            author: Author {
                name: "Someone".to_string(),
                url: None,
            },
            license: License {
                title: "MIT".to_string(),
                spdx: Some("MIT".to_string()),
                url: None,
            },
            category: None,
            palette: None,
        };

        let mut collections = CollectionsResponse::new();
        collections.insert("mdi".to_string(), info("Material Design Icons", 7447));
        collections.insert("bi".to_string(), info("Bootstrap Icons", 2050));
        collections.insert("tabler".to_string(), info("Tabler Icons", 5200));
        collections
    }

    #[test]
    fn test_format_success() {
        let message = format_success("Operation completed");
        assert!(message.contains("✓"));
        assert!(message.contains("Operation completed"));
    }

    #[test]
    fn test_format_collections_table() {
        colored::control::set_override(false);
        let output =
            format_collections(&collections(), 1, Some(1), &OutputFormat::Table).unwrap();

        assert!(output.contains("Amount Icons"));
        assert!(output.contains("Bootstrap Icons"));
        assert!(output.contains("2050"));
        assert!(output.contains("│ 2 "));
        assert!(!output.contains("Material Design Icons"));
        assert!(!output.contains("Tabler Icons"));
    }

    #[test]
    fn test_format_collections_without_limit() {
        let output = format_collections(&collections(), 0, None, &OutputFormat::Table).unwrap();
        assert!(output.contains("Material Design Icons"));
        assert!(output.contains("Tabler Icons"));
    }

    #[test]
    fn test_format_collections_json_keeps_order() {
        let output = format_collections(&collections(), 1, None, &OutputFormat::Json).unwrap();
        let parsed: IndexMap<String, CollectionInfo> = serde_json::from_str(&output).unwrap();
        let prefixes: Vec<&str> = parsed.keys().map(String::as_str).collect();
        assert_eq!(prefixes, ["bi", "tabler"]);
    }

    #[test]
    fn test_format_collections_offset_past_end() {
        let output = format_collections(&collections(), 10, None, &OutputFormat::Json).unwrap();
        assert_eq!(output, "{}");
    }

    #[test]
    fn test_format_search_grid_pads_last_row() {
        let result = SearchResult {
            icons: ["mdi:a", "mdi:b", "mdi:c", "mdi:d", "mdi:e"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            total: 5,
            limit: 999,
            start: 0,
        };

        let output = format_search(&result, &OutputFormat::Table).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("mdi:a") && lines[0].contains("mdi:d"));
        assert!(lines[1].contains("mdi:e"));
        assert!(!lines[1].contains("mdi:a"));
    }

    #[test]
    fn test_format_search_empty() {
        let result = SearchResult {
            icons: Vec::new(),
            total: 0,
            limit: 999,
            start: 0,
        };
        assert_eq!(format_search(&result, &OutputFormat::Table).unwrap(), "");
    }

    #[test]
    fn test_format_search_json() {
        let result = SearchResult {
            icons: vec!["mdi:home".to_string()],
            total: 1,
            limit: 32,
            start: 0,
        };
        let output = format_search(&result, &OutputFormat::Json).unwrap();
        assert!(output.contains("\"mdi:home\""));
        assert!(output.contains("\"total\": 1"));
    }

    #[test]
    fn test_format_config() {
        let config = Config::builder("/work").with_template("vue").build();

        let table = format_config(&config, &OutputFormat::Table).unwrap();
        assert!(table.contains("api.iconify.design"));
        assert!(table.contains("443"));
        assert!(table.contains("vue"));
        assert!(table.contains(&Path::new("/work").display().to_string()));

        let json = format_config(&config, &OutputFormat::Json).unwrap();
        assert!(json.contains("\"api_port\": 443"));
        assert!(json.contains("\"template\": \"vue\""));
    }
}

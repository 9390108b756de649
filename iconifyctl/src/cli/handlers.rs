//! Command execution handlers

use anyhow::{anyhow, bail, Context, Result};
use iconify_core::{
    apply_template, config_template, generate_icon_path, CollectionInfo, Config, IconId,
    NamingStrategy, PlacementStrategy, TemplateKind, CONFIG_FILE_NAME,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::client::IconifyClient;
use crate::format::{
    format_collections, format_config, format_search, format_success, write_error, write_fetch,
    write_info,
};

use super::commands::*;

/// Handle sets command
pub async fn handle_sets(
    client: &IconifyClient,
    args: &SetsArgs,
    format: &OutputFormat,
) -> Result<()> {
    if *format == OutputFormat::Table {
        write_fetch("Fetch /collections");
    }

    let collections = client.get_collections(&args.prefixes).await?;
    let formatted = format_collections(
        &collections,
        args.offset as usize,
        args.limit.map(|l| l as usize),
        &format.into(),
    )?;
    println!("{}", formatted);

    Ok(())
}

/// Handle search command
pub async fn handle_search(
    client: &IconifyClient,
    args: &SearchArgs,
    format: &OutputFormat,
) -> Result<()> {
    if *format == OutputFormat::Table {
        write_fetch("Fetch /search");
    }

    let result = client
        .search_icons(
            &args.pattern,
            &args.prefixes,
            Some(args.limit),
            Some(args.offset),
        )
        .await?;

    if *format == OutputFormat::Table {
        write_info(&format!(
            "Found {} icons for '{}'",
            result.total, args.pattern
        ));
        println!();
    }
    println!("{}", format_search(&result, &format.into())?);

    Ok(())
}

/// Validated settings of one download run
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadSettings {
    pub template: TemplateKind,
    pub placement: PlacementStrategy,
    pub naming: NamingStrategy,
    pub out_dir: PathBuf,
}

impl DownloadSettings {
    /// Check that the merged configuration names a known template, placement
    /// and naming strategy.
    pub fn from_config(config: &Config) -> Result<Self> {
        let template = config
            .template
            .as_deref()
            .ok_or_else(|| anyhow!("Missing required option '-t' or '--template'"))?
            .parse::<TemplateKind>()?;
        let placement = config
            .placement
            .as_deref()
            .ok_or_else(|| anyhow!("Missing required option '-p' or '--placement'"))?
            .parse::<PlacementStrategy>()?;
        let naming = config
            .naming
            .as_deref()
            .ok_or_else(|| anyhow!("Missing required option '-n' or '--naming'"))?
            .parse::<NamingStrategy>()?;

        Ok(Self {
            template,
            placement,
            naming,
            out_dir: config.out_dir.clone(),
        })
    }
}

/// Download, render and save a single icon.
async fn download_one(
    client: &IconifyClient,
    settings: &DownloadSettings,
    collections: &mut HashMap<String, CollectionInfo>,
    icon: &str,
) -> Result<PathBuf> {
    let id: IconId = icon.parse()?;

    if !collections.contains_key(&id.prefix) {
        write_fetch(&format!("Fetch /collections?prefixes={}", id.prefix));
        let mut response = client
            .get_collections(std::slice::from_ref(&id.prefix))
            .await?;
        let info = response
            .shift_remove(&id.prefix)
            .ok_or_else(|| anyhow!("Failed to resolve collection information for '{}'", id.prefix))?;
        collections.insert(id.prefix.clone(), info);
    }
    let info = &collections[&id.prefix];

    write_fetch(&format!("Fetch /{}/{}.svg", id.prefix, id.name));
    let svg = client.download_icon(&id.prefix, &id.name).await?;
    let content = apply_template(settings.template, &id.prefix, &id.name, info, &svg)?;
    let target = generate_icon_path(
        &settings.out_dir,
        settings.template,
        &id.prefix,
        &id.name,
        settings.naming,
        settings.placement,
    );

    if !tokio::fs::metadata(&target.folder)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
    {
        write_info(&format!("Creating folder: '{}'", target.folder.display()));
        tokio::fs::create_dir_all(&target.folder)
            .await
            .with_context(|| format!("Failed to create folder '{}'", target.folder.display()))?;
    }

    write_info(&format!("Saving icon: '{}'", target.filepath.display()));
    tokio::fs::write(&target.filepath, content)
        .await
        .with_context(|| format!("Failed to write '{}'", target.filepath.display()))?;

    Ok(target.filepath)
}

/// Handle download command
///
/// Icons are processed one after another. A failing icon is reported and
/// skipped; the command fails once all icons were attempted if any of them
/// could not be saved.
pub async fn handle_download(
    client: &IconifyClient,
    args: &DownloadArgs,
    config: &Config,
) -> Result<()> {
    let settings = DownloadSettings::from_config(config)?;
    debug!(?settings, "Download settings");

    let mut collections = HashMap::new();
    let mut downloaded = 0;

    for icon in &args.icons {
        write_info(&format!("Download '{}'", icon));
        match download_one(client, &settings, &mut collections, icon).await {
            Ok(path) => {
                debug!(path = %path.display(), "Icon saved");
                downloaded += 1;
            }
            Err(e) => write_error(&format!("{:#} -> SKIP", e)),
        }
    }

    let total = args.icons.len();
    if downloaded == total {
        write_info(&format!(
            "Successfully downloaded {} of {} icons",
            downloaded, total
        ));
        return Ok(());
    }

    bail!(
        "Downloaded {} of {} icons. See previous log for reasons",
        downloaded,
        total
    )
}

/// Write the starter `.iconify.ini` into `dir`.
pub async fn handle_config_init(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !force && tokio::fs::try_exists(&path).await.unwrap_or(false) {
        bail!(
            "'{}' already exists, use --force to overwrite it",
            path.display()
        );
    }

    let content = config_template()?;
    write_info(&format!("Write config to '{}'", path.display()));
    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    println!("{}", format_success("Config file created"));

    Ok(path)
}

/// Handle `config show`
pub fn handle_config_show(config: &Config, format: &OutputFormat) -> Result<()> {
    println!("{}", format_config(config, &format.into())?);
    Ok(())
}

/// Generate shell completion script
pub fn generate_completion(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

//! Iconify CLI
//!
//! Command-line interface for searching and downloading Iconify icons.

use anyhow::{Context, Result};
use clap::Parser;
use iconify_core::Config;
use iconifyctl::cli::{
    generate_completion, handle_config_init, handle_config_show, handle_download, handle_search,
    handle_sets, Cli, Commands, ConfigCommands, OutputFormat,
};
use iconifyctl::client::IconifyClient;
use iconifyctl::format::{write_error, write_info};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        write_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let working_dir = std::env::current_dir().context("Failed to read the working directory")?;

    // Commands that don't need a resolved configuration
    match cli.command {
        Commands::Completion { shell } => {
            generate_completion(shell);
            return Ok(());
        }
        Commands::Config {
            command: ConfigCommands::Init { force },
        } => {
            handle_config_init(&working_dir, force).await?;
            return Ok(());
        }
        _ => {}
    }

    // Build configuration using priority chain: defaults → file → CLI args
    let mut builder = Config::builder(&working_dir).with_config_file(!cli.no_config)?;
    if let Some(ref host) = cli.config_host {
        builder = builder.with_api_host(host);
    }
    if let Some(port) = cli.config_port {
        builder = builder.with_api_port(port);
    }
    if let Commands::Download(ref args) = cli.command {
        builder = args.apply_overrides(builder);
    }
    let config = builder.build();
    debug!(?config, "Resolved configuration");

    if let Some(ref source) = config.source {
        if cli.format == OutputFormat::Table {
            write_info(&format!("Config found in '{}'", source.display()));
        }
    }

    if let Commands::Config {
        command: ConfigCommands::Show,
    } = cli.command
    {
        return handle_config_show(&config, &cli.format);
    }

    let client = IconifyClient::new(&config)?;

    match cli.command {
        Commands::Sets(ref args) => handle_sets(&client, args, &cli.format).await,
        Commands::Search(ref args) => handle_search(&client, args, &cli.format).await,
        Commands::Download(ref args) => handle_download(&client, args, &config).await,
        Commands::Config { .. } | Commands::Completion { .. } => Ok(()),
    }
}

/// Log to stderr so console output on stdout stays parseable.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

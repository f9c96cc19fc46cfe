mod cmd;
mod output;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use mintgate_core::config::{Config, Overrides};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mintgate",
    about = "Farcaster frame server that gates an NFT mint behind a like and a recast",
    version,
    propagate_version = true
)]
struct Cli {
    /// YAML config file; environment variables and flags override it
    #[arg(long, global = true, env = "MINTGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Neynar API key
    #[arg(long, global = true, env = "NEYNAR_API_KEY", hide_env_values = true)]
    neynar_api_key: Option<String>,

    /// Hash of the cast that must be liked and recast
    #[arg(long, global = true, env = "CAST_HASH")]
    cast_hash: Option<String>,

    /// Public URL of this server, used in frame post_url targets
    #[arg(long, global = true, env = "BASE_URL")]
    base_url: Option<String>,

    /// Neynar API root
    #[arg(long, global = true, env = "NEYNAR_API_URL")]
    neynar_api_url: Option<String>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the frame handler
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let port = match &cli.command {
        Commands::Serve { port } => *port,
        _ => None,
    };
    let overrides = Overrides {
        neynar_api_key: cli.neynar_api_key,
        cast_hash: cli.cast_hash,
        base_url: cli.base_url,
        neynar_api_url: cli.neynar_api_url,
        port,
    };

    let result = Config::resolve(cli.config.as_deref(), overrides)
        .map_err(anyhow::Error::from)
        .and_then(|config| match cli.command {
            Commands::Serve { .. } => cmd::serve::run(config),
            Commands::Config { subcommand } => cmd::config::run(&config, subcommand, cli.json),
        });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::constants::{ENV_CONFIG, ENV_DEBUG, ENV_HOST, ENV_PORT, ENV_POSTGRES_URL};

#[derive(Parser)]
#[command(name = "trailhead")]
#[command(version, about = "Park discovery API server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server host address
    #[arg(long, short = 'H', global = true, env = ENV_HOST)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, short = 'p', global = true, env = ENV_PORT)]
    pub port: Option<u16>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// PostgreSQL connection URL
    #[arg(long, global = true, env = ENV_POSTGRES_URL)]
    pub postgres_url: Option<String>,

    /// Enable debug mode
    #[arg(long, global = true, env = ENV_DEBUG)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the server (default when no subcommand is given)
    Start,
}

/// CLI-provided configuration overrides
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub config: Option<PathBuf>,
    pub postgres_url: Option<String>,
    pub debug: bool,
}

/// Parse command line arguments into overrides plus an optional subcommand
pub fn parse() -> (CliConfig, Option<Commands>) {
    let cli = Cli::parse();
    (
        CliConfig {
            host: cli.host,
            port: cli.port,
            config: cli.config,
            postgres_url: cli.postgres_url,
            debug: cli.debug,
        },
        cli.command,
    )
}

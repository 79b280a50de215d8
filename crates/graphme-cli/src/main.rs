use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "graphme")]
#[command(version, about = "Load a Facebook access token and prepare the Graph API /me request", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read the access token from this file instead of ~/.private/FB_ACCESS_TOKEN
    #[arg(long, global = true, env = "GRAPHME_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    /// Config file to read instead of ~/.config/graphme/config.toml
    #[arg(long, global = true, env = "GRAPHME_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Graph API endpoint
    Endpoint(commands::endpoint::EndpointArgs),

    /// Load the access token and describe it without printing it
    Token(commands::token::TokenArgs),

    /// Prepare the /me request without sending it
    Request(commands::request::RequestArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "graphme=debug,graphme_core=debug"
    } else {
        "graphme=info,graphme_core=info"
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let config_file = cli
        .config
        .unwrap_or_else(graphme_core::Config::global_config_path);
    let locations = commands::Locations {
        token_file: cli.token_file.as_deref(),
        config_file: &config_file,
    };

    match cli.command {
        Commands::Endpoint(args) => commands::endpoint::execute(args),
        Commands::Token(args) => commands::token::execute(args, &locations),
        Commands::Request(args) => commands::request::execute(args, &locations),
    }
}

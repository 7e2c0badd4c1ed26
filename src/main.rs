//! Main entry point for the translation proxy

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use translate_proxy::cli::commands::{self, Commands};
use translate_proxy::ProxyConfig;

/// Translate Proxy - forwards translation requests with server-side credentials
#[derive(Parser, Debug)]
#[command(name = "translate-proxy", version, about, long_about = None)]
struct Args {
    /// Provider API key (optional, defaults to AZURE_TRANSLATOR_KEY env var)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Provider region (optional, defaults to AZURE_TRANSLATOR_REGION env var)
    #[arg(long, global = true)]
    region: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let debug = args.verbose || matches!(args.command, Some(Commands::Server { debug: true, .. }));
    let log_level = if debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}={}", env!("CARGO_CRATE_NAME"), log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // CLI args override the environment
    let mut config = ProxyConfig::from_env()?;
    if let Some(api_key) = args.api_key {
        config = config.with_api_key(api_key);
    }
    if let Some(region) = args.region {
        config = config.with_region(region);
    }

    match args.command {
        Some(Commands::Server { host, port, debug }) => {
            commands::handle_server(host, port, debug, config).await?;
        }
        Some(Commands::Translate {
            texts,
            source_lang,
            target_lang,
        }) => {
            commands::handle_translate(texts, source_lang, target_lang, config).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}

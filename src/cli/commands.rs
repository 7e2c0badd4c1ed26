//! CLI command definitions and handlers

use clap::Subcommand;
use tracing::info;

use crate::core::client::TranslatorClient;
use crate::core::config::ProxyConfig;
use crate::core::models::TranslatePayload;

/// Commands for the translation proxy
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP proxy server
    Server {
        /// Bind address (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,

        /// Enable debug mode
        #[arg(long)]
        debug: bool,
    },

    /// Translate texts once through the provider and print the results
    Translate {
        /// Texts to translate
        #[arg(required = true)]
        texts: Vec<String>,

        /// Source language (auto-detect if not specified)
        #[arg(long)]
        source_lang: Option<String>,

        /// Target language
        #[arg(short, long)]
        target_lang: String,
    },
}

/// Handle server command
pub async fn handle_server(
    host: String,
    port: u16,
    debug: bool,
    config: ProxyConfig,
) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    if debug {
        info!("Debug mode enabled");
    }

    info!("Starting HTTP server on {}:{}", host, port);
    info!("Upstream endpoint: {}", config.api_endpoint);
    println!("🚀 Server starting on http://{}:{}", host, port);
    println!("📮 Translate endpoint: POST http://{}:{}/translate", host, port);

    run_server(host, port, config).await?;

    Ok(())
}

/// Handle translate command
pub async fn handle_translate(
    texts: Vec<String>,
    source_lang: Option<String>,
    target_lang: String,
    config: ProxyConfig,
) -> anyhow::Result<()> {
    let credentials = config.credentials()?;

    // Same validation the HTTP handler applies
    let request = TranslatePayload {
        texts: Some(serde_json::Value::from(texts)),
        source_lang,
        target_lang: Some(target_lang),
    }
    .into_request()?;

    let client = TranslatorClient::new(&config)?;
    let translations = client.translate(&credentials, &request).await?;

    info!("Translated {} texts", translations.len());

    for translation in translations {
        println!("{}", translation.text);
    }

    Ok(())
}

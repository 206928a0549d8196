//! e-Chem assistant relay server entry point.
//!
//! Binary name: `echem`
//!
//! Parses CLI arguments, loads configuration once, wires the Gemini
//! provider and relay service, then serves the HTTP API (and the chat
//! widget) until Ctrl+C or SIGTERM.

mod cli;
mod http;
mod state;

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use echem_core::llm::box_provider::BoxCompletionProvider;
use echem_infra::config::{gemini_api_key_from_env, load_global_config, API_KEY_ENV};
use echem_infra::llm::gemini::GeminiProvider;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "debug,hyper=info",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "echem", &mut std::io::stdout());
        }

        Commands::Serve { host, port } => {
            let config = load_global_config(Path::new(&cli.config)).await;

            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let api_key = gemini_api_key_from_env().with_context(|| {
                format!("{API_KEY_ENV} is not set; the completion provider needs a credential")
            })?;
            let provider = GeminiProvider::new(
                api_key,
                Duration::from_secs(config.llm.request_timeout_secs),
            )
            .context("failed to construct the Gemini provider")?;

            let state = AppState::new(config, BoxCompletionProvider::new(provider));

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;

            println!(
                "  {} e-Chem assistant listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

//! personachat CLI and REST API entry point.
//!
//! Binary name: `pchat`
//!
//! Parses CLI arguments, initializes database and services, then dispatches
//! to the appropriate command handler or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,personachat=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Personas => {
            cli::personas::list_personas(cli.json)?;
        }

        Commands::Serve { port, host } => {
            let state = AppState::init().await?;

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} personachat API listening on {}",
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

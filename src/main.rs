//! Fagulhas - ambient sparks page
//!
//! Main entry point for the HTTP server.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fagulhas::{
    config::Config,
    error::WebError,
    web::WebServer,
    AppState,
};

/// Fagulhas - sparks over black with a crackling fire
#[derive(Parser, Debug)]
#[command(name = "fagulhas", version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// HTTP server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// HTTP server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    info!("Starting {} v{}", fagulhas::NAME, fagulhas::VERSION);

    let config = load_config(&args)?;

    info!("Particle library: {}", config.assets.library_url);
    info!("Ambient audio: {}", config.assets.audio_url);

    let state = AppState::new(config)?;

    let server_state = Arc::clone(&state);
    let server = tokio::spawn(async move { run_http_server(server_state).await });

    tokio::select! {
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
            state.shutdown();
        }
        result = server => {
            // Server exited on its own, most likely a bind failure
            match result {
                Ok(Err(e)) => error!("HTTP server error: {}", e),
                Err(e) => error!("HTTP server task failed: {}", e),
                Ok(Ok(())) => {}
            }
            anyhow::bail!("HTTP server stopped unexpectedly");
        }
    }

    // Give in-flight requests a moment to finish
    tokio::time::sleep(tokio::time::Duration::from_millis(500)).await;

    info!("Fagulhas stopped");
    Ok(())
}

/// Load the config file and apply CLI overrides
fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = if let Some(ref path) = args.config {
        Config::from_file(path)?
    } else {
        Config::load()?
    };

    if let Some(ref host) = args.host {
        config.http.host = host.clone();
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    config.validate()?;
    Ok(config)
}

async fn run_http_server(state: Arc<AppState>) -> anyhow::Result<()> {
    let web_server = WebServer::new(Arc::clone(&state));
    let addr = web_server.addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| WebError::Bind {
            addr: addr.clone(),
            message: e.to_string(),
        })?;

    info!("HTTP server listening on http://{}", addr);

    let mut shutdown_rx = state.subscribe_shutdown();

    axum::serve(listener, web_server.router())
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .map_err(|e| WebError::Serve(e.to_string()))?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

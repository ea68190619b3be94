//! Folktales server binary

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{AppConfig, LoggingConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tales_service::TalesServiceModule;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "folktales", version)]
#[command(about = "Browse folktales from a hosted table with an offline snapshot fallback")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the pages and the JSON API (default)
    Serve {
        /// Listen address, overrides `server.bind`
        #[arg(long)]
        bind: Option<SocketAddr>,

        /// Start pinned offline, serving the snapshot only
        #[arg(long)]
        offline: bool,
    },

    /// Write the first hosted rows to the offline snapshot file
    ExportSnapshot {
        /// Number of tales, overrides `tales.export_count`
        #[arg(long)]
        count: Option<usize>,

        /// Output path, overrides `tales.snapshot_path`
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = AppConfig::load(cli.config.as_deref())?;
    init_tracing(&cfg.logging);

    let command = cli.command.unwrap_or(Command::Serve {
        bind: None,
        offline: false,
    });

    match command {
        Command::Serve { bind, offline } => {
            if let Some(bind) = bind {
                cfg.server.bind = bind;
            }
            if offline {
                cfg.tales.start_offline = true;
            }
            serve(cfg).await
        }
        Command::ExportSnapshot { count, out } => {
            let module = TalesServiceModule::default();
            module.init(cfg.tales)?;
            match module.export_snapshot(count, out.as_deref()).await {
                Ok((path, written)) => {
                    println!("wrote {written} tales to {}", path.display());
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(error = %format!("{e:#}"), "Snapshot export failed");
                    Err(e)
                }
            }
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(cfg: AppConfig) -> Result<()> {
    let module = Arc::new(TalesServiceModule::default());
    module.init(cfg.tales)?;

    let app = module
        .register_rest(axum::Router::new())?
        .layer(TraceLayer::new_for_http());

    let cancel = CancellationToken::new();
    let probe = tokio::spawn(module.clone().serve(cancel.clone()));

    let listener = TcpListener::bind(cfg.server.bind)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.bind))?;
    tracing::info!(addr = %cfg.server.bind, "folktales server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel.clone()))
        .await
        .context("server error")?;

    cancel.cancel();
    probe.await.context("probe task panicked")??;
    tracing::info!("folktales server stopped");
    Ok(())
}

async fn shutdown_signal(cancel: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
        _ = cancel.cancelled() => {}
    }
    tracing::info!("shutdown requested");
    cancel.cancel();
}

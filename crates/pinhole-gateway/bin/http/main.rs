mod cli;

use crate::cli::{LogFormatArg, CLI};
use clap::Parser;
use pinhole_gateway::{App, AppState, ServerSettings};
use pinhole_generator::seq::SeqGenerator;
use pinhole_shortener::ShortenerService;
use pinhole_storage::InMemoryRepository;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    init_tracing(config.log_format);

    let settings = ServerSettings::builder()
        .port(config.port)
        .base_url(config.base_url)
        .build();

    let shortener = ShortenerService::new(InMemoryRepository::new(), SeqGenerator::new());
    let state = AppState::new(Arc::new(shortener), settings.base_url.clone());
    let app = App::router_with_timeout(state, settings.request_timeout);

    let listener = tokio::net::TcpListener::bind(settings.listen_addr()).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        base_url = %settings.base_url,
        "starting gateway server"
    );
    info!("routes: POST /shorten, GET /{{short_code}}, GET /health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormatArg::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormatArg::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}

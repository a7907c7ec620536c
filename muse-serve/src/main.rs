//! muse-serve entrypoint

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use libmusecast::logging::{self, LogFormat, LoggingConfig};
use libmusecast::{ContentPublisher, Credentials};
use muse_serve::{router, AppState};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "muse-serve")]
#[command(version)]
#[command(about = "HTTP trigger for generating and publishing posts to X")]
#[command(long_about = "\
muse-serve - HTTP trigger for the publish pipeline

DESCRIPTION:
    Exposes the publish cycle over HTTP so an external scheduler (a hosted
    cron service, systemd timer, CI job) can trigger it:

        POST /publish  - run one publish cycle, respond with the report
        GET  /health   - liveness probe

    When CRON_SECRET is set, POST /publish requires the header
    'Authorization: Bearer <secret>' and answers 401 otherwise. The
    response status is 200 for a published post or a no-content cycle and
    500 for a failed cycle; the JSON body carries the same report that
    muse-post prints.

USAGE:
    # Listen on the default address
    muse-serve

    # Listen on all interfaces, port 3000
    muse-serve --bind 0.0.0.0:3000

CONFIGURATION:
    Credentials come from the environment (a .env file is honored):
        GROQ_API_KEY            Groq API key
        X_API_KEY               X consumer key
        X_API_SECRET            X consumer secret
        X_ACCESS_TOKEN          X access token
        X_ACCESS_TOKEN_SECRET   X access token secret
        CRON_SECRET             Optional bearer secret for POST /publish

    MUSECAST_LOG_FORMAT and MUSECAST_LOG_LEVEL control logging.

EXIT CODES:
    0 - Clean shutdown
    1 - Startup or runtime error
")]
struct Cli {
    /// Address to listen on
    #[arg(long, value_name = "ADDR", default_value = "127.0.0.1:8080")]
    bind: String,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let credentials = Credentials::from_env().context("Failed to load credentials")?;
    if credentials.cron_secret.is_some() {
        info!("Publish endpoint requires a bearer secret");
    } else {
        info!("CRON_SECRET not set; publish endpoint is unauthenticated");
    }

    let publisher = Arc::new(ContentPublisher::from_credentials(&credentials));
    let state = AppState {
        publisher,
        secret: credentials.cron_secret,
    };

    let listener = tokio::net::TcpListener::bind(&cli.bind)
        .await
        .with_context(|| format!("Failed to bind {}", cli.bind))?;
    info!("muse-serve listening on http://{}", cli.bind);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("muse-serve stopped");
    Ok(())
}

fn init_logging(verbose: bool) {
    if verbose {
        LoggingConfig::new(LogFormat::Text, "debug".to_string(), true).init();
    } else {
        logging::init_default();
    }
}

async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => info!("Received SIGINT, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

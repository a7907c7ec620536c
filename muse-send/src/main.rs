//! muse-send - Timer daemon for automated publishing
//!
//! Runs the generate-and-publish cycle on a fixed interval, with an
//! advisory per-day execution counter.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use clap::Parser;
use libmusecast::counter::{ExecutionCounter, DEFAULT_DAILY_CAP};
use libmusecast::logging::{self, LogFormat, LoggingConfig};
use libmusecast::{ContentPublisher, ExecutionOutcome, MusecastError, Result};
use tokio::time::{sleep, Duration};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "muse-send")]
#[command(version)]
#[command(about = "Timer daemon that generates and publishes posts to X")]
#[command(long_about = "\
muse-send - Timer daemon for automated publishing

DESCRIPTION:
    muse-send runs the publish cycle on a fixed interval: ask the Groq chat
    completion API for one short post, clean it up, publish it to X. A
    failed cycle is logged and the daemon keeps going; the next cycle runs
    on schedule.

    Executions are counted per UTC day for observability. The counter is
    advisory: reaching the cap logs a warning and starts the count over, but
    no execution is ever skipped.

USAGE:
    # Run in foreground, publishing every two hours
    muse-send

    # Publish every 15 minutes
    muse-send --interval 900

    # Enable verbose logging
    muse-send --verbose

SIGNALS:
    SIGTERM, SIGINT - Graceful shutdown (finishes the current cycle)

CONFIGURATION:
    Credentials come from the environment (a .env file is honored):
        GROQ_API_KEY            Groq API key
        X_API_KEY               X consumer key
        X_API_SECRET            X consumer secret
        X_ACCESS_TOKEN          X access token
        X_ACCESS_TOKEN_SECRET   X access token secret

    MUSECAST_LOG_FORMAT and MUSECAST_LOG_LEVEL control logging.

EXIT CODES:
    0 - Clean shutdown
    1 - Startup or runtime error
")]
struct Cli {
    /// Seconds between publish cycles
    #[arg(long, value_name = "SECONDS", default_value_t = 7200)]
    #[arg(help = "How long to wait between publish cycles (default: 7200)")]
    interval: u64,

    /// Advisory cap on executions per UTC day
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_DAILY_CAP)]
    #[arg(help = "Executions logged per day before the counter restarts (default: 10)")]
    daily_cap: u32,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    #[arg(help = "Enable verbose logging (useful for debugging)")]
    verbose: bool,

    /// Run one publish cycle and exit (for testing)
    #[arg(long, hide = true)]
    #[arg(help = "Run one publish cycle immediately and exit (for testing)")]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Credentials are resolved up front so a misconfigured daemon fails at
    // startup instead of on its first scheduled cycle.
    let publisher = ContentPublisher::from_env()?;

    info!("muse-send daemon starting");

    let shutdown = Arc::new(AtomicBool::new(false));
    setup_signal_handlers(shutdown.clone())?;

    info!("Publish interval: {}s", cli.interval);
    info!("Advisory daily cap: {} executions", cli.daily_cap);

    if cli.once {
        let outcome = publisher.run().await;
        log_outcome(&outcome);
        info!("muse-send: ran one publish cycle, exiting");
    } else {
        log_execution_preview(cli.interval);
        run_daemon_loop(&publisher, cli.interval, cli.daily_cap, shutdown).await;
    }

    info!("muse-send daemon stopped");
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: bool) {
    if verbose {
        LoggingConfig::new(LogFormat::Text, "debug".to_string(), true).init();
    } else {
        logging::init_default();
    }
}

/// Set up signal handlers for graceful shutdown
fn setup_signal_handlers(shutdown: Arc<AtomicBool>) -> Result<()> {
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])
        .map_err(|e| MusecastError::InvalidInput(format!("Signal setup failed: {}", e)))?;

    let shutdown_clone = shutdown.clone();
    std::thread::spawn(move || {
        for sig in signals.forever() {
            match sig {
                SIGTERM | SIGINT => {
                    info!("Received shutdown signal, stopping gracefully");
                    shutdown_clone.store(true, Ordering::Relaxed);
                    break;
                }
                _ => {}
            }
        }
    });

    Ok(())
}

/// Log when the next ten cycles will fire, so operators can sanity-check
/// the configured interval at a glance.
fn log_execution_preview(interval: u64) {
    let now = Utc::now();
    info!("Next 10 execution times:");
    for i in 1..=10i64 {
        let at = now + chrono::Duration::seconds(interval as i64 * i);
        info!("  {}. {}", i, at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
}

/// Main daemon loop
async fn run_daemon_loop(
    publisher: &ContentPublisher,
    interval: u64,
    daily_cap: u32,
    shutdown: Arc<AtomicBool>,
) {
    let mut counter = ExecutionCounter::new(daily_cap);

    loop {
        // Sleep until the next cycle (check shutdown every second)
        for _ in 0..interval {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }
            sleep(Duration::from_secs(1)).await;
        }

        if shutdown.load(Ordering::Relaxed) {
            info!("Shutdown requested, stopping daemon loop");
            break;
        }

        counter.record(Utc::now());
        let outcome = publisher.run().await;
        log_outcome(&outcome);
    }
}

fn log_outcome(outcome: &ExecutionOutcome) {
    match outcome {
        ExecutionOutcome::Success { post_id, .. } => {
            info!("Post published successfully (id {})", post_id);
        }
        ExecutionOutcome::NoContent { .. } => {
            info!("No content generated; nothing published");
        }
        ExecutionOutcome::Failure { reason, .. } => {
            error!("Publish cycle failed: {}", reason);
        }
    }
}

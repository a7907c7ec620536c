//! muse-post - Generate one post and publish it to X

use clap::Parser;
use libmusecast::logging::{self, LogFormat, LoggingConfig};
use libmusecast::{ContentPublisher, MusecastError, Result};

#[derive(Parser, Debug)]
#[command(
    name = "muse-post",
    about = "Generate a post with an LLM and publish it to X",
    long_about = r#"muse-post - Generate one post and publish it to X

DESCRIPTION:
    Runs a single publish cycle: asks the Groq chat completion API for one
    short post, cleans it up, and publishes it to X. A structured report of
    the outcome is printed to stdout; logs go to stderr.

USAGE EXAMPLES:
    # Publish one generated post
    muse-post

    # Same, reported as JSON (the shape the HTTP trigger returns)
    muse-post --format json

CONFIGURATION:
    Credentials come from the environment (a .env file is honored):
        GROQ_API_KEY            Groq API key
        X_API_KEY               X consumer key
        X_API_SECRET            X consumer secret
        X_ACCESS_TOKEN          X access token
        X_ACCESS_TOKEN_SECRET   X access token secret

    MUSECAST_LOG_FORMAT and MUSECAST_LOG_LEVEL control logging.

EXIT CODES:
    0 - Post published, or nothing to publish
    1 - Publish cycle failed
    3 - Invalid arguments"#
)]
struct Cli {
    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    if verbose {
        LoggingConfig::new(LogFormat::Text, "debug".to_string(), true).init();
    } else {
        logging::init_default();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    // Reject bad arguments before any provider is contacted.
    if !matches!(cli.format.as_str(), "text" | "json") {
        return Err(MusecastError::InvalidInput(format!(
            "Unknown output format: '{}'. Valid options: text, json",
            cli.format
        )));
    }

    let outcome = ContentPublisher::run_from_env().await;
    let report = outcome.report();

    match cli.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => {
            println!("{}", report.message);
            if let Some(content) = &report.content {
                println!("{}", content);
            }
            if let Some(post_id) = &report.post_id {
                println!("Post ID: {}", post_id);
            }
            if let Some(error) = &report.error {
                eprintln!("{}", error);
            }
        }
    }

    Ok(if report.success { 0 } else { 1 })
}

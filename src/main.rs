//! CLI for PopHub
//!
//! Subcommands:
//! - `server`: run the HTTP hub
//! - `publish`: send one message to a running hub
//! - `subscribe`: print every message a running hub broadcasts

use clap::{Parser, Subcommand};
use futures::StreamExt;
use pophub::config::load_config;
use pophub::hub::Hub;
use pophub::transport::start_http_server;
use pophub::utils::error::Result;
use tracing::{error, info};

const DEFAULT_URL: &str = "http://127.0.0.1:8080";

#[derive(Parser)]
#[command(name = "pophub")]
struct Cli {
    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server
    Server,
    /// Publish a message to every connected subscriber
    Publish {
        /// Base URL of the hub
        #[arg(long, default_value = DEFAULT_URL)]
        url: String,
        /// Message text; empty by default
        #[arg(long, default_value = "")]
        msg: String,
    },
    /// Stream messages from the hub to stdout until interrupted
    Subscribe {
        /// Base URL of the hub
        #[arg(long, default_value = DEFAULT_URL)]
        url: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    pophub::utils::logging::init(&cli.log_level);

    let result = match cli.command {
        Command::Server => run_server().await,
        Command::Publish { url, msg } => pophub::client::publish(&url, &msg).await,
        Command::Subscribe { url } => run_subscriber(&url).await,
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    if let Ok(path) = dotenvy::dotenv() {
        info!(path = %path.display(), "Loaded environment file");
    }

    let config = load_config()?;
    let hub = Hub::new(config.hub.clone());

    tokio::select! {
        res = start_http_server(&config.server, hub) => {
            res?;
            error!("HTTP server exited unexpectedly.");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received. Exiting gracefully.");
        }
    }

    Ok(())
}

async fn run_subscriber(url: &str) -> Result<()> {
    let mut lines = pophub::client::subscribe(url).await?;

    tokio::select! {
        _ = async {
            while let Some(line) = lines.next().await {
                match line {
                    Ok(line) => println!("{line}"),
                    Err(e) => {
                        error!("Stream failed: {}", e);
                        break;
                    }
                }
            }
        } => {
            info!("Hub closed the stream.");
        }
        _ = tokio::signal::ctrl_c() => {}
    }

    Ok(())
}

//! Sound-server monitor and control daemon
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                              CCTL                                 │
//! │                                                                   │
//! │   ┌──────────┐  snapshot   ┌──────────┐   fan-out   ┌──────────┐  │
//! │   │ MONITOR  │ ──────────▶ │  PUBSUB  │ ──────────▶ │ WATCHDOG │  │
//! │   │ (15s)    │             │          │             ├──────────┤  │
//! │   └──────────┘             │          │ ──────────▶ │ NOTIFIER │  │
//! │                            │          │             ├──────────┤  │
//! │   ┌──────────┐  snapshot   │          │ ──────────▶ │ WS …     │  │
//! │   │ WEB API  │ ──────────▶ │          │             └──────────┘  │
//! │   └──────────┘             └──────────┘                           │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any long-running task ending is fatal: the process exits with status 1.

use anyhow::{Context, Result};
use futures_util::future::select_all;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use audio_cctl::{
    audio::AudioController,
    command::{CommandRunner, ProcessRunner},
    config::{AppConfig, LoggingConfig},
    pubsub::PubSub,
    services::{Monitor, Notifier, Watchdog},
    ui::WebServer,
};

/// Command-line options
#[derive(Debug, Default)]
struct CliArgs {
    port: Option<u16>,
    config_path: Option<PathBuf>,
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = parse_args();

    let mut config = load_config(args.config_path.as_deref())?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.log_json {
        config.logging.json = true;
    }

    if config.server.port == 0 {
        print_usage();
        std::process::exit(1);
    }

    init_logging(&config.logging);

    tracing::info!("cctl {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Control tool: {}", config.audio.control_tool);

    let runner: Arc<dyn CommandRunner> = Arc::new(ProcessRunner::with_timeout(config.audio.fetch_timeout()));
    let audio = AudioController::new(runner.clone(), &config.audio);

    let bus = Arc::new(PubSub::new(&config.bus));
    let mut tasks: Vec<(&str, JoinHandle<()>)> = Vec::new();

    if let Some(handle) = bus.start() {
        tasks.push(("pubsub", handle));
    }

    // Consumers subscribe before the monitor publishes its first snapshot
    if config.watchdog.enabled {
        let watchdog = Arc::new(Watchdog::new(audio.clone(), bus.clone()));
        if let Some(handle) = watchdog.start() {
            tasks.push(("watchdog", handle));
        }
    }

    if config.notifier.enabled {
        let notifier = Arc::new(Notifier::new(runner.clone(), bus.clone(), &config.notifier));
        if let Some(handle) = notifier.start() {
            tasks.push(("notifier", handle));
        }
    }

    let monitor = Arc::new(Monitor::new(audio.clone(), bus.clone(), &config.audio));
    if let Some(handle) = monitor.start() {
        tasks.push(("monitor", handle));
    }

    let web_server = WebServer::new(config.server.clone(), audio, bus);
    let mut web_handle = web_server.start_background();

    let (names, handles): (Vec<_>, Vec<_>) = tasks.into_iter().unzip();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down...");
            Ok(())
        }
        (result, index, _) = select_all(handles) => {
            match result {
                Ok(()) => tracing::error!("{} has stopped", names[index]),
                Err(e) => tracing::error!("{} has failed: {}", names[index], e),
            }
            std::process::exit(1);
        }
        result = &mut web_handle => {
            match result {
                Ok(Ok(())) => tracing::error!("Web server has stopped"),
                Ok(Err(e)) => tracing::error!("Web server error: {:#}", e),
                Err(e) => tracing::error!("Web server task failed: {}", e),
            }
            std::process::exit(1);
        }
    }
}

/// Explicit `--config` must load; the default location is optional
fn load_config(path: Option<&std::path::Path>) -> Result<AppConfig> {
    if let Some(path) = path {
        return AppConfig::load(path).with_context(|| format!("Could not load config from {}", path.display()));
    }

    match AppConfig::default_path() {
        Some(path) if path.exists() => {
            AppConfig::load(&path).with_context(|| format!("Could not load config from {}", path.display()))
        }
        _ => Ok(AppConfig::default()),
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Parse command-line arguments
fn parse_args() -> CliArgs {
    let mut cli = CliArgs::default();

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    cli.port = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    cli.config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--log-json" => {
                cli.log_json = true;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
            }
        }
        i += 1;
    }

    cli
}

fn print_usage() {
    println!("cctl - sound-server monitor and control daemon");
    println!();
    println!("Usage: cctl -p <PORT> [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -p, --port <PORT>     The web server port (required unless set in the config file)");
    println!("  -c, --config <FILE>   Configuration file (default: platform config dir)");
    println!("      --log-json        Emit logs as JSON lines");
    println!("  -h, --help            Show this help");
}

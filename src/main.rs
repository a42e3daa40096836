//! Camera configuration API mock.
//!
//! Serves `GET /cgi-bin/configManager.cgi` behind a digest challenge so client
//! applications can exercise authentication and the motion-detection toggle
//! without hardware.
//!
//! ```text
//!   client ──▶ listener ──▶ trace / request id / access log ──▶ digest gate
//!                                                                   │
//!                                   ┌───────────────────────────────┤
//!                                   ▼                               ▼
//!                          configManager.cgi                   404 fallback
//!                        getConfig │ setConfig
//!                                  ▼
//!                            MotionState (mutex)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use camera_mock::config::{load_config, ServerConfig};
use camera_mock::lifecycle::{wait_for_termination, Banner};
use camera_mock::observability::init_logging;
use camera_mock::CameraServer;

#[derive(Parser)]
#[command(name = "camera-mock")]
#[command(about = "HTTP mock of a network camera's configuration API", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`, e.g. 127.0.0.1:8081.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.logging.filter)?;
    tracing::info!("camera-mock v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = camera_mock::net::bind(&config.listener).await?;
    let local_addr = listener.local_addr()?;

    let server = CameraServer::new(config);
    Banner::new(local_addr, &server.config().banner, server.motion().get()).print();

    let handle = server.start(listener)?;

    let signal = wait_for_termination().await?;
    tracing::info!(signal, "Stopping");

    handle.stop().await?;
    println!("\nServer stopped");
    Ok(())
}

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde_json::json;

use camera_mock::client::CameraClient;

#[derive(Parser)]
#[command(name = "camera-cli")]
#[command(about = "Motion-detection control for configManager.cgi cameras", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8081")]
    url: String,

    #[arg(short = 'U', long, default_value = "ipc")]
    username: String,

    #[arg(short, long, default_value = "pass")]
    password: String,

    #[arg(short, long, default_value_t = 2)]
    timeout_secs: u64,

    /// Print `{"enabled": bool}` instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show whether motion detection is enabled
    Status,
    /// Turn motion detection on
    Enable,
    /// Turn motion detection off
    Disable,
    /// Flip the current setting
    Toggle,
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
    let client = CameraClient::new(
        cli.url,
        cli.username,
        cli.password,
        Duration::from_secs(cli.timeout_secs),
    )?;

    let enabled = match cli.command {
        Commands::Status => client.motion_status().await?,
        Commands::Enable => {
            client.set_motion(true).await?;
            true
        }
        Commands::Disable => {
            client.set_motion(false).await?;
            false
        }
        Commands::Toggle => {
            let next = !client.motion_status().await?;
            client.set_motion(next).await?;
            next
        }
    };

    if cli.json {
        println!("{}", json!({ "enabled": enabled }));
    } else {
        println!("Motion detection: {}", if enabled { "ON" } else { "OFF" });
    }
    Ok(())
}

//! Real-time prize-draw server.
//!
//! Spawns a single room actor owning the shared game state, then serves
//! the WebSocket/HTTP API and the static presentation layer.

use std::path::PathBuf;

use anyhow::Error;
use ctrlc::set_handler;
use log::info;
use pico_args::Arguments;
use prize_draw::RoomActor;

use pd_server::{api, config::ServerConfig};

const HELP: &str = "\
Run a real-time prize-draw server

USAGE:
  pd_server [OPTIONS]

OPTIONS:
  --bind        IP:PORT  Server socket bind address    [default: env SERVER_BIND or 127.0.0.1:3000]
  --static-dir  PATH     Presentation layer directory  [default: env STATIC_DIR or dist]

FLAGS:
  -h, --help             Print help information

ENVIRONMENT:
  SERVER_BIND            Server bind address (e.g., 0.0.0.0:3000)
  STATIC_DIR             Directory of static assets served at /
  MAX_PARTICIPANTS       Participant capacity            [default: 15]
  TOTAL_PRIZES           Prizes per game                 [default: 15]
  DRAW_DELAY_MS          Delay before a winner is drawn  [default: 2000]
  (See .env file for all configuration options)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let bind_override = pargs.opt_value_from_str("--bind")?;
    let static_dir_override: Option<PathBuf> = pargs.opt_value_from_str("--static-dir")?;

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    env_logger::builder().format_target(false).init();

    let config = ServerConfig::from_env(bind_override, static_dir_override);
    config.validate()?;

    info!("Starting prize-draw server at {}", config.bind);
    info!(
        "Room: {} prize(s), capacity {}, draw delay {}ms",
        config.room.total_prizes, config.room.max_participants, config.room.draw_delay_ms
    );

    let (actor, room) = RoomActor::new(config.room.clone());
    tokio::spawn(actor.run());

    let state = api::AppState::new(room);
    let app = api::create_router(state, &config.static_dir);

    info!(
        "Serving presentation layer from {}",
        config.static_dir.display()
    );

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
}

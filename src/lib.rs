pub mod app;
pub mod commands;
pub mod domain;
pub mod infrastructure;
pub mod shared;

use app::server::Server;
use infrastructure::filesystem::config::load_server_config;

/// Loads configuration and serves `POST /generate` until the process exits.
pub async fn run() -> Result<(), String> {
    let config = load_server_config()?;
    Server::from_config(&config)?.run().await
}

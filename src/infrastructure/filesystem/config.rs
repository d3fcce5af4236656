use std::{
    fs,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use log::info;

pub const CONFIG_PATH_ENV: &str = "TOTEM_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "totem_config.json";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub skin_base_url: String,
    pub fetch_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    pub max_skin_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 5000,
            skin_base_url: "https://mc-heads.net/skin".to_string(),
            fetch_timeout_secs: 10,
            connect_timeout_secs: 5,
            user_agent: format!("TotemForge/{}", env!("CARGO_PKG_VERSION")),
            max_skin_bytes: 5 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.bind_address, self.port)
            .parse::<SocketAddr>()
            .map_err(|err| {
                format!(
                    "Invalid bind address {}:{}: {err}",
                    self.bind_address, self.port
                )
            })
    }

    /// Applies `TOTEM_BIND_ADDRESS`, `TOTEM_PORT` and `TOTEM_SKIN_BASE_URL`
    /// on top of the loaded values.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), String> {
        if let Some(address) = lookup("TOTEM_BIND_ADDRESS") {
            self.bind_address = address;
        }
        if let Some(port) = lookup("TOTEM_PORT") {
            self.port = port
                .trim()
                .parse::<u16>()
                .map_err(|err| format!("Invalid TOTEM_PORT {port}: {err}"))?;
        }
        if let Some(url) = lookup("TOTEM_SKIN_BASE_URL") {
            self.skin_base_url = url;
        }
        Ok(())
    }
}

pub fn server_config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
}

pub fn load_server_config_from(path: &Path) -> Result<ServerConfig, String> {
    if !path.exists() {
        return Ok(ServerConfig::default());
    }

    let raw = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;

    serde_json::from_str::<ServerConfig>(&raw)
        .map_err(|err| format!("Failed to parse {}: {err}", path.display()))
}

pub fn load_server_config() -> Result<ServerConfig, String> {
    let path = server_config_path();
    let mut config = load_server_config_from(&path)?;
    config.apply_overrides(|key| std::env::var(key).ok())?;
    info!(
        "Configuration loaded from {} (skin source {})",
        path.display(),
        config.skin_base_url
    );
    Ok(config)
}

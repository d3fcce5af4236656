use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::{
    infrastructure::filesystem::config::ServerConfig,
    shared::{error::TotemError, result::AppResult},
};

/// Resolves a player name to the raw bytes of their skin texture.
#[async_trait]
pub trait SkinSource: Send + Sync {
    async fn fetch(&self, username: &str) -> AppResult<Vec<u8>>;
}

pub fn build_http_client(config: &ServerConfig) -> AppResult<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|err| TotemError::Fetch(format!("failed to build HTTP client: {err}")))
}

/// Skin lookup against an mc-heads style service: `GET <base>/<username>`.
#[derive(Debug, Clone)]
pub struct McHeadsSkinSource {
    client: Client,
    base_url: String,
    max_bytes: usize,
}

impl McHeadsSkinSource {
    pub fn new(client: Client, base_url: impl Into<String>, max_bytes: usize) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            max_bytes,
        }
    }

    pub fn from_config(config: &ServerConfig) -> AppResult<Self> {
        Ok(Self::new(
            build_http_client(config)?,
            config.skin_base_url.clone(),
            config.max_skin_bytes,
        ))
    }

    pub fn skin_url(&self, username: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(username)
        )
    }

    fn check_size(&self, size: usize) -> AppResult<()> {
        if size > self.max_bytes {
            return Err(TotemError::Decode(format!(
                "skin payload of {size} bytes exceeds the {} byte limit",
                self.max_bytes
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SkinSource for McHeadsSkinSource {
    async fn fetch(&self, username: &str) -> AppResult<Vec<u8>> {
        let url = self.skin_url(username);
        debug!("Fetching skin for {username} from {url}");

        let response = self.client.get(&url).send().await.map_err(|err| {
            TotemError::Fetch(format!("request for {username} failed: {err}"))
        })?;

        let status = response.status();
        debug!("Skin lookup for {username} answered {status}");
        if !status.is_success() {
            return Err(TotemError::Fetch(format!(
                "HTTP {status} while fetching skin for {username}"
            )));
        }

        if let Some(length) = response.content_length() {
            self.check_size(usize::try_from(length).unwrap_or(usize::MAX))?;
        }

        let bytes = response.bytes().await.map_err(|err| {
            TotemError::Fetch(format!("failed reading skin body for {username}: {err}"))
        })?;

        if bytes.is_empty() {
            return Err(TotemError::Decode(format!(
                "empty skin payload for {username}"
            )));
        }
        self.check_size(bytes.len())?;

        Ok(bytes.to_vec())
    }
}

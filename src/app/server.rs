use std::{net::SocketAddr, sync::Arc};

use axum::{routing::post, Router};
use log::{error, info};

use crate::{
    app::totem_service::TotemService,
    commands::generate::generate_totem,
    infrastructure::{filesystem::config::ServerConfig, http::McHeadsSkinSource},
};

pub fn build_router(service: TotemService) -> Router {
    Router::new()
        .route("/generate", post(generate_totem))
        .with_state(service)
}

/// The HTTP front of the service, assembled once at startup.
pub struct Server {
    address: SocketAddr,
    router: Router,
}

impl Server {
    pub fn new(address: SocketAddr, service: TotemService) -> Self {
        Self {
            address,
            router: build_router(service),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, String> {
        let address = config.socket_addr()?;
        let source = McHeadsSkinSource::from_config(config).map_err(|err| err.to_string())?;
        Ok(Self::new(address, TotemService::new(Arc::new(source))))
    }

    pub async fn run(self) -> Result<(), String> {
        let listener = tokio::net::TcpListener::bind(self.address)
            .await
            .map_err(|err| {
                error!("Failed to bind {}: {err}", self.address);
                format!("Failed to bind {}: {err}", self.address)
            })?;

        info!("Totem server listening on http://{}/generate", self.address);

        axum::serve(listener, self.router.into_make_service())
            .await
            .map_err(|err| {
                error!("Server error: {err}");
                format!("Server error: {err}")
            })
    }
}

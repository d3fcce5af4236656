use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use log::{info, warn};

use crate::{app::totem_service::TotemService, commands::validator::extract_username};

/// Handler for `POST /generate`.
pub async fn generate_totem(State(service): State<TotemService>, body: Bytes) -> Response {
    let username = match extract_username(&body) {
        Ok(username) => username,
        Err(err) => {
            warn!("Rejected totem request: {err}");
            return err.into_response();
        }
    };

    info!("Generating totem for {username}");
    match service.generate(&username).await {
        Ok(png) => (
            [
                (header::CONTENT_TYPE, "image/png".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"totem_{username}.png\""),
                ),
            ],
            png,
        )
            .into_response(),
        Err(err) => {
            warn!("Totem for {username} failed ({}): {err}", err.kind());
            err.into_response()
        }
    }
}

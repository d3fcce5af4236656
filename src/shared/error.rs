use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Every failure a totem request can run into.
///
/// Pipeline stages return these through `AppResult`; the HTTP status is only
/// decided when the error crosses the handler boundary.
#[derive(Debug, thiserror::Error)]
pub enum TotemError {
    #[error("Missing 'username' field")]
    MissingUsername,

    #[error("Invalid 'username' field: {0}")]
    InvalidUsername(String),

    #[error("Failed to fetch skin: {0}")]
    Fetch(String),

    #[error("Failed to decode skin: {0}")]
    Decode(String),

    #[error("Skin texture is {width}x{height}, expected at least 64x64")]
    Geometry { width: u32, height: u32 },

    #[error("Failed to encode totem: {0}")]
    Encode(String),
}

impl TotemError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingUsername | Self::InvalidUsername(_) => StatusCode::BAD_REQUEST,
            Self::Fetch(_) | Self::Decode(_) | Self::Geometry { .. } | Self::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Short label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingUsername | Self::InvalidUsername(_) => "input",
            Self::Fetch(_) => "fetch",
            Self::Decode(_) => "decode",
            Self::Geometry { .. } => "geometry",
            Self::Encode(_) => "encode",
        }
    }
}

impl IntoResponse for TotemError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::TotemError;
    use axum::http::StatusCode;

    #[test]
    fn input_errors_are_client_errors() {
        assert_eq!(
            TotemError::MissingUsername.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TotemError::InvalidUsername("blank".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn pipeline_errors_are_server_errors() {
        let errors = [
            TotemError::Fetch("HTTP 404".into()),
            TotemError::Decode("not an image".into()),
            TotemError::Geometry {
                width: 64,
                height: 32,
            },
            TotemError::Encode("boom".into()),
        ];
        for error in errors {
            assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert!(!error.to_string().is_empty());
        }
    }

    #[test]
    fn missing_username_message_is_stable() {
        assert_eq!(
            TotemError::MissingUsername.to_string(),
            "Missing 'username' field"
        );
    }
}

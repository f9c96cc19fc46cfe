use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("missing messageBytes")]
    MissingMessageBytes,

    #[error("invalid type: {0}")]
    InvalidStage(String),

    #[error("missing configuration value: {0}")]
    MissingConfig(&'static str),

    #[error("{service} returned {status}: {reason}")]
    Upstream {
        service: &'static str,
        status: u16,
        reason: String,
    },

    #[error("request to {service} failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl GateError {
    /// True for failures caused by the client's request rather than by this
    /// service or its upstreams.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingMessageBytes | Self::InvalidStage(_))
    }
}

pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_are_client_errors() {
        assert!(GateError::MissingMessageBytes.is_client_error());
        assert!(GateError::InvalidStage("burn".into()).is_client_error());
    }

    #[test]
    fn upstream_and_config_errors_are_not_client_errors() {
        let upstream = GateError::Upstream {
            service: "frame validate",
            status: 401,
            reason: "Unauthorized".into(),
        };
        assert!(!upstream.is_client_error());
        assert!(!GateError::MissingConfig("BASE_URL").is_client_error());
    }

    #[test]
    fn upstream_message_names_service_and_status() {
        let err = GateError::Upstream {
            service: "cast lookup",
            status: 404,
            reason: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "cast lookup returned 404: Not Found");
    }
}

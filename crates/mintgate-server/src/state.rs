use mintgate_core::{Config, FrameFlow, NeynarClient};
use std::sync::Arc;
use std::time::Duration;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub flow: Arc<FrameFlow>,
}

impl AppState {
    pub fn new(flow: FrameFlow) -> Self {
        Self {
            flow: Arc::new(flow),
        }
    }

    /// Wire the flow to the Neynar API described by `config`.
    ///
    /// Missing gate values are not fatal here; requests that need them fail.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        let neynar = Arc::new(NeynarClient::new(
            http,
            config.neynar_api_url.clone(),
            config.neynar_api_key.clone(),
        ));
        let flow = FrameFlow::new(
            neynar.clone(),
            neynar,
            config.cast_hash.clone(),
            config.base_url.clone(),
        );
        Ok(Self::new(flow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_accepts_partial_config() {
        assert!(AppState::from_config(&Config::default()).is_ok());
    }
}

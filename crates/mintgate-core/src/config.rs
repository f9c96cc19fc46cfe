use crate::error::Result;
use crate::neynar::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Runtime configuration for the frame server.
///
/// The three gate values are optional so the server can start with a partial
/// configuration; [`Config::validate`] reports what is missing and requests
/// that need a missing value fail individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neynar_api_key: Option<String>,
    /// Hash of the cast users must like and recast.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast_hash: Option<String>,
    /// Public URL this server is reachable at; used to build `post_url`s.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default = "default_api_url")]
    pub neynar_api_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neynar_api_key: None,
            cast_hash: None,
            base_url: None,
            neynar_api_url: default_api_url(),
            port: default_port(),
        }
    }
}

/// Values that take precedence over the config file (environment or flags).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub neynar_api_key: Option<String>,
    pub cast_hash: Option<String>,
    pub base_url: Option<String>,
    pub neynar_api_url: Option<String>,
    pub port: Option<u16>,
}

impl Config {
    /// Load a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Load `path` when given, otherwise start from defaults, then apply
    /// `overrides`.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let base = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(overrides))
    }

    pub fn with_overrides(mut self, o: Overrides) -> Self {
        fn non_empty(v: Option<String>) -> Option<String> {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        }
        if let Some(v) = non_empty(o.neynar_api_key) {
            self.neynar_api_key = Some(v);
        }
        if let Some(v) = non_empty(o.cast_hash) {
            self.cast_hash = Some(v);
        }
        if let Some(v) = non_empty(o.base_url) {
            self.base_url = Some(v);
        }
        if let Some(v) = non_empty(o.neynar_api_url) {
            self.neynar_api_url = v;
        }
        if let Some(p) = o.port {
            self.port = p;
        }
        self
    }

    /// Copy suitable for printing: the API key is masked.
    pub fn redacted(&self) -> Self {
        let mut out = self.clone();
        if out.neynar_api_key.is_some() {
            out.neynar_api_key = Some("***".to_string());
        }
        out
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let required = [
            ("NEYNAR_API_KEY", &self.neynar_api_key),
            ("CAST_HASH", &self.cast_hash),
            ("BASE_URL", &self.base_url),
        ];
        for (name, value) in required {
            if value.as_deref().map_or(true, |v| v.trim().is_empty()) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("{name} is not set"),
                });
            }
        }

        let urls = [
            ("BASE_URL", self.base_url.as_deref()),
            ("NEYNAR_API_URL", Some(self.neynar_api_url.as_str())),
        ];
        for (name, value) in urls {
            if let Some(url) = value.filter(|u| !u.is_empty()) {
                if !(url.starts_with("https://") || url.starts_with("http://")) {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Error,
                        message: format!("{name} '{url}' is not an http(s) URL"),
                    });
                }
            }
        }

        warnings
    }
}

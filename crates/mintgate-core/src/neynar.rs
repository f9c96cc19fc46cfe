//! Neynar API access: frame action validation and cast reaction lookup.
//!
//! The flow only depends on the [`Verifier`] and [`ReactionSource`] traits;
//! [`NeynarClient`] is the production implementation of both.

use crate::error::{GateError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.neynar.com";

const VALIDATE_PATH: &str = "/v2/farcaster/frame/validate";
const CAST_PATH: &str = "/v2/farcaster/cast";

/// Farcaster account id.
pub type Fid = u64;

// ---------------------------------------------------------------------------
// Domain types
// ---------------------------------------------------------------------------

/// A signed frame action that the verifier accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAction {
    pub fid: Fid,
    pub button_index: u32,
    pub username: Option<String>,
    pub custody_address: Option<String>,
}

/// Accounts that liked and recast the target cast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionSet {
    pub likes: Vec<Fid>,
    pub recasts: Vec<Fid>,
}

impl ReactionSet {
    pub fn has_liked(&self, fid: Fid) -> bool {
        self.likes.contains(&fid)
    }

    pub fn has_recast(&self, fid: Fid) -> bool {
        self.recasts.contains(&fid)
    }

    /// Liked and recast.
    pub fn has_engaged(&self, fid: Fid) -> bool {
        self.has_liked(fid) && self.has_recast(fid)
    }
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

#[async_trait]
pub trait Verifier: Send + Sync {
    /// Validate hex-encoded message bytes and return the interactor.
    async fn validate(&self, message_bytes: &str) -> Result<VerifiedAction>;
}

#[async_trait]
pub trait ReactionSource: Send + Sync {
    /// Fetch current likes and recasts for the cast with the given hash.
    async fn reactions(&self, cast_hash: &str) -> Result<ReactionSet>;
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ValidateRequest<'a> {
    message_bytes_in_hex: &'a str,
}

#[derive(Deserialize)]
struct ValidateResponse {
    action: WireAction,
}

#[derive(Deserialize)]
struct WireAction {
    interactor: WireInteractor,
    tapped_button: WireButton,
}

#[derive(Deserialize)]
struct WireInteractor {
    fid: Fid,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    custody_address: Option<String>,
}

#[derive(Deserialize)]
struct WireButton {
    index: u32,
}

#[derive(Deserialize)]
struct CastResponse {
    cast: WireCast,
}

#[derive(Deserialize)]
struct WireCast {
    reactions: WireReactions,
}

#[derive(Deserialize)]
struct WireReactions {
    #[serde(default)]
    likes: Vec<WireReaction>,
    #[serde(default)]
    recasts: Vec<WireReaction>,
}

#[derive(Deserialize)]
struct WireReaction {
    fid: Fid,
}

impl From<WireAction> for VerifiedAction {
    fn from(a: WireAction) -> Self {
        Self {
            fid: a.interactor.fid,
            button_index: a.tapped_button.index,
            username: a.interactor.username,
            custody_address: a.interactor.custody_address,
        }
    }
}

impl From<WireReactions> for ReactionSet {
    fn from(r: WireReactions) -> Self {
        Self {
            likes: r.likes.into_iter().map(|l| l.fid).collect(),
            recasts: r.recasts.into_iter().map(|l| l.fid).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// NeynarClient
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct NeynarClient {
    http: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl NeynarClient {
    pub fn new(http: reqwest::Client, api_url: impl Into<String>, api_key: Option<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            api_url,
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or(GateError::MissingConfig("NEYNAR_API_KEY"))
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        service: &'static str,
        resp: reqwest::Response,
    ) -> Result<T> {
        let status = resp.status();
        if !status.is_success() {
            return Err(GateError::Upstream {
                service,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }
        let body = resp
            .bytes()
            .await
            .map_err(|source| GateError::Transport { service, source })?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl Verifier for NeynarClient {
    async fn validate(&self, message_bytes: &str) -> Result<VerifiedAction> {
        const SERVICE: &str = "frame validate";
        let api_key = self.api_key()?;
        let url = format!("{}{VALIDATE_PATH}", self.api_url);
        let resp = self
            .http
            .post(&url)
            .header("api_key", api_key)
            .json(&ValidateRequest {
                message_bytes_in_hex: message_bytes,
            })
            .send()
            .await
            .map_err(|source| GateError::Transport {
                service: SERVICE,
                source,
            })?;
        let parsed: ValidateResponse = Self::decode(SERVICE, resp).await?;
        Ok(parsed.action.into())
    }
}

#[async_trait]
impl ReactionSource for NeynarClient {
    async fn reactions(&self, cast_hash: &str) -> Result<ReactionSet> {
        const SERVICE: &str = "cast lookup";
        let api_key = self.api_key()?;
        let url = format!("{}{CAST_PATH}", self.api_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("identifier", cast_hash), ("type", "hash")])
            .header("api_key", api_key)
            .send()
            .await
            .map_err(|source| GateError::Transport {
                service: SERVICE,
                source,
            })?;
        let parsed: CastResponse = Self::decode(SERVICE, resp).await?;
        Ok(parsed.cast.reactions.into())
    }
}

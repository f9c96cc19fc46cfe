use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct FrameQuery {
    #[serde(rename = "type", default)]
    pub stage: Option<String>,
}

/// Frame action POST body as sent by Farcaster clients.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameActionBody {
    #[serde(default)]
    pub trusted_data: Option<TrustedData>,
    /// Client-reported fields. Logged only; the verifier is authoritative.
    #[serde(default)]
    pub untrusted_data: Option<UntrustedData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedData {
    #[serde(default)]
    pub message_bytes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntrustedData {
    #[serde(default)]
    pub fid: Option<u64>,
    #[serde(default)]
    pub button_index: Option<u32>,
}

impl FrameActionBody {
    /// Parse leniently: a body that is not a frame action has no payload.
    pub fn parse(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    pub fn message_bytes(&self) -> Option<&str> {
        self.trusted_data
            .as_ref()
            .and_then(|t| t.message_bytes.as_deref())
    }
}

/// POST /api/frame?type={start|recast|mint} — advance the gate by one tap.
pub async fn frame_action(
    State(app): State<AppState>,
    Query(query): Query<FrameQuery>,
    body: Bytes,
) -> Result<Html<String>, AppError> {
    let body = FrameActionBody::parse(&body);
    if let Some(ref u) = body.untrusted_data {
        tracing::debug!(
            claimed_fid = ?u.fid,
            claimed_button = ?u.button_index,
            stage = ?query.stage,
            "frame action received"
        );
    }

    let outcome = app
        .flow
        .handle(query.stage.as_deref(), body.message_bytes())
        .await?;
    Ok(Html(outcome.frame.render()))
}

/// Any verb other than POST on /api/frame.
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_trusted_message_bytes() {
        let body = FrameActionBody::parse(
            br#"{"untrustedData":{"fid":42,"buttonIndex":1},"trustedData":{"messageBytes":"0a0b"}}"#,
        );
        assert_eq!(body.message_bytes(), Some("0a0b"));
        let u = body.untrusted_data.unwrap();
        assert_eq!(u.fid, Some(42));
        assert_eq!(u.button_index, Some(1));
    }

    #[test]
    fn parse_without_trusted_data_has_no_payload() {
        assert_eq!(
            FrameActionBody::parse(br#"{"untrustedData":{}}"#).message_bytes(),
            None
        );
        assert_eq!(
            FrameActionBody::parse(br#"{"trustedData":{}}"#).message_bytes(),
            None
        );
    }

    #[test]
    fn parse_garbage_has_no_payload() {
        assert_eq!(FrameActionBody::parse(b"not json").message_bytes(), None);
        assert_eq!(FrameActionBody::parse(b"").message_bytes(), None);
    }
}

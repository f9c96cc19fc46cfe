//! The engagement gate: validate a frame action, then pick the next frame.
//!
//! ```text
//!   start ──▶ recast ──(liked && recast)──▶ mint ──▶ start
//!               ▲  │
//!               └──┘ (not yet)
//! ```

use crate::error::{GateError, Result};
use crate::frame::{post_url, Frame};
use crate::neynar::{Fid, ReactionSource, VerifiedAction, Verifier};
use crate::stage::FlowStage;
use std::sync::Arc;

pub const PROMPT_LIKE_AND_RECAST: &str = "Lájkold és recastold a castot!";
pub const PROMPT_NOT_YET: &str = "Előbb lájkold és recastold a castot!";
pub const PROMPT_MINT: &str = "Minteld az NFT-t";
pub const PROMPT_MINTED: &str = "Köszönjük, a mintelés megtörtént!";

/// Result of one handled action, kept for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub action: VerifiedAction,
    pub stage: FlowStage,
    pub next: FlowStage,
    pub frame: Frame,
}

pub struct FrameFlow {
    verifier: Arc<dyn Verifier>,
    reactions: Arc<dyn ReactionSource>,
    cast_hash: Option<String>,
    base_url: Option<String>,
}

impl FrameFlow {
    pub fn new(
        verifier: Arc<dyn Verifier>,
        reactions: Arc<dyn ReactionSource>,
        cast_hash: Option<String>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            verifier,
            reactions,
            cast_hash,
            base_url,
        }
    }

    /// Validate the signed payload with the verifier.
    pub async fn validate(&self, message_bytes: &str) -> Result<VerifiedAction> {
        if message_bytes.is_empty() {
            return Err(GateError::MissingMessageBytes);
        }
        self.verifier.validate(message_bytes).await
    }

    /// Compute the frame shown to `fid` after a tap on a `stage` frame.
    pub async fn transition(&self, stage: FlowStage, fid: Fid) -> Result<(FlowStage, Frame)> {
        let (label, next) = match stage {
            FlowStage::Start => (PROMPT_LIKE_AND_RECAST, FlowStage::Recast),
            FlowStage::Recast => {
                let cast_hash = self
                    .cast_hash
                    .as_deref()
                    .ok_or(GateError::MissingConfig("CAST_HASH"))?;
                let reactions = self.reactions.reactions(cast_hash).await?;
                if reactions.has_engaged(fid) {
                    (PROMPT_MINT, FlowStage::Mint)
                } else {
                    tracing::debug!(
                        fid,
                        liked = reactions.has_liked(fid),
                        recast = reactions.has_recast(fid),
                        "engagement incomplete"
                    );
                    (PROMPT_NOT_YET, FlowStage::Recast)
                }
            }
            // No mint transaction is sent here; the frame only confirms.
            FlowStage::Mint => (PROMPT_MINTED, FlowStage::Start),
        };
        let base_url = self
            .base_url
            .as_deref()
            .ok_or(GateError::MissingConfig("BASE_URL"))?;
        Ok((next, Frame::new(label, post_url(base_url, next))))
    }

    /// Handle one frame action end to end.
    ///
    /// The payload is checked before any outbound call, the verifier runs
    /// before the stage is interpreted, and the reaction source is only
    /// consulted for `recast`.
    pub async fn handle(
        &self,
        stage: Option<&str>,
        message_bytes: Option<&str>,
    ) -> Result<Outcome> {
        let message_bytes = message_bytes
            .filter(|m| !m.is_empty())
            .ok_or(GateError::MissingMessageBytes)?;
        let action = self.validate(message_bytes).await?;
        let stage = FlowStage::from_query(stage)?;
        let (next, frame) = self.transition(stage, action.fid).await?;
        tracing::info!(
            fid = action.fid,
            username = action.username.as_deref().unwrap_or("-"),
            custody_address = action.custody_address.as_deref().unwrap_or("-"),
            button = action.button_index,
            %stage,
            %next,
            "frame action handled"
        );
        Ok(Outcome {
            action,
            stage,
            next,
            frame,
        })
    }
}

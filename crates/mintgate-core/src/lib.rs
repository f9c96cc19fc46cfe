//! `mintgate-core` — engagement-gated mint flow for Farcaster frames.
//!
//! A user taps through three frames: a prompt to like and recast a cast, a
//! check of that engagement, and a mint confirmation. Each tap carries a
//! signed message that is validated with Neynar before the next frame is
//! chosen. The current stage travels in the next frame's `post_url`, so no
//! state is kept between requests.

pub mod config;
pub mod error;
pub mod flow;
pub mod frame;
pub mod neynar;
pub mod stage;

pub use config::{Config, ConfigWarning, Overrides, WarnLevel};
pub use error::{GateError, Result};
pub use flow::{FrameFlow, Outcome};
pub use frame::Frame;
pub use neynar::{Fid, NeynarClient, ReactionSet, ReactionSource, VerifiedAction, Verifier};
pub use stage::FlowStage;

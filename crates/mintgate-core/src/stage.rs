use crate::error::GateError;
use std::fmt;
use std::str::FromStr;

/// Position in the like → recast → mint flow.
///
/// Carried only in the `type` query parameter of the next post target; the
/// server keeps no session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowStage {
    Start,
    Recast,
    Mint,
}

impl FlowStage {
    pub const ALL: [FlowStage; 3] = [FlowStage::Start, FlowStage::Recast, FlowStage::Mint];

    pub fn as_str(self) -> &'static str {
        match self {
            FlowStage::Start => "start",
            FlowStage::Recast => "recast",
            FlowStage::Mint => "mint",
        }
    }

    /// Parse the optional `type` query value. A missing value is as invalid
    /// as an unknown one.
    pub fn from_query(value: Option<&str>) -> Result<Self, GateError> {
        match value {
            Some(v) => v.parse(),
            None => Err(GateError::InvalidStage(String::new())),
        }
    }
}

impl fmt::Display for FlowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowStage {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(FlowStage::Start),
            "recast" => Ok(FlowStage::Recast),
            "mint" => Ok(FlowStage::Mint),
            other => Err(GateError::InvalidStage(other.to_string())),
        }
    }
}

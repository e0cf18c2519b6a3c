//! # Flow Settings
//!
//! Policies that govern how the two fetch flows interact.

use std::fmt;
use std::str::FromStr;

/// How overlapping requests on the same flow are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionPolicy {
    /// Only the most recently issued request may settle the flow; earlier
    /// responses are discarded when they arrive
    #[default]
    LatestIssued,
    /// Every response is applied, so the one that resolves last wins
    LastWriteWins,
}

impl FromStr for ResolutionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "latest_issued" => Ok(ResolutionPolicy::LatestIssued),
            "last_write_wins" => Ok(ResolutionPolicy::LastWriteWins),
            other => Err(format!(
                "unknown resolution policy '{other}' (expected latest_issued or last_write_wins)"
            )),
        }
    }
}

impl fmt::Display for ResolutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionPolicy::LatestIssued => f.write_str("latest_issued"),
            ResolutionPolicy::LastWriteWins => f.write_str("last_write_wins"),
        }
    }
}

/// Behaviour switches for the pet view model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSettings {
    /// Starting one flow clears the other flow's result
    pub exclusive_flows: bool,
    pub resolution_policy: ResolutionPolicy,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            exclusive_flows: true,
            resolution_policy: ResolutionPolicy::default(),
        }
    }
}

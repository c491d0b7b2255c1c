//! Engine configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What Equals does when it reaches a left operand that is already being
/// compared further up the same traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CyclePolicy {
    /// Treat the revisit as satisfied; cyclic graphs are self-consistent.
    #[default]
    AssumeEqual,
    /// Flag the revisit; the branch answers false and the top-level call
    /// reports a cyclic equivalence error.
    Reject,
}

impl FromStr for CyclePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "assume-equal" | "assume" => Ok(Self::AssumeEqual),
            "reject" => Ok(Self::Reject),
            _ => Err(format!(
                "Invalid cycle policy: '{}'. Valid options are: assume-equal, reject",
                s
            )),
        }
    }
}

impl fmt::Display for CyclePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssumeEqual => write!(f, "assume-equal"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// Configuration for a top-level engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cycle handling for Equals. Compare always rejects cycles.
    #[serde(default)]
    pub cycle_policy: CyclePolicy,
}

impl EngineConfig {
    /// Cycles compare equal to themselves.
    pub fn lenient() -> Self {
        Self {
            cycle_policy: CyclePolicy::AssumeEqual,
        }
    }

    /// Any revisited cycle is reported as an error.
    pub fn strict() -> Self {
        Self {
            cycle_policy: CyclePolicy::Reject,
        }
    }
}

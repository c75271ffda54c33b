//! Machine configuration.

use serde::{Deserialize, Serialize};

/// What the machine does with an input that has no transition from the
/// current state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedInputPolicy {
    /// Fail with `UnresolvedInput`
    #[default]
    Reject,

    /// Leave the current state unchanged and report nothing
    Ignore,

    /// Leave the current state unchanged but emit a warning event
    IgnoreAndLog,
}

impl UnresolvedInputPolicy {
    /// Map the strict/lenient switch onto a policy.
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Reject
        } else {
            Self::Ignore
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Reject)
    }
}

/// Runtime behaviour of a machine, fixed at construction.
///
/// Embedding applications can deserialize this from their own
/// configuration; every field has a default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub unresolved_input: UnresolvedInputPolicy,
}

impl MachineConfig {
    pub fn strict() -> Self {
        Self {
            unresolved_input: UnresolvedInputPolicy::Reject,
        }
    }

    pub fn lenient() -> Self {
        Self {
            unresolved_input: UnresolvedInputPolicy::Ignore,
        }
    }

    pub fn with_unresolved_input(mut self, policy: UnresolvedInputPolicy) -> Self {
        self.unresolved_input = policy;
        self
    }
}

//! Target-number checks: roll 2d6, add a DM, meet or beat the target.

use serde::{Deserialize, Serialize};

/// A labelled 2d6 check against a target number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCheck<'a> {
    /// What the check is for, e.g. "Survival".
    pub label: &'a str,
    /// Number the modified roll must meet or exceed.
    pub target: u32,
}

/// The result of a resolved check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// The unmodified dice total.
    pub roll: u32,
    /// Total modifier applied.
    pub dm: i32,
    /// Target number.
    pub target: u32,
    /// Whether `roll + dm >= target`.
    pub success: bool,
}

impl<'a> TargetCheck<'a> {
    /// Create a check.
    pub fn new(label: &'a str, target: u32) -> Self {
        Self { label, target }
    }

    /// Resolve an already-rolled total.
    pub fn resolve(&self, roll: u32, dm: i32) -> CheckOutcome {
        let success = i64::from(roll) + i64::from(dm) >= i64::from(self.target);
        tracing::debug!(label = self.label, roll, dm, target = self.target, success, "check");
        CheckOutcome {
            roll,
            dm,
            target: self.target,
            success,
        }
    }
}

impl CheckOutcome {
    /// Log line in the form used by the life log.
    pub fn describe(&self, label: &str) -> String {
        format!(
            "{label} check: rolled {} (DM {}) against {}",
            self.roll, self.dm, self.target
        )
    }
}

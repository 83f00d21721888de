//! Policies controlling how extraction failures are handled.

use serde::{Deserialize, Serialize};

/// What to do with a dead patient whose document has no `days_to_death`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDeathDaysPolicy {
    /// Fail the record.
    #[default]
    Reject,
    /// Emit the record with a null `survival_in_days` and a warning.
    Null,
}

/// What the batch driver does when one document fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchFailurePolicy {
    /// Report the failure and keep going with the remaining files.
    #[default]
    Continue,
    /// Stop at the first failure.
    Halt,
}

/// Options for turning one document into one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    pub missing_death_days: MissingDeathDaysPolicy,
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_missing_death_days(mut self, policy: MissingDeathDaysPolicy) -> Self {
        self.missing_death_days = policy;
        self
    }
}

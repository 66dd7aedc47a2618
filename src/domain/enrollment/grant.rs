//! Enrollment grant outcome.

use serde::{Deserialize, Serialize};

/// Outcome of an enrollment grant attempt.
///
/// The ledger treats granting as a conditional append: a second grant for
/// the same (user, course) pair is not an error at this level, it simply
/// reports that the entry was already present. Call sites decide whether
/// `AlreadyEnrolled` is a success (payment confirmation retries) or a
/// rejected duplicate (direct enrollment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantOutcome {
    /// The grant was created by this call.
    NewlyEnrolled,
    /// A grant for this pair already existed; nothing changed.
    AlreadyEnrolled,
}

impl GrantOutcome {
    /// Returns true if this call created the grant.
    pub fn is_new(&self) -> bool {
        matches!(self, GrantOutcome::NewlyEnrolled)
    }
}

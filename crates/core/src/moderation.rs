//! Project moderation state machine.
//!
//! A project's review state is stored as two independent booleans rather
//! than a single enum: `pending` (awaiting review) and `approved`. A third
//! flag, `verified`, is an orthogonal badge that is only meaningful on
//! approved projects. This module derives the logical state from the flags
//! and applies transitions as pure functions; persistence happens in the
//! db layer as single atomic row updates.

use crate::error::CoreError;

/// Logical review state derived from the `pending` / `approved` flag pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationState {
    /// Submitted, awaiting an admin decision.
    Pending,
    /// Listed publicly.
    Approved,
    /// Reviewed and declined.
    Rejected,
}

impl ModerationState {
    /// Derive the state from the stored flag pair.
    ///
    /// `approved` wins over `pending`: the flag combination
    /// `pending && approved` cannot be produced by any transition, but if a
    /// row ever carries it the project is treated as approved.
    pub fn from_flags(pending: bool, approved: bool) -> Self {
        if approved {
            ModerationState::Approved
        } else if pending {
            ModerationState::Pending
        } else {
            ModerationState::Rejected
        }
    }

    /// Lowercase label used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationState::Pending => "pending",
            ModerationState::Approved => "approved",
            ModerationState::Rejected => "rejected",
        }
    }
}

/// The three moderation flags carried by a project row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModerationFlags {
    pub pending: bool,
    pub approved: bool,
    pub verified: bool,
}

impl ModerationFlags {
    /// Flags assigned to a newly submitted project.
    pub fn submitted() -> Self {
        ModerationFlags {
            pending: true,
            approved: false,
            verified: false,
        }
    }

    pub fn state(&self) -> ModerationState {
        ModerationState::from_flags(self.pending, self.approved)
    }

    /// Approve the project. Valid from any state and idempotent: approving
    /// an already-approved project re-sets the same flags without error.
    pub fn approve(self) -> Self {
        ModerationFlags {
            pending: false,
            approved: true,
            verified: self.verified,
        }
    }

    /// Reject the project. Valid from any state and idempotent; the last
    /// transition wins (approve followed by reject leaves the project
    /// rejected, no history is kept). Rejection also clears `verified` so
    /// the badge never outlives approval.
    pub fn reject(self) -> Self {
        ModerationFlags {
            pending: false,
            approved: false,
            verified: false,
        }
    }

    /// Grant the verified badge. Only approved projects can carry it;
    /// verifying a pending or rejected project is a conflict. Idempotent on
    /// approved projects.
    pub fn verify(self) -> Result<Self, CoreError> {
        if self.state() != ModerationState::Approved {
            return Err(CoreError::Conflict(format!(
                "Cannot verify a {} project; approve it first",
                self.state().as_str()
            )));
        }
        Ok(ModerationFlags {
            verified: true,
            ..self
        })
    }

    /// Remove the verified badge. No precondition; idempotent.
    pub fn unverify(self) -> Self {
        ModerationFlags {
            verified: false,
            ..self
        }
    }
}

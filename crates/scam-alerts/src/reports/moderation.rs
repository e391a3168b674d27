//! Moderation workflow rules.
//!
//! The status field moves freely among `PENDING`, `APPROVED`, and
//! `REJECTED`: the mutation primitive accepts any target state from any
//! current state, including a redundant same-state write, and no state is
//! terminal. An administrator can un-approve or un-reject at any time. The
//! UI only ever offers the statuses other than the current one as actions;
//! [`available_actions`] captures that.

use crate::identity::{Role, User};

use super::domain::ReportStatus;

/// Statuses an administrator is offered for a report currently in
/// `current`. The current status is hidden as an action even though the
/// repository would accept a same-state write.
pub fn available_actions(current: ReportStatus) -> Vec<ReportStatus> {
    ReportStatus::ALL
        .into_iter()
        .filter(|status| *status != current)
        .collect()
}

/// Require the acting user to hold the ADMIN role. This is a workflow
/// rule applied at the presentation boundary, not a security boundary.
pub fn authorize_moderator(user: &User) -> Result<(), ModerationError> {
    if user.role.is_admin() {
        Ok(())
    } else {
        Err(ModerationError::NotModerator { role: user.role })
    }
}

/// Error raised when a non-administrator drives a moderation action.
#[derive(Debug, thiserror::Error)]
pub enum ModerationError {
    #[error("moderation requires the ADMIN role, acting role is {}", .role.label())]
    NotModerator { role: Role },
}

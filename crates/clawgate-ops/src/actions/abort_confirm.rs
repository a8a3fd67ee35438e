//! Abort Confirm actions
//!
//! Actions for the destructive-action confirmation.

use crate::state::AbortConfirmRequest;

/// Actions for the abort confirm slice
#[derive(Debug, Clone, PartialEq)]
pub enum AbortConfirmAction {
    /// Show the confirmation, capturing the request's callbacks
    Show(AbortConfirmRequest),
    /// Hide without invoking any callback (backdrop dismissal)
    Hide,
}

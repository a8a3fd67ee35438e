//! Success actions
//!
//! Actions for the success confirmation.

use crate::state::NextStep;

/// Actions for the success slice
#[derive(Debug, Clone, PartialEq)]
pub enum SuccessAction {
    /// Show the success confirmation with optional next steps
    Show {
        message: Option<String>,
        next_steps: Vec<NextStep>,
    },
    /// Hide the success confirmation
    Hide,
}

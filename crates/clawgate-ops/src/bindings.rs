//! Presentation bindings
//!
//! The only place where callbacks held in state are invoked. Each binding
//! takes the callback out of the current state, hides the slice through
//! dispatch, and only then runs the callback. A callback therefore sees the
//! slice already hidden, may show it again, and can never fire twice for one
//! show.

use crate::context::OperationHandle;
use crate::state::NextStepAction;

/// Confirm/cancel handling for the abort confirmation popup
#[derive(Debug, Clone, Copy)]
pub struct AbortConfirmBinding;

impl AbortConfirmBinding {
    /// User confirmed. Returns false if no confirmation was shown.
    pub fn confirm(handle: &OperationHandle) -> bool {
        let state = handle.abort_confirm();
        if !state.visible {
            log::debug!("Abort confirm: confirm ignored, nothing shown");
            return false;
        }

        handle.hide_abort_confirm();
        if let Some(on_confirm) = state.on_confirm {
            on_confirm.invoke();
        }
        true
    }

    /// User cancelled. Returns false if no confirmation was shown.
    pub fn cancel(handle: &OperationHandle) -> bool {
        let state = handle.abort_confirm();
        if !state.visible {
            log::debug!("Abort confirm: cancel ignored, nothing shown");
            return false;
        }

        handle.hide_abort_confirm();
        if let Some(on_cancel) = state.on_cancel {
            on_cancel.invoke();
        }
        true
    }
}

/// Outcome of activating a next step on the success popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStepTarget {
    /// The caller should navigate to this location
    Link(String),
    /// The step's callback has run
    Invoked,
}

/// Next-step and dismiss handling for the success popup
#[derive(Debug, Clone, Copy)]
pub struct SuccessBinding;

impl SuccessBinding {
    /// Activate the next step at `index`, hiding the popup first
    ///
    /// Returns None when the popup is hidden or `index` is out of range.
    pub fn activate(handle: &OperationHandle, index: usize) -> Option<NextStepTarget> {
        let step = handle.with_state(|s| {
            if s.success.visible {
                s.success.next_steps.get(index).cloned()
            } else {
                None
            }
        })?;

        log::debug!("Success: activating next step {:?}", step.label);
        handle.hide_success();
        match step.action {
            NextStepAction::Link(href) => Some(NextStepTarget::Link(href)),
            NextStepAction::Callback(callback) => {
                callback.invoke();
                Some(NextStepTarget::Invoked)
            }
        }
    }

    /// Close the popup without picking a next step
    pub fn dismiss(handle: &OperationHandle) -> bool {
        if !handle.success().visible {
            return false;
        }
        handle.hide_success();
        true
    }
}

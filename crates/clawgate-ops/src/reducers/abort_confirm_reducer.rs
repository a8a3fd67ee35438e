//! Abort Confirm Reducer
//!
//! Never invokes the callbacks it stores; hiding drops them.

use crate::actions::AbortConfirmAction;
use crate::state::AbortConfirmState;

/// Reduce abort confirm state
pub fn reduce_abort_confirm(
    _state: AbortConfirmState,
    action: &AbortConfirmAction,
) -> AbortConfirmState {
    match action {
        AbortConfirmAction::Show(request) => AbortConfirmState::active(request.clone()),
        AbortConfirmAction::Hide => AbortConfirmState::inactive(),
    }
}

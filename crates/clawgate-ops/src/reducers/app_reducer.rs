use crate::actions::Action;
use crate::reducers::{abort_confirm_reducer, loading_reducer, success_reducer};
use crate::state::OperationState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that routes each action to its slice reducer.
/// Slices not targeted by the action are returned untouched.
pub fn reduce(mut state: OperationState, action: &Action) -> OperationState {
    match action {
        Action::Loading(loading_action) => {
            state.loading = loading_reducer::reduce_loading(state.loading, loading_action);
        }
        Action::Success(success_action) => {
            state.success = success_reducer::reduce_success(state.success, success_action);
        }
        Action::AbortConfirm(abort_action) => {
            state.abort_confirm =
                abort_confirm_reducer::reduce_abort_confirm(state.abort_confirm, abort_action);
        }
        Action::None => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{AbortConfirmAction, LoadingAction, SuccessAction};
    use crate::state::{AbortConfirmRequest, NextStep};
    use pretty_assertions::assert_eq;

    fn populated() -> OperationState {
        let state = OperationState::default();
        let state = reduce(
            state,
            &Action::Success(SuccessAction::Show {
                message: Some("Saved.".to_string()),
                next_steps: vec![NextStep::link("View", "/item/1")],
            }),
        );
        reduce(
            state,
            &Action::AbortConfirm(AbortConfirmAction::Show(
                AbortConfirmRequest::new().message("Stop?").on_confirm(|| {}),
            )),
        )
    }

    #[test]
    fn test_loading_leaves_other_slices_untouched() {
        let before = populated();
        let after = reduce(
            before.clone(),
            &Action::Loading(LoadingAction::Show {
                message: Some("A".to_string()),
            }),
        );

        assert_eq!(after.success, before.success);
        assert_eq!(after.abort_confirm, before.abort_confirm);
        assert!(after.loading.visible);
    }

    #[test]
    fn test_hide_success_leaves_other_slices_untouched() {
        let before = reduce(
            populated(),
            &Action::Loading(LoadingAction::Show { message: None }),
        );
        let after = reduce(before.clone(), &Action::Success(SuccessAction::Hide));

        assert_eq!(after.loading, before.loading);
        assert_eq!(after.abort_confirm, before.abort_confirm);
        assert!(!after.success.visible);
    }

    #[test]
    fn test_none_is_noop() {
        let before = populated();
        assert_eq!(reduce(before.clone(), &Action::None), before);
    }
}

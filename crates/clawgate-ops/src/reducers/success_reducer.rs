//! Success Reducer

use crate::actions::SuccessAction;
use crate::state::SuccessState;

/// Reduce success state
pub fn reduce_success(_state: SuccessState, action: &SuccessAction) -> SuccessState {
    match action {
        SuccessAction::Show {
            message,
            next_steps,
        } => SuccessState::active(message.clone(), next_steps.clone()),
        SuccessAction::Hide => SuccessState::inactive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NextStep;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_show_keeps_next_step_order() {
        let steps = vec![
            NextStep::link("View", "/item/1"),
            NextStep::link("List", "/items"),
        ];
        let state = reduce_success(
            SuccessState::default(),
            &SuccessAction::Show {
                message: Some("Saved.".to_string()),
                next_steps: steps.clone(),
            },
        );

        assert!(state.visible);
        assert_eq!(state.next_steps, steps);
    }

    #[test]
    fn test_show_replaces_previous_next_steps() {
        let first = reduce_success(
            SuccessState::default(),
            &SuccessAction::Show {
                message: None,
                next_steps: vec![NextStep::link("Old", "/old")],
            },
        );
        let second = reduce_success(
            first,
            &SuccessAction::Show {
                message: Some("Again".to_string()),
                next_steps: Vec::new(),
            },
        );

        assert!(second.next_steps.is_empty());
        assert_eq!(second.message.as_deref(), Some("Again"));
    }

    #[test]
    fn test_hide() {
        let state = reduce_success(
            SuccessState::active(Some("x".to_string()), Vec::new()),
            &SuccessAction::Hide,
        );
        assert_eq!(state, SuccessState::inactive());
    }
}

//! Loading Reducer
//!
//! Last write wins: there is no stacking or reference counting of shows.

use crate::actions::LoadingAction;
use crate::state::LoadingState;

/// Reduce loading state
pub fn reduce_loading(_state: LoadingState, action: &LoadingAction) -> LoadingState {
    match action {
        LoadingAction::Show { message } => LoadingState::active(message.clone()),
        LoadingAction::Hide => LoadingState::inactive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn show(message: &str) -> LoadingAction {
        LoadingAction::Show {
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn test_last_show_wins() {
        let state = reduce_loading(LoadingState::default(), &show("Fetching skills"));
        let state = reduce_loading(state, &show("Saving webhook"));

        assert_eq!(
            state,
            LoadingState {
                visible: true,
                message: Some("Saving webhook".to_string()),
            }
        );
    }

    #[test]
    fn test_show_without_message_clears_previous_message() {
        let state = reduce_loading(LoadingState::default(), &show("A"));
        let state = reduce_loading(state, &LoadingAction::Show { message: None });

        assert!(state.visible);
        assert_eq!(state.message, None);
    }

    #[test]
    fn test_hide_after_any_shows() {
        let mut state = LoadingState::default();
        for msg in ["a", "b", "", "c"] {
            state = reduce_loading(state, &show(msg));
        }
        let state = reduce_loading(state, &LoadingAction::Hide);
        assert_eq!(state, LoadingState::inactive());
    }

    #[test]
    fn test_hide_when_already_hidden() {
        let state = reduce_loading(LoadingState::default(), &LoadingAction::Hide);
        assert_eq!(state, LoadingState::inactive());
    }

    #[test]
    fn test_empty_message_is_accepted() {
        let state = reduce_loading(LoadingState::default(), &show(""));
        assert_eq!(state.message.as_deref(), Some(""));
    }
}

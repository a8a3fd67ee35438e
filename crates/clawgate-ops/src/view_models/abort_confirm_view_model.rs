//! View model for the abort confirmation popup

use crate::state::AbortConfirmState;
use crate::theme::Theme;
use clawgate_config::AppConfig;
use ratatui::style::Color;

/// View model for the abort confirmation popup
#[derive(Debug, Clone)]
pub struct AbortConfirmViewModel {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    /// Hint for confirm (e.g., "Enter/y")
    pub confirm_key: String,
    /// Hint for cancel (e.g., "Esc/n")
    pub cancel_key: String,
    pub message_fg: Color,
    pub confirm_fg: Color,
    pub border_fg: Color,
}

impl AbortConfirmViewModel {
    /// Build view model; None while the popup is hidden
    pub fn from_state(
        state: &AbortConfirmState,
        config: &AppConfig,
        theme: &Theme,
    ) -> Option<Self> {
        if !state.visible {
            return None;
        }

        Some(Self {
            title: "Confirm".to_string(),
            message: state
                .message
                .clone()
                .unwrap_or_else(|| config.abort_message.clone()),
            confirm_label: state
                .confirm_label
                .clone()
                .unwrap_or_else(|| config.confirm_label.clone()),
            cancel_label: config.cancel_label.clone(),
            confirm_key: "Enter/y".to_string(),
            cancel_key: "Esc/n".to_string(),
            message_fg: theme.text_primary,
            confirm_fg: theme.action_danger,
            border_fg: theme.status_warning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AbortConfirmRequest;

    #[test]
    fn test_defaults_from_config() {
        let state = AbortConfirmState::active(AbortConfirmRequest::new());
        let vm = AbortConfirmViewModel::from_state(&state, &AppConfig::default(), &Theme::default())
            .unwrap();

        assert_eq!(vm.message, AppConfig::default().abort_message);
        assert_eq!(vm.confirm_label, "Abort");
        assert_eq!(vm.cancel_label, "Cancel");
    }

    #[test]
    fn test_confirm_label_override() {
        let state = AbortConfirmState::active(
            AbortConfirmRequest::new()
                .message("Delete secret API_KEY?")
                .confirm_label("Delete"),
        );
        let vm = AbortConfirmViewModel::from_state(&state, &AppConfig::default(), &Theme::default())
            .unwrap();

        assert_eq!(vm.message, "Delete secret API_KEY?");
        assert_eq!(vm.confirm_label, "Delete");
    }

    #[test]
    fn test_hidden_has_no_view_model() {
        let vm = AbortConfirmViewModel::from_state(
            &AbortConfirmState::inactive(),
            &AppConfig::default(),
            &Theme::default(),
        );
        assert!(vm.is_none());
    }
}

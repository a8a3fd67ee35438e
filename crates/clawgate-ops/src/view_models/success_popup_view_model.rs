//! View model for the success popup
//!
//! Pre-computes the numbered next-step rows and footer hints.

use crate::state::SuccessState;
use crate::theme::Theme;
use clawgate_config::AppConfig;
use ratatui::style::Color;

/// A numbered next step row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextStepRow {
    /// Key that activates the step ("1".."9")
    pub key: String,
    pub label: String,
    /// Link target, empty for callback steps
    pub target: String,
}

/// View model for the success popup
#[derive(Debug, Clone)]
pub struct SuccessPopupViewModel {
    pub title: String,
    pub message: String,
    pub next_steps: Vec<NextStepRow>,
    /// Hint for dismiss (e.g., "x/Esc")
    pub dismiss_key: String,
    pub dismiss_label: String,
    pub message_fg: Color,
    pub key_fg: Color,
    pub link_fg: Color,
    pub border_fg: Color,
}

impl SuccessPopupViewModel {
    /// Only the first nine steps get a key
    pub const MAX_STEPS: usize = 9;

    /// Build view model; None while the popup is hidden
    pub fn from_state(state: &SuccessState, config: &AppConfig, theme: &Theme) -> Option<Self> {
        if !state.visible {
            return None;
        }

        let next_steps = state
            .next_steps
            .iter()
            .take(Self::MAX_STEPS)
            .enumerate()
            .map(|(i, step)| NextStepRow {
                key: (i + 1).to_string(),
                label: step.label.clone(),
                target: step.href().unwrap_or_default().to_string(),
            })
            .collect();

        Some(Self {
            title: "Success".to_string(),
            message: state
                .message
                .clone()
                .unwrap_or_else(|| config.success_message.clone()),
            next_steps,
            dismiss_key: "x/Esc".to_string(),
            dismiss_label: config.dismiss_label.clone(),
            message_fg: theme.status_success,
            key_fg: theme.accent_primary,
            link_fg: theme.status_info,
            border_fg: theme.status_success,
        })
    }
}

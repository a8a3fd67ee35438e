//! View model for the loading overlay

use crate::state::LoadingState;
use crate::theme::Theme;
use clawgate_config::AppConfig;
use ratatui::style::Color;

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// View model for the busy overlay
#[derive(Debug, Clone)]
pub struct LoadingOverlayViewModel {
    /// Message shown next to the spinner
    pub message: String,
    /// Current spinner glyph
    pub spinner: &'static str,
    pub text_fg: Color,
    pub spinner_fg: Color,
    pub border_fg: Color,
}

impl LoadingOverlayViewModel {
    /// Build view model; None while the overlay is hidden
    pub fn from_state(
        state: &LoadingState,
        config: &AppConfig,
        theme: &Theme,
        spinner_frame: usize,
    ) -> Option<Self> {
        if !state.visible {
            return None;
        }

        Some(Self {
            message: state
                .message
                .clone()
                .unwrap_or_else(|| config.loading_message.clone()),
            spinner: SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()],
            text_fg: theme.text_primary,
            spinner_fg: theme.status_warning,
            border_fg: theme.accent_primary,
        })
    }
}

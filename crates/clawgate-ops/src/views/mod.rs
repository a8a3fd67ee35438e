//! Presentation bindings for the operation state
//!
//! Rendering order is fixed: abort confirm, then success, then the loading
//! overlay on top of everything, so a busy overlay always blocks the popups.

use crate::state::OperationState;
use crate::theme::Theme;
use crate::view_models::{AbortConfirmViewModel, LoadingOverlayViewModel, SuccessPopupViewModel};
use clawgate_config::AppConfig;
use ratatui::{layout::Rect, Frame};

pub mod abort_confirm_view;
pub mod loading_overlay_view;
pub mod success_popup_view;

pub use abort_confirm_view::render_abort_confirm;
pub use loading_overlay_view::render_loading_overlay;
pub use success_popup_view::render_success_popup;

/// Everything the views need besides the state itself
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub config: AppConfig,
    pub theme: Theme,
    /// Advances once per tick while the loading overlay is shown
    pub spinner_frame: usize,
}

/// Render all visible operation signals over `area`
pub fn render(state: &OperationState, ctx: &RenderContext, area: Rect, f: &mut Frame) {
    if let Some(vm) = AbortConfirmViewModel::from_state(&state.abort_confirm, &ctx.config, &ctx.theme) {
        render_abort_confirm(f, &vm, &ctx.theme, area);
    }

    if let Some(vm) = SuccessPopupViewModel::from_state(&state.success, &ctx.config, &ctx.theme) {
        render_success_popup(f, &vm, &ctx.theme, area);
    }

    if let Some(vm) = LoadingOverlayViewModel::from_state(
        &state.loading,
        &ctx.config,
        &ctx.theme,
        ctx.spinner_frame,
    ) {
        render_loading_overlay(f, &vm, area);
    }
}

/// Center a `width` x `height` box inside `area`, shrinking it to fit
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

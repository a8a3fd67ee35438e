//! Abort Confirmation State
//!
//! Confirmation for destructive actions. The store only holds the callbacks;
//! the presentation binding decides which one fires.

use super::Callback;

/// Payload for `show_abort_confirm`
///
/// Every field is optional; missing texts fall back to the configured defaults
/// at render time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbortConfirmRequest {
    pub message: Option<String>,
    pub on_confirm: Option<Callback>,
    pub on_cancel: Option<Callback>,
    pub confirm_label: Option<String>,
}

impl AbortConfirmRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn on_confirm(mut self, f: impl Fn() + 'static) -> Self {
        self.on_confirm = Some(Callback::new(f));
        self
    }

    pub fn on_cancel(mut self, f: impl Fn() + 'static) -> Self {
        self.on_cancel = Some(Callback::new(f));
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }
}

/// State of the abort confirmation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbortConfirmState {
    pub visible: bool,
    pub message: Option<String>,
    pub on_confirm: Option<Callback>,
    pub on_cancel: Option<Callback>,
    /// Overrides the configured confirm label when set
    pub confirm_label: Option<String>,
}

impl AbortConfirmState {
    pub fn active(request: AbortConfirmRequest) -> Self {
        let AbortConfirmRequest {
            message,
            on_confirm,
            on_cancel,
            confirm_label,
        } = request;
        Self {
            visible: true,
            message,
            on_confirm,
            on_cancel,
            confirm_label,
        }
    }

    /// Inactive state; drops any callbacks that were held
    pub fn inactive() -> Self {
        Self::default()
    }
}

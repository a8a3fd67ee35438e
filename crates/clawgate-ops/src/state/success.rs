//! Success State
//!
//! Confirmation shown after an operation finished, with optional follow-up
//! actions ("next steps") the user can pick.

use super::Callback;

/// What a next step does when activated
///
/// A step either navigates somewhere or runs a callback, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum NextStepAction {
    /// Navigate to the given location
    Link(String),
    /// Run caller-supplied code
    Callback(Callback),
}

/// A single follow-up action offered on the success popup
#[derive(Debug, Clone, PartialEq)]
pub struct NextStep {
    pub label: String,
    pub action: NextStepAction,
}

impl NextStep {
    /// Create a link-style next step
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: NextStepAction::Link(href.into()),
        }
    }

    /// Create a callback-style next step
    pub fn callback(label: impl Into<String>, f: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            action: NextStepAction::Callback(Callback::new(f)),
        }
    }

    /// Get the href for link-style steps
    pub fn href(&self) -> Option<&str> {
        match &self.action {
            NextStepAction::Link(href) => Some(href),
            NextStepAction::Callback(_) => None,
        }
    }
}

/// State of the success confirmation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuccessState {
    pub visible: bool,
    pub message: Option<String>,
    /// Ordered as supplied by the caller
    pub next_steps: Vec<NextStep>,
}

impl SuccessState {
    pub fn active(message: Option<String>, next_steps: Vec<NextStep>) -> Self {
        Self {
            visible: true,
            message,
            next_steps,
        }
    }

    pub fn inactive() -> Self {
        Self::default()
    }
}

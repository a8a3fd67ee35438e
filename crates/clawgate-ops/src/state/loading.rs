//! Loading State
//!
//! Busy overlay shown while feature code runs its own async work.

/// State of the busy overlay
///
/// Only one message is ever held: a new `show` replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub visible: bool,
    pub message: Option<String>,
}

impl LoadingState {
    pub fn active(message: Option<String>) -> Self {
        Self {
            visible: true,
            message,
        }
    }

    pub fn inactive() -> Self {
        Self::default()
    }
}

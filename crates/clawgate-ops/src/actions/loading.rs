//! Loading actions
//!
//! Actions for the busy overlay.

/// Actions for the loading slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingAction {
    /// Show the overlay, replacing any message already shown
    Show { message: Option<String> },
    /// Hide the overlay regardless of its message
    Hide,
}

//! Actions module
//!
//! Actions are tagged by the slice they target. Each slice reducer only
//! reacts to its own variant, which keeps the three slices independent.

pub mod abort_confirm;
pub mod loading;
pub mod success;

pub use abort_confirm::AbortConfirmAction;
pub use loading::LoadingAction;
pub use success::SuccessAction;

/// The three independently mutable parts of the operation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Slice {
    Loading,
    Success,
    AbortConfirm,
}

/// Root action enum - tagged by slice
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Busy overlay actions
    Loading(LoadingAction),
    /// Success confirmation actions
    Success(SuccessAction),
    /// Abort confirmation actions
    AbortConfirm(AbortConfirmAction),
    /// No-op action
    None,
}

impl Action {
    /// The slice this action targets, if any
    pub fn slice(&self) -> Option<Slice> {
        match self {
            Action::Loading(_) => Some(Slice::Loading),
            Action::Success(_) => Some(Slice::Success),
            Action::AbortConfirm(_) => Some(Slice::AbortConfirm),
            Action::None => None,
        }
    }
}

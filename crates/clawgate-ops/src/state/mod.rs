//! Operation State Module
//!
//! Contains the slice types owned by the store.

mod abort_confirm;
mod callback;
mod loading;
mod operation;
mod success;

pub use abort_confirm::{AbortConfirmRequest, AbortConfirmState};
pub use callback::Callback;
pub use loading::LoadingState;
pub use operation::OperationState;
pub use success::{NextStep, NextStepAction, SuccessState};

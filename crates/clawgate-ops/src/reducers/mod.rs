//! Reducers
//!
//! One pure reducer per slice plus the root reducer that routes to them.

pub mod abort_confirm_reducer;
pub mod app_reducer;
pub mod loading_reducer;
pub mod success_reducer;

pub use app_reducer::reduce;

//! Operation state signaling for the Clawgate dashboard
//!
//! A single-threaded store with three independent slices (loading overlay,
//! success confirmation, abort confirmation), a typed dispatch API, a
//! subscriber surface, and ratatui presentation bindings.
//!
//! ```no_run
//! use clawgate_ops::{context, NextStep, OperationHandle};
//!
//! let ops = OperationHandle::default();
//! context::provide(&ops, || {
//!     let ops = context::use_operation_state();
//!     ops.show_loading(Some("Saving webhook"));
//!     // ... feature code runs its own async work ...
//!     ops.hide_loading();
//!     ops.show_success(Some("Saved."), vec![NextStep::link("View", "/webhooks/1")]);
//! });
//! ```

pub mod actions;
pub mod bindings;
pub mod context;
pub mod dispatcher;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;
pub mod theme;
pub mod view_models;
pub mod views;

pub use bindings::{AbortConfirmBinding, NextStepTarget, SuccessBinding};
pub use context::{provide, try_use_operation_state, use_operation_state, ContextError, OperationHandle};
pub use state::{AbortConfirmRequest, Callback, NextStep, OperationState};
pub use store::{Store, SubscriptionId};

//! Middleware system
//!
//! Middleware sits between action dispatch and reducer execution:
//!
//! ```text
//! Action → Middleware Chain → Reducer → State → Subscribers
//! ```
//!
//! Each middleware can inspect actions and state, queue follow-up actions via
//! the Dispatcher, or consume an action so it never reaches the reducer.
//! Middleware must not invoke callbacks stored in state; that is left to the
//! presentation bindings.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::OperationState;

pub mod logging_middleware;

pub use logging_middleware::LoggingMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current operation state (read-only)
    /// - `dispatcher`: Use to queue actions that re-enter the middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &OperationState, dispatcher: &Dispatcher) -> bool;
}

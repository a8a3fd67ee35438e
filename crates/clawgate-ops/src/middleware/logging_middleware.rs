use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::OperationState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &OperationState, _dispatcher: &Dispatcher) -> bool {
        match action.slice() {
            Some(slice) => log::debug!("Action [{}]: {:?}", slice, action),
            None => log::trace!("Action: {:?}", action),
        }

        // A show on top of an already visible overlay silently replaces it
        if matches!(action, Action::Loading(_)) && state.loading.visible {
            log::trace!(
                "Loading already visible with {:?}, last write wins",
                state.loading.message
            );
        }

        true // Always pass action through
    }
}

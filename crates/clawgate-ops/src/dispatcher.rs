//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch follow-up actions, it uses the Dispatcher.
//! Actions dispatched here are queued and re-enter the full middleware chain
//! once the current action has been reduced, before `Store::dispatch` returns.

use crate::actions::Action;
use std::sync::mpsc::{self, Receiver, Sender};

/// Dispatcher for queueing actions from middleware
///
/// Cloning yields another handle onto the same queue.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a dispatcher together with the receiving end of its queue
    pub fn channel() -> (Self, Receiver<Action>) {
        let (action_tx, action_rx) = mpsc::channel();
        (Self { action_tx }, action_rx)
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to queue action: {}", e);
        }
    }
}

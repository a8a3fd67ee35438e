//! Subscriber surface
//!
//! [`OperationHandle`] is a cheap, clonable handle onto one shared [`Store`].
//! Pass it explicitly to the code that needs it, or install it with
//! [`provide`] so that nested code can fetch it with [`use_operation_state`]
//! instead of threading it through every call.
//!
//! Everything here is single-threaded: handles are `!Send` and the provider
//! stack is thread-local.

use crate::actions::{AbortConfirmAction, Action, LoadingAction, SuccessAction};
use crate::state::{
    AbortConfirmRequest, AbortConfirmState, LoadingState, NextStep, OperationState, SuccessState,
};
use crate::store::{Store, SubscriptionId};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

thread_local! {
    static PROVIDERS: RefCell<Vec<OperationHandle>> = const { RefCell::new(Vec::new()) };
}

/// Errors from looking up the current provider
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error(
        "use_operation_state() called outside of an operation provider; \
         wrap the caller in clawgate_ops::context::provide()"
    )]
    NoProvider,
}

/// Shared handle onto the operation store
///
/// State is read synchronously; dispatch functions apply immediately.
/// Listeners are called after the store borrow is released, so they may read
/// the state through any handle, including via [`use_operation_state`].
#[derive(Clone, Debug)]
pub struct OperationHandle {
    store: Rc<RefCell<Store>>,
}

impl OperationHandle {
    pub fn new(store: Store) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
        }
    }

    /// Snapshot of the full state
    pub fn state(&self) -> OperationState {
        self.store.borrow().state().clone()
    }

    /// Read the state without cloning it
    pub fn with_state<R>(&self, f: impl FnOnce(&OperationState) -> R) -> R {
        f(self.store.borrow().state())
    }

    pub fn loading(&self) -> LoadingState {
        self.with_state(|s| s.loading.clone())
    }

    pub fn success(&self) -> SuccessState {
        self.with_state(|s| s.success.clone())
    }

    pub fn abort_confirm(&self) -> AbortConfirmState {
        self.with_state(|s| s.abort_confirm.clone())
    }

    pub fn dispatch(&self, action: Action) {
        let notifications = self.store.borrow_mut().dispatch_deferred(action);
        notifications.deliver();
    }

    pub fn show_loading(&self, message: Option<&str>) {
        self.dispatch(Action::Loading(LoadingAction::Show {
            message: message.map(str::to_string),
        }));
    }

    pub fn hide_loading(&self) {
        self.dispatch(Action::Loading(LoadingAction::Hide));
    }

    pub fn show_success(&self, message: Option<&str>, next_steps: Vec<NextStep>) {
        self.dispatch(Action::Success(SuccessAction::Show {
            message: message.map(str::to_string),
            next_steps,
        }));
    }

    pub fn hide_success(&self) {
        self.dispatch(Action::Success(SuccessAction::Hide));
    }

    pub fn show_abort_confirm(&self, request: AbortConfirmRequest) {
        self.dispatch(Action::AbortConfirm(AbortConfirmAction::Show(request)));
    }

    pub fn hide_abort_confirm(&self) {
        self.dispatch(Action::AbortConfirm(AbortConfirmAction::Hide));
    }

    pub fn subscribe(&self, listener: impl Fn(&OperationState) + 'static) -> SubscriptionId {
        self.store.borrow_mut().subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.borrow_mut().unsubscribe(id)
    }

    /// Whether two handles point at the same store
    pub fn same_store(&self, other: &OperationHandle) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl Default for OperationHandle {
    fn default() -> Self {
        Self::new(Store::default())
    }
}

/// Pops the provider on drop, so unwinding out of `provide` leaves the stack clean
struct ProviderGuard;

impl Drop for ProviderGuard {
    fn drop(&mut self) {
        PROVIDERS.with(|providers| {
            providers.borrow_mut().pop();
        });
    }
}

/// Run `f` with `handle` installed as the current provider on this thread
///
/// Providers nest; the innermost one wins.
pub fn provide<R>(handle: &OperationHandle, f: impl FnOnce() -> R) -> R {
    PROVIDERS.with(|providers| providers.borrow_mut().push(handle.clone()));
    let _guard = ProviderGuard;
    f()
}

/// Get the current provider's handle, if any
pub fn try_use_operation_state() -> Result<OperationHandle, ContextError> {
    PROVIDERS
        .with(|providers| providers.borrow().last().cloned())
        .ok_or(ContextError::NoProvider)
}

/// Get the current provider's handle
///
/// # Panics
///
/// Panics when called outside [`provide`]. A missing provider is a wiring
/// bug, not a condition to recover from.
pub fn use_operation_state() -> OperationHandle {
    match try_use_operation_state() {
        Ok(handle) => handle,
        Err(e) => panic!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "outside of an operation provider")]
    fn test_use_without_provider_panics() {
        let _ = use_operation_state();
    }

    #[test]
    fn test_try_use_without_provider() {
        assert_eq!(
            try_use_operation_state().unwrap_err(),
            ContextError::NoProvider
        );
    }

    #[test]
    fn test_nested_code_reaches_provider() {
        fn deep_feature() {
            use_operation_state().show_loading(Some("Deploying node"));
        }

        let handle = OperationHandle::default();
        provide(&handle, deep_feature);

        assert_eq!(
            handle.loading().message.as_deref(),
            Some("Deploying node")
        );
    }

    #[test]
    fn test_innermost_provider_wins() {
        let outer = OperationHandle::default();
        let inner = OperationHandle::default();

        provide(&outer, || {
            provide(&inner, || {
                assert!(use_operation_state().same_store(&inner));
            });
            assert!(use_operation_state().same_store(&outer));
        });

        assert!(try_use_operation_state().is_err());
    }

    #[test]
    fn test_provider_removed_after_panic() {
        let handle = OperationHandle::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            provide(&handle, || panic!("feature failed"));
        }));

        assert!(result.is_err());
        assert!(try_use_operation_state().is_err());
    }

    #[test]
    fn test_clones_share_state() {
        let handle = OperationHandle::default();
        let other = handle.clone();

        other.show_success(Some("Saved."), Vec::new());

        assert!(handle.success().visible);
        assert!(handle.same_store(&other));
    }

    #[test]
    fn test_callback_can_dispatch_through_context() {
        let handle = OperationHandle::default();
        let request = AbortConfirmRequest::new().on_confirm(|| {
            use_operation_state().show_loading(Some("Aborting"));
        });
        handle.show_abort_confirm(request);

        let on_confirm = handle.abort_confirm().on_confirm.unwrap();
        provide(&handle, || on_confirm.invoke());

        assert!(handle.loading().visible);
    }

    #[test]
    fn test_listener_reads_through_handle() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handle = OperationHandle::default();
        let reader = handle.clone();
        let sink = seen.clone();
        handle.subscribe(move |_| sink.borrow_mut().push(reader.loading()));

        handle.show_loading(Some("A"));
        handle.hide_loading();

        assert_eq!(
            *seen.borrow(),
            vec![
                LoadingState::active(Some("A".to_string())),
                LoadingState::inactive()
            ]
        );
    }

    #[test]
    fn test_listener_reads_through_provider() {
        let messages = Rc::new(RefCell::new(Vec::new()));
        let sink = messages.clone();
        let handle = OperationHandle::default();
        handle.subscribe(move |_| {
            let state = use_operation_state().state();
            sink.borrow_mut().push(state.success.message);
        });

        provide(&handle, || {
            use_operation_state().show_success(Some("Saved."), Vec::new());
        });

        assert_eq!(*messages.borrow(), vec![Some("Saved.".to_string())]);
    }

    #[test]
    fn test_listener_may_dispatch_through_handle() {
        let handle = OperationHandle::default();
        let inner = handle.clone();
        handle.subscribe(move |state| {
            if state.success.visible && inner.loading().visible {
                inner.hide_loading();
            }
        });

        handle.show_loading(Some("Saving"));
        handle.show_success(Some("Saved."), Vec::new());

        assert!(!handle.loading().visible);
        assert!(handle.success().visible);
    }
}

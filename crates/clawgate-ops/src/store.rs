use crate::actions::{AbortConfirmAction, Action, LoadingAction, SuccessAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::reduce;
use crate::state::{AbortConfirmRequest, NextStep, OperationState};
use std::fmt;
use std::rc::Rc;
use std::sync::mpsc::Receiver;

/// Identifies a registered subscriber so it can be removed again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&OperationState)>;

/// Transitions applied by one dispatch, waiting to be delivered to listeners
///
/// Holds a snapshot of the listeners and the state after each applied
/// transition, so delivery needs no access to the store.
#[must_use = "listeners are only called by `deliver`"]
pub(crate) struct Notifications {
    listeners: Vec<Listener>,
    states: Vec<OperationState>,
}

impl Notifications {
    /// Call every listener with every applied state, in order
    pub(crate) fn deliver(self) {
        for state in &self.states {
            for listener in &self.listeners {
                listener(state);
            }
        }
    }
}

/// Store - owns the operation state and runs the dispatch loop
///
/// Every mutation goes through [`Store::dispatch`]:
/// - the action passes through the middleware chain
/// - the root reducer builds a complete new state, which replaces the old one
/// - actions queued by middleware are processed the same way
/// - subscribers are notified with the state after each applied transition
///
/// Dispatch never invokes callbacks held in state.
pub struct Store {
    state: OperationState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    pending: Receiver<Action>,
    subscribers: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    pub fn new(initial_state: OperationState) -> Self {
        let (dispatcher, pending) = Dispatcher::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher,
            pending,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &OperationState {
        &self.state
    }

    /// Register a listener called after every applied transition
    ///
    /// Listeners receive the already-updated state, once per applied
    /// transition, after the whole dispatch (follow-ups included) is done.
    pub fn subscribe(&mut self, listener: impl Fn(&OperationState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        self.dispatch_deferred(action).deliver();
    }

    /// Apply an action and its follow-ups without calling any listener
    ///
    /// Callers holding the store behind a `RefCell` release the borrow before
    /// delivering, so listeners may read the state again.
    pub(crate) fn dispatch_deferred(&mut self, action: Action) -> Notifications {
        let mut states = Vec::new();
        self.apply(action, &mut states);
        Notifications {
            listeners: self
                .subscribers
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect(),
            states,
        }
    }

    fn apply(&mut self, action: Action, applied: &mut Vec<OperationState>) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
            if !self.subscribers.is_empty() {
                applied.push(self.state.clone());
            }
        }

        // Process any actions queued by middleware
        let pending: Vec<Action> = self.pending.try_iter().collect();
        for action in pending {
            self.apply(action, applied);
        }
    }

    /// Show the busy overlay; replaces any message already shown
    pub fn show_loading(&mut self, message: Option<&str>) {
        self.dispatch(Action::Loading(LoadingAction::Show {
            message: message.map(str::to_string),
        }));
    }

    /// Hide the busy overlay
    pub fn hide_loading(&mut self) {
        self.dispatch(Action::Loading(LoadingAction::Hide));
    }

    /// Show the success confirmation
    pub fn show_success(&mut self, message: Option<&str>, next_steps: Vec<NextStep>) {
        self.dispatch(Action::Success(SuccessAction::Show {
            message: message.map(str::to_string),
            next_steps,
        }));
    }

    /// Hide the success confirmation
    pub fn hide_success(&mut self) {
        self.dispatch(Action::Success(SuccessAction::Hide));
    }

    /// Show the abort confirmation, capturing the request's callbacks
    pub fn show_abort_confirm(&mut self, request: AbortConfirmRequest) {
        self.dispatch(Action::AbortConfirm(AbortConfirmAction::Show(request)));
    }

    /// Hide the abort confirmation without invoking any callback
    pub fn hide_abort_confirm(&mut self) {
        self.dispatch(Action::AbortConfirm(AbortConfirmAction::Hide));
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(OperationState::default())
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("middleware", &format!("{} middleware", self.middleware.len()))
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LoadingState, SuccessState};
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_show_loading_last_write_wins() {
        let mut store = Store::default();
        store.show_loading(Some("m1"));
        store.show_loading(Some("m2"));

        assert_eq!(
            store.state().loading,
            LoadingState {
                visible: true,
                message: Some("m2".to_string()),
            }
        );
    }

    #[test]
    fn test_hide_loading_after_shows() {
        let mut store = Store::default();
        store.show_loading(Some("m1"));
        store.show_loading(None);
        store.show_loading(Some("m3"));
        store.hide_loading();

        assert_eq!(store.state().loading, LoadingState::inactive());
    }

    #[test]
    fn test_success_scenario() {
        let mut store = Store::default();
        store.show_success(Some("Saved."), vec![NextStep::link("View", "/item/1")]);

        assert_eq!(
            store.state().success,
            SuccessState {
                visible: true,
                message: Some("Saved.".to_string()),
                next_steps: vec![NextStep::link("View", "/item/1")],
            }
        );

        store.hide_success();
        assert_eq!(store.state().success, SuccessState::inactive());
    }

    #[test]
    fn test_show_loading_leaves_other_slices_unchanged() {
        let mut store = Store::default();
        store.show_success(Some("Saved."), Vec::new());
        store.show_abort_confirm(AbortConfirmRequest::new().message("Stop?"));
        let before = store.state().clone();

        store.show_loading(Some("A"));

        assert_eq!(store.state().success, before.success);
        assert_eq!(store.state().abort_confirm, before.abort_confirm);
    }

    #[test]
    fn test_invoking_stored_confirm_does_not_hide() {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let mut store = Store::default();
        store.show_abort_confirm(
            AbortConfirmRequest::new().on_confirm(move || counter.set(counter.get() + 1)),
        );

        let on_confirm = store.state().abort_confirm.on_confirm.clone().unwrap();
        on_confirm.invoke();

        assert_eq!(fired.get(), 1);
        assert!(store.state().abort_confirm.visible);
    }

    #[test]
    fn test_dispatch_never_invokes_callbacks() {
        let fired = Rc::new(Cell::new(false));
        let (c, x) = (fired.clone(), fired.clone());
        let mut store = Store::default();

        store.show_abort_confirm(
            AbortConfirmRequest::new()
                .on_confirm(move || c.set(true))
                .on_cancel(move || x.set(true)),
        );
        store.show_success(None, vec![NextStep::callback("Undo", {
            let f = fired.clone();
            move || f.set(true)
        })]);
        store.hide_abort_confirm();
        store.hide_success();

        assert!(!fired.get());
    }

    #[test]
    fn test_subscribers_see_updated_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut store = Store::default();
        store.subscribe(move |state| {
            sink.borrow_mut()
                .push((state.loading.visible, state.loading.message.clone()))
        });

        store.show_loading(Some("A"));
        store.hide_loading();

        assert_eq!(
            *seen.borrow(),
            vec![(true, Some("A".to_string())), (false, None)]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let mut store = Store::default();
        let id = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.show_loading(None);
        assert!(store.unsubscribe(id));
        store.hide_loading();

        assert_eq!(hits.get(), 1);
        assert!(!store.unsubscribe(id));
    }

    struct HideSuccessOnLoading;

    impl Middleware for HideSuccessOnLoading {
        fn handle(&mut self, action: &Action, state: &OperationState, dispatcher: &Dispatcher) -> bool {
            if matches!(action, Action::Loading(LoadingAction::Show { .. })) && state.success.visible {
                dispatcher.dispatch(Action::Success(SuccessAction::Hide));
            }
            true
        }
    }

    struct SwallowNone;

    impl Middleware for SwallowNone {
        fn handle(&mut self, action: &Action, _state: &OperationState, _dispatcher: &Dispatcher) -> bool {
            !matches!(action, Action::None)
        }
    }

    #[test]
    fn test_middleware_follow_ups_run_before_dispatch_returns() {
        let mut store = Store::default();
        store.add_middleware(Box::new(HideSuccessOnLoading));
        store.show_success(Some("Saved."), Vec::new());

        store.show_loading(Some("Next"));

        assert!(store.state().loading.visible);
        assert!(!store.state().success.visible);
    }

    #[test]
    fn test_listeners_see_each_follow_up_transition() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut store = Store::default();
        store.add_middleware(Box::new(HideSuccessOnLoading));
        store.show_success(Some("Saved."), Vec::new());
        store.subscribe(move |state| {
            sink.borrow_mut()
                .push((state.loading.visible, state.success.visible))
        });

        store.show_loading(Some("Next"));

        assert_eq!(*seen.borrow(), vec![(true, true), (true, false)]);
    }

    #[test]
    fn test_consumed_action_does_not_notify() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let mut store = Store::default();
        store.add_middleware(Box::new(SwallowNone));
        store.subscribe(move |_| counter.set(counter.get() + 1));

        store.dispatch(Action::None);
        assert_eq!(hits.get(), 0);

        store.hide_loading();
        assert_eq!(hits.get(), 1);
    }
}

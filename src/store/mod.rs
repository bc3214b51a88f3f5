//! Reducer-style state updates + side-effect commands.
//!
//! [`Store::dispatch`] is the only place state changes. Reducers return
//! [`Command`]s; the runtime turns each into a tokio task that answers with
//! exactly one follow-up [`Action`] on the store's channel.

mod action;
mod command;
mod reducer;
mod runtime;
pub mod selectors;
mod state;

pub use action::{Action, ApplicationsAction, AuthAction, FavoritesAction, NavigationAction};
pub use command::Command;
pub use selectors::AuthPhase;
pub use state::{
    AppState, ApplicationsState, AuthState, FavoritesState, NavigationState, Route,
};

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::domain::SessionStorage;
use crate::infra::api::Gateways;
use runtime::EffectContext;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AppState) + Send>;
/// Re-evaluates one live selection; `false` once every receiver is gone.
type Selection = Box<dyn FnMut(&AppState) -> bool + Send>;

pub struct Store {
    state: Arc<AppState>,
    ctx: EffectContext,
    action_rx: mpsc::UnboundedReceiver<Action>,
    snapshot_tx: watch::Sender<Arc<AppState>>,
    listeners: Vec<(SubscriptionId, Listener)>,
    selections: Vec<Selection>,
    next_subscription: u64,
    in_flight: usize,
    session_resumed: bool,
}

impl Store {
    pub fn new(gateways: Gateways, session: Arc<dyn SessionStorage>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let state = Arc::new(AppState::default());
        let (snapshot_tx, _) = watch::channel(state.clone());
        Self {
            state,
            ctx: EffectContext::new(gateways, session, action_tx),
            action_rx,
            snapshot_tx,
            listeners: Vec::new(),
            selections: Vec::new(),
            next_subscription: 0,
            in_flight: 0,
            session_resumed: false,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> Arc<AppState> {
        self.state.clone()
    }

    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        selector(&self.state)
    }

    /// A receiver for one projection of the state. It is re-evaluated after
    /// every state change and only marked changed when the value differs.
    pub fn select_live<T>(
        &mut self,
        selector: impl Fn(&AppState) -> T + Send + 'static,
    ) -> watch::Receiver<T>
    where
        T: PartialEq + Send + Sync + 'static,
    {
        let (tx, rx) = watch::channel(selector(&self.state));
        self.selections.push(Box::new(move |state| {
            let next = selector(state);
            tx.send_if_modified(|current| {
                if *current == next {
                    return false;
                }
                *current = next;
                true
            });
            !tx.is_closed()
        }));
        rx
    }

    /// A receiver that observes every snapshot that differs from the last.
    pub fn watch(&self) -> watch::Receiver<Arc<AppState>> {
        self.snapshot_tx.subscribe()
    }

    /// Registers a listener called after each dispatch that changes state.
    /// Listeners run in registration order.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&AppState) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Effects started but not yet answered.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn dispatch(&mut self, action: Action) {
        let name = action.name();
        log::debug!("dispatch {name}");
        let commands = reducer::reduce(Arc::make_mut(&mut self.state), action);
        self.publish();

        if !commands.is_empty() {
            log::debug!("{name}: starting {} effect(s)", commands.len());
        }
        for command in commands {
            self.in_flight += 1;
            runtime::run(&self.ctx, command);
        }
    }

    /// Dispatches every follow-up action already waiting, without blocking.
    pub fn drain_ready(&mut self) -> bool {
        let mut any = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.complete(action);
            any = true;
        }
        any
    }

    /// Waits for the next follow-up action and dispatches it. Returns `false`
    /// when nothing is in flight.
    pub async fn process_next(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.action_rx.recv().await {
            Some(action) => {
                self.complete(action);
                true
            }
            None => false,
        }
    }

    /// Drives effects, including the ones they trigger, until none remain.
    pub async fn run_until_idle(&mut self) {
        while self.process_next().await {}
    }

    /// Restores a persisted user once per store. Returns whether a user was
    /// found.
    pub fn resume_session(&mut self) -> bool {
        if self.session_resumed {
            return false;
        }
        self.session_resumed = true;

        match self.ctx.session.load_user() {
            Some(user) => {
                log::info!("Resuming session for user {}", user.id);
                self.dispatch(AuthAction::LoadUserFromStorage { user }.into());
                true
            }
            None => false,
        }
    }

    /// Requests a page and returns where the guards actually put the user.
    pub fn navigate(&mut self, route: Route) -> Route {
        self.dispatch(NavigationAction::Navigate(route).into());
        self.state.navigation.current
    }

    fn complete(&mut self, action: Action) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.dispatch(action);
    }

    fn publish(&mut self) {
        let snapshot = &self.state;
        let changed = self.snapshot_tx.send_if_modified(|current| {
            if **current == **snapshot {
                return false;
            }
            *current = snapshot.clone();
            true
        });

        if changed {
            self.selections.retain_mut(|selection| selection(&**snapshot));
            for (_, listener) in &mut self.listeners {
                listener(&**snapshot);
            }
        }
    }
}

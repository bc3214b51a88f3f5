pub mod applications;
pub mod auth;
pub mod favorites;


use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;

use super::action::{
    Action, ApplicationsAction, AuthAction, FavoritesAction, NavigationAction,
};
use super::command::Command;
use super::state::Route;
use crate::domain::SessionStorage;
use crate::infra::api::Gateways;

/// Builds the follow-up action for an effect task that panicked.
type PanicFallback = fn(String) -> Action;

/// Everything an effect needs: the gateways, session storage, and the
/// channel its follow-up action goes back on.
#[derive(Clone)]
pub struct EffectContext {
    pub gateways: Gateways,
    pub session: Arc<dyn SessionStorage>,
    pub action_tx: mpsc::UnboundedSender<Action>,
    on_panic: Option<PanicFallback>,
}

impl EffectContext {
    pub fn new(
        gateways: Gateways,
        session: Arc<dyn SessionStorage>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            gateways,
            session,
            action_tx,
            on_panic: None,
        }
    }

    /// Runs `effect` on the tokio runtime and posts the action it resolves to.
    /// A panicking effect still answers, with the failure its command maps to.
    pub(super) fn spawn<F>(&self, effect: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        let action_tx = self.action_tx.clone();
        let on_panic = self.on_panic;
        tokio::spawn(async move {
            let action = match tokio::spawn(effect).await {
                Ok(action) => action,
                Err(e) => {
                    log::error!("effect task failed: {e}");
                    match on_panic {
                        Some(fallback) => fallback(format!("Effect failed: {e}")),
                        None => return,
                    }
                }
            };
            post_on(&action_tx, action);
        });
    }

    pub(super) fn post(&self, action: Action) {
        post_on(&self.action_tx, action);
    }
}

fn post_on(action_tx: &mpsc::UnboundedSender<Action>, action: Action) {
    let name = action.name();
    if action_tx.send(action).is_err() {
        log::error!("store is gone, dropping follow-up action {name}");
    }
}

fn panic_fallback(command: &Command) -> Option<PanicFallback> {
    let fallback: PanicFallback = match command {
        Command::Login(_) => |error| AuthAction::LoginFailure { error }.into(),
        Command::Register(_) => |error| AuthAction::RegisterFailure { error }.into(),
        Command::UpdateProfile { .. } => |error| AuthAction::UpdateProfileFailure { error }.into(),
        Command::ClearSession => |_| NavigationAction::Navigate(Route::Login).into(),
        Command::Navigate(_) => return None,
        Command::LoadFavorites { .. } => |error| FavoritesAction::LoadFailure { error }.into(),
        Command::AddFavorite { .. } => |error| FavoritesAction::AddFailure { error }.into(),
        Command::RemoveFavorite { .. } => |error| FavoritesAction::RemoveFailure { error }.into(),
        Command::LoadApplications { .. } => {
            |error| ApplicationsAction::LoadFailure { error }.into()
        }
        Command::AddApplication { .. } => |error| ApplicationsAction::AddFailure { error }.into(),
        Command::UpdateApplicationNotes { .. } => {
            |error| ApplicationsAction::UpdateNotesFailure { error }.into()
        }
        Command::UpdateApplicationStatus { .. } => {
            |error| ApplicationsAction::UpdateStatusFailure { error }.into()
        }
        Command::RemoveApplication { .. } => {
            |error| ApplicationsAction::RemoveFailure { error }.into()
        }
    };
    Some(fallback)
}

pub fn run(ctx: &EffectContext, command: Command) {
    let ctx = &EffectContext {
        on_panic: panic_fallback(&command),
        ..ctx.clone()
    };
    match command {
        Command::Login(credentials) => auth::login(ctx, credentials),
        Command::Register(request) => auth::register(ctx, request),
        Command::UpdateProfile { user_id, changes } => {
            auth::update_profile(ctx, user_id, changes)
        }
        Command::ClearSession => auth::clear_session(ctx),
        Command::Navigate(route) => ctx.post(NavigationAction::Navigate(route).into()),
        Command::LoadFavorites { user_id } => favorites::load(ctx, user_id),
        Command::AddFavorite { favorite } => favorites::add(ctx, favorite),
        Command::RemoveFavorite { id } => favorites::remove(ctx, id),
        Command::LoadApplications { user_id } => applications::load(ctx, user_id),
        Command::AddApplication { application } => applications::add(ctx, application),
        Command::UpdateApplicationNotes { id, notes, seq } => {
            applications::update_notes(ctx, id, notes, seq)
        }
        Command::UpdateApplicationStatus { id, status, seq } => {
            applications::update_status(ctx, id, status, seq)
        }
        Command::RemoveApplication { id } => applications::remove(ctx, id),
    }
}

//! Read-only projections over [`AppState`].

use std::collections::BTreeMap;

use super::state::AppState;
use crate::domain::{Application, ApplicationStatus, FavoriteOffer, RecordId, UserResponse};

/// The auth slice seen as a four-state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Anonymous,
    Authenticating,
    Authenticated,
    Failed,
}

pub fn current_user(state: &AppState) -> Option<&UserResponse> {
    state.auth.user.as_ref()
}

pub fn is_authenticated(state: &AppState) -> bool {
    state.auth.is_authenticated
}

pub fn auth_loading(state: &AppState) -> bool {
    state.auth.loading
}

pub fn auth_error(state: &AppState) -> Option<&str> {
    state.auth.error.as_deref()
}

pub fn auth_phase(state: &AppState) -> AuthPhase {
    let auth = &state.auth;
    if auth.loading {
        AuthPhase::Authenticating
    } else if auth.is_authenticated {
        AuthPhase::Authenticated
    } else if auth.error.is_some() {
        AuthPhase::Failed
    } else {
        AuthPhase::Anonymous
    }
}

pub fn favorites(state: &AppState) -> &[FavoriteOffer] {
    &state.favorites.favorites
}

pub fn favorites_loading(state: &AppState) -> bool {
    state.favorites.loading
}

pub fn favorites_error(state: &AppState) -> Option<&str> {
    state.favorites.error.as_deref()
}

/// Whether the offer is already among the user's favorites.
pub fn is_favorite(state: &AppState, offer_id: &str) -> bool {
    state
        .favorites
        .favorites
        .iter()
        .any(|f| f.offer_id == offer_id)
}

pub fn applications(state: &AppState) -> &[Application] {
    &state.applications.applications
}

pub fn applications_loading(state: &AppState) -> bool {
    state.applications.loading
}

pub fn applications_error(state: &AppState) -> Option<&str> {
    state.applications.error.as_deref()
}

pub fn applications_by_status(state: &AppState, status: ApplicationStatus) -> Vec<&Application> {
    state
        .applications
        .applications
        .iter()
        .filter(|a| a.status == status)
        .collect()
}

pub fn application_by_id(state: &AppState, id: RecordId) -> Option<&Application> {
    state
        .applications
        .applications
        .iter()
        .find(|a| a.id == Some(id))
}

pub fn applications_count(state: &AppState) -> usize {
    state.applications.applications.len()
}

/// Whether an application already tracks the offer.
pub fn is_tracked(state: &AppState, offer_id: &str) -> bool {
    state
        .applications
        .applications
        .iter()
        .any(|a| a.offer_id == offer_id)
}

/// Tally per status, every status present (zero when unused).
pub fn status_counts(state: &AppState) -> BTreeMap<ApplicationStatus, usize> {
    let mut counts: BTreeMap<_, _> = ApplicationStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for application in &state.applications.applications {
        *counts.entry(application.status).or_default() += 1;
    }
    counts
}

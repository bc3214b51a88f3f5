use std::sync::Arc;

use super::super::action::{AuthAction, NavigationAction};
use super::super::state::Route;
use super::EffectContext;
use crate::domain::{
    GatewayError, LoginRequest, RecordId, RegisterRequest, SessionStorage, UpdateProfileRequest,
    UserResponse, find_by_credentials,
};

/// Upper bound (exclusive) for client-generated user ids.
const MAX_GENERATED_USER_ID: RecordId = 10_000;

pub fn login(ctx: &EffectContext, credentials: LoginRequest) {
    let gateway = ctx.gateways.auth.clone();
    let session = ctx.session.clone();

    ctx.spawn(async move {
        let result = gateway.list_users().await.and_then(|users| {
            find_by_credentials(users, &credentials).ok_or(GatewayError::InvalidCredentials)
        });
        match result {
            Ok(user) => {
                persist(session.clone(), &user).await;
                AuthAction::LoginSuccess { user }.into()
            }
            Err(e) => AuthAction::LoginFailure {
                error: e.to_string(),
            }
            .into(),
        }
    });
}

pub fn register(ctx: &EffectContext, request: RegisterRequest) {
    let gateway = ctx.gateways.auth.clone();
    let session = ctx.session.clone();
    let user = request.into_user(rand::random_range(0..MAX_GENERATED_USER_ID));

    ctx.spawn(async move {
        match gateway.create_user(&user).await {
            Ok(created) => {
                let user = created.into_response();
                persist(session.clone(), &user).await;
                AuthAction::RegisterSuccess { user }.into()
            }
            Err(e) => AuthAction::RegisterFailure {
                error: e.to_string(),
            }
            .into(),
        }
    });
}

pub fn update_profile(ctx: &EffectContext, user_id: RecordId, changes: UpdateProfileRequest) {
    let gateway = ctx.gateways.auth.clone();
    let session = ctx.session.clone();

    ctx.spawn(async move {
        match gateway.update_user(user_id, &changes).await {
            Ok(updated) => {
                let user = updated.into_response();
                persist(session.clone(), &user).await;
                AuthAction::UpdateProfileSuccess { user }.into()
            }
            Err(e) => AuthAction::UpdateProfileFailure {
                error: e.to_string(),
            }
            .into(),
        }
    });
}

/// Forgets the persisted user, then sends the user to the login page.
pub fn clear_session(ctx: &EffectContext) {
    let session = ctx.session.clone();

    ctx.spawn(async move {
        match tokio::task::spawn_blocking(move || session.clear()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => log::warn!("Failed to clear session: {e}"),
            Err(e) => log::warn!("Session clear task failed: {e}"),
        }
        NavigationAction::Navigate(Route::Login).into()
    });
}

/// Writes the user to session storage off the async workers.
async fn persist(session: Arc<dyn SessionStorage>, user: &UserResponse) {
    let id = user.id;
    let user = user.clone();
    match tokio::task::spawn_blocking(move || session.save_user(&user)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => log::warn!("Failed to persist session for user {id}: {e}"),
        Err(e) => log::warn!("Session persist task failed for user {id}: {e}"),
    }
}

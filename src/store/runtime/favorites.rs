use super::super::action::FavoritesAction;
use super::EffectContext;
use crate::domain::{FavoriteOffer, RecordId};

pub fn load(ctx: &EffectContext, user_id: RecordId) {
    let gateway = ctx.gateways.favorites.clone();
    ctx.spawn(async move {
        match gateway.list_favorites(user_id).await {
            Ok(favorites) => FavoritesAction::LoadSuccess { favorites }.into(),
            Err(e) => FavoritesAction::LoadFailure {
                error: e.to_string(),
            }
            .into(),
        }
    });
}

pub fn add(ctx: &EffectContext, favorite: FavoriteOffer) {
    let gateway = ctx.gateways.favorites.clone();
    ctx.spawn(async move {
        match gateway.add_favorite(&favorite).await {
            Ok(favorite) => FavoritesAction::AddSuccess { favorite }.into(),
            Err(e) => FavoritesAction::AddFailure {
                error: e.to_string(),
            }
            .into(),
        }
    });
}

pub fn remove(ctx: &EffectContext, id: RecordId) {
    let gateway = ctx.gateways.favorites.clone();
    ctx.spawn(async move {
        match gateway.remove_favorite(id).await {
            Ok(()) => FavoritesAction::RemoveSuccess { id }.into(),
            Err(e) => FavoritesAction::RemoveFailure {
                error: e.to_string(),
            }
            .into(),
        }
    });
}

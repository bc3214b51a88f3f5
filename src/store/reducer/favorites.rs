use super::super::action::FavoritesAction;
use super::super::command::Command;
use super::super::state::FavoritesState;

pub fn reduce(state: &mut FavoritesState, action: FavoritesAction) -> Vec<Command> {
    match action {
        FavoritesAction::Load { user_id } => {
            begin(state);
            vec![Command::LoadFavorites { user_id }]
        }
        FavoritesAction::LoadSuccess { favorites } => {
            state.favorites = favorites;
            settle(state);
            Vec::new()
        }
        FavoritesAction::Add { favorite } => {
            begin(state);
            vec![Command::AddFavorite { favorite }]
        }
        FavoritesAction::AddSuccess { favorite } => {
            state.favorites.push(favorite);
            settle(state);
            Vec::new()
        }
        FavoritesAction::Remove { id } => {
            begin(state);
            vec![Command::RemoveFavorite { id }]
        }
        FavoritesAction::RemoveSuccess { id } => {
            state.favorites.retain(|f| f.id != Some(id));
            settle(state);
            Vec::new()
        }
        FavoritesAction::LoadFailure { error }
        | FavoritesAction::AddFailure { error }
        | FavoritesAction::RemoveFailure { error } => {
            state.loading = false;
            state.error = Some(error);
            Vec::new()
        }
    }
}

fn begin(state: &mut FavoritesState) {
    state.loading = true;
    state.error = None;
}

fn settle(state: &mut FavoritesState) {
    state.loading = false;
    state.error = None;
}

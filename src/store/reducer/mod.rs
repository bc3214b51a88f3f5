pub mod applications;
pub mod auth;
pub mod favorites;
pub mod navigation;

use super::action::Action;
use super::command::Command;
use super::state::AppState;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Auth(action) => auth::reduce(&mut state.auth, action),
        Action::Favorites(action) => favorites::reduce(&mut state.favorites, action),
        Action::Applications(action) => applications::reduce(&mut state.applications, action),
        Action::Navigation(action) => {
            navigation::reduce(&mut state.navigation, &state.auth, action)
        }
    }
}

use super::super::action::NavigationAction;
use super::super::command::Command;
use super::super::state::{AuthState, NavigationState, Route};

pub fn reduce(
    state: &mut NavigationState,
    auth: &AuthState,
    action: NavigationAction,
) -> Vec<Command> {
    match action {
        NavigationAction::Navigate(requested) => {
            let destination = guard(requested, auth.is_authenticated);
            state.redirected_from = (destination != requested).then_some(requested);
            state.current = destination;
            Vec::new()
        }
    }
}

/// Where a request for `requested` actually lands.
pub fn guard(requested: Route, is_authenticated: bool) -> Route {
    if requested.requires_auth() && !is_authenticated {
        log::debug!("{requested} requires a signed-in user, redirecting to login");
        return Route::Login;
    }
    if requested.visitor_only() && is_authenticated {
        return Route::Home;
    }
    requested
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_pages_redirect_visitors_to_login() {
        for route in [Route::Favorites, Route::Applications, Route::Profile] {
            assert_eq!(guard(route, false), Route::Login);
            assert_eq!(guard(route, true), route);
        }
    }

    #[test]
    fn register_is_hidden_from_signed_in_users() {
        assert_eq!(guard(Route::Register, true), Route::Home);
        assert_eq!(guard(Route::Register, false), Route::Register);
    }

    #[test]
    fn public_pages_pass_through() {
        for route in [Route::Home, Route::Jobs, Route::Login] {
            assert_eq!(guard(route, false), route);
            assert_eq!(guard(route, true), route);
        }
    }

    #[test]
    fn redirect_is_recorded() {
        let mut state = NavigationState::default();
        let auth = AuthState::default();
        reduce(
            &mut state,
            &auth,
            NavigationAction::Navigate(Route::Favorites),
        );
        assert_eq!(state.current, Route::Login);
        assert_eq!(state.redirected_from, Some(Route::Favorites));

        reduce(
            &mut state,
            &auth,
            NavigationAction::Navigate(Route::Jobs),
        );
        assert_eq!(state.current, Route::Jobs);
        assert_eq!(state.redirected_from, None);
    }
}

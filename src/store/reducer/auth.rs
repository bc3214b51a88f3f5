use super::super::action::AuthAction;
use super::super::command::Command;
use super::super::state::{AuthState, Route};

pub fn reduce(state: &mut AuthState, action: AuthAction) -> Vec<Command> {
    match action {
        AuthAction::Login(credentials) => {
            begin(state);
            vec![Command::Login(credentials)]
        }
        AuthAction::Register(request) => {
            begin(state);
            vec![Command::Register(request)]
        }
        AuthAction::LoginSuccess { user } | AuthAction::RegisterSuccess { user } => {
            state.user = Some(user);
            state.is_authenticated = true;
            state.loading = false;
            state.error = None;
            vec![Command::Navigate(Route::Home)]
        }
        AuthAction::LoginFailure { error }
        | AuthAction::RegisterFailure { error }
        | AuthAction::UpdateProfileFailure { error } => {
            state.loading = false;
            state.error = Some(error);
            Vec::new()
        }
        AuthAction::UpdateProfile { user_id, changes } => {
            begin(state);
            vec![Command::UpdateProfile { user_id, changes }]
        }
        AuthAction::UpdateProfileSuccess { user } => {
            state.user = Some(user);
            state.loading = false;
            state.error = None;
            Vec::new()
        }
        AuthAction::Logout => {
            *state = AuthState::default();
            vec![Command::ClearSession]
        }
        AuthAction::LoadUserFromStorage { user } => {
            state.user = Some(user);
            state.is_authenticated = true;
            state.loading = false;
            state.error = None;
            Vec::new()
        }
    }
}

fn begin(state: &mut AuthState) {
    state.loading = true;
    state.error = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LoginRequest, UpdateProfileRequest, UserResponse};

    fn user() -> UserResponse {
        UserResponse {
            id: 1,
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.com".into(),
        }
    }

    fn signed_in() -> AuthState {
        AuthState {
            user: Some(user()),
            error: None,
            loading: false,
            is_authenticated: true,
        }
    }

    #[test]
    fn login_starts_loading_and_requests_effect() {
        let mut state = AuthState {
            error: Some("old".into()),
            ..AuthState::default()
        };
        let credentials = LoginRequest {
            email: "a@b.com".into(),
            password: "x".into(),
        };
        let commands = reduce(&mut state, AuthAction::Login(credentials.clone()));
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert!(!state.is_authenticated);
        assert_eq!(commands, vec![Command::Login(credentials)]);
    }

    #[test]
    fn login_success_authenticates_and_navigates_home() {
        let mut state = AuthState {
            loading: true,
            ..AuthState::default()
        };
        let commands = reduce(&mut state, AuthAction::LoginSuccess { user: user() });
        assert_eq!(state, signed_in());
        assert_eq!(commands, vec![Command::Navigate(Route::Home)]);
    }

    #[test]
    fn failure_stops_loading_and_keeps_anonymous() {
        let mut state = AuthState {
            loading: true,
            ..AuthState::default()
        };
        reduce(
            &mut state,
            AuthAction::LoginFailure {
                error: "Invalid credentials".into(),
            },
        );
        assert!(!state.loading);
        assert!(!state.is_authenticated);
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn logout_clears_user_and_session() {
        let mut state = signed_in();
        let commands = reduce(&mut state, AuthAction::Logout);
        assert_eq!(state, AuthState::default());
        assert_eq!(commands, vec![Command::ClearSession]);
    }

    #[test]
    fn load_from_storage_authenticates_regardless_of_prior_state() {
        for prior in [
            AuthState::default(),
            AuthState {
                loading: true,
                error: Some("boom".into()),
                ..AuthState::default()
            },
            signed_in(),
        ] {
            let mut state = prior;
            let commands = reduce(&mut state, AuthAction::LoadUserFromStorage { user: user() });
            assert!(commands.is_empty());
            assert_eq!(state, signed_in());
        }
    }

    #[test]
    fn profile_update_replaces_user_but_keeps_session() {
        let mut state = signed_in();
        let changes = UpdateProfileRequest {
            first_name: "Z".into(),
            last_name: "Y".into(),
            email: "z@y.com".into(),
        };
        let commands = reduce(
            &mut state,
            AuthAction::UpdateProfile {
                user_id: 1,
                changes: changes.clone(),
            },
        );
        assert!(state.loading);
        assert_eq!(
            commands,
            vec![Command::UpdateProfile {
                user_id: 1,
                changes
            }]
        );

        let mut updated = user();
        updated.first_name = "Z".into();
        reduce(
            &mut state,
            AuthAction::UpdateProfileSuccess {
                user: updated.clone(),
            },
        );
        assert!(state.is_authenticated);
        assert!(!state.loading);
        assert_eq!(state.user, Some(updated));
    }
}

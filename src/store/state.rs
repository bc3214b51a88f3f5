use std::collections::HashMap;
use std::fmt;

use crate::domain::{Application, FavoriteOffer, RecordId, UserResponse};

/// One immutable snapshot of everything the client knows.
///
/// Each slice is owned by exactly one reducer; the root reducer only reads
/// across slices (route guards), never writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub auth: AuthState,
    pub favorites: FavoritesState,
    pub applications: ApplicationsState,
    pub navigation: NavigationState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub error: Option<String>,
    pub loading: bool,
    pub is_authenticated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesState {
    pub favorites: Vec<FavoriteOffer>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationsState {
    pub applications: Vec<Application>,
    pub loading: bool,
    pub error: Option<String>,
    /// Next sequence number handed to a notes/status update.
    pub next_update_seq: u64,
    /// Latest update sequence issued per application id. A response carrying
    /// an older sequence for the same id is not merged.
    pub latest_update: HashMap<RecordId, u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current: Route,
    /// Set when a guard sent the user somewhere other than requested.
    pub redirected_from: Option<Route>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Jobs,
    Login,
    Register,
    Favorites,
    Applications,
    Profile,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Jobs => "/jobs",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Favorites => "/favorites",
            Self::Applications => "/applications",
            Self::Profile => "/profile",
        }
    }

    /// Pages that only make sense for a signed-in user.
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Favorites | Self::Applications | Self::Profile)
    }

    /// Pages hidden from a signed-in user.
    pub fn visitor_only(self) -> bool {
        matches!(self, Self::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

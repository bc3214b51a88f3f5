use crate::domain::{
    Application, ApplicationStatus, FavoriteOffer, LoginRequest, RecordId, RegisterRequest,
    UpdateProfileRequest, UserResponse,
};

use super::state::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Favorites(FavoritesAction),
    Applications(ApplicationsAction),
    Navigation(NavigationAction),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    Login(LoginRequest),
    LoginSuccess { user: UserResponse },
    LoginFailure { error: String },
    Register(RegisterRequest),
    RegisterSuccess { user: UserResponse },
    RegisterFailure { error: String },
    UpdateProfile {
        user_id: RecordId,
        changes: UpdateProfileRequest,
    },
    UpdateProfileSuccess { user: UserResponse },
    UpdateProfileFailure { error: String },
    Logout,
    /// Session resumption: trusted, no network round trip.
    LoadUserFromStorage { user: UserResponse },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FavoritesAction {
    Load { user_id: RecordId },
    LoadSuccess { favorites: Vec<FavoriteOffer> },
    LoadFailure { error: String },
    Add { favorite: FavoriteOffer },
    AddSuccess { favorite: FavoriteOffer },
    AddFailure { error: String },
    Remove { id: RecordId },
    RemoveSuccess { id: RecordId },
    RemoveFailure { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationsAction {
    Load {
        user_id: RecordId,
    },
    LoadSuccess {
        applications: Vec<Application>,
    },
    LoadFailure {
        error: String,
    },
    Add {
        application: Application,
    },
    AddSuccess {
        application: Application,
    },
    AddFailure {
        error: String,
    },
    UpdateNotes {
        id: RecordId,
        notes: String,
    },
    UpdateNotesSuccess {
        application: Application,
        seq: u64,
    },
    UpdateNotesFailure {
        error: String,
    },
    UpdateStatus {
        id: RecordId,
        status: ApplicationStatus,
    },
    UpdateStatusSuccess {
        application: Application,
        seq: u64,
    },
    UpdateStatusFailure {
        error: String,
    },
    Remove {
        id: RecordId,
    },
    RemoveSuccess {
        id: RecordId,
    },
    RemoveFailure {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationAction {
    /// Request a page; route guards may redirect it.
    Navigate(Route),
}

impl Action {
    /// Stable, payload-free name for logs. Payloads may hold passwords.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Auth(action) => match action {
                AuthAction::Login(_) => "[Auth] login",
                AuthAction::LoginSuccess { .. } => "[Auth] login success",
                AuthAction::LoginFailure { .. } => "[Auth] login failure",
                AuthAction::Register(_) => "[Auth] register",
                AuthAction::RegisterSuccess { .. } => "[Auth] register success",
                AuthAction::RegisterFailure { .. } => "[Auth] register failure",
                AuthAction::UpdateProfile { .. } => "[Auth] update profile",
                AuthAction::UpdateProfileSuccess { .. } => "[Auth] update profile success",
                AuthAction::UpdateProfileFailure { .. } => "[Auth] update profile failure",
                AuthAction::Logout => "[Auth] logout",
                AuthAction::LoadUserFromStorage { .. } => "[Auth] load user from storage",
            },
            Action::Favorites(action) => match action {
                FavoritesAction::Load { .. } => "[Favorites] load",
                FavoritesAction::LoadSuccess { .. } => "[Favorites] load success",
                FavoritesAction::LoadFailure { .. } => "[Favorites] load failure",
                FavoritesAction::Add { .. } => "[Favorites] add",
                FavoritesAction::AddSuccess { .. } => "[Favorites] add success",
                FavoritesAction::AddFailure { .. } => "[Favorites] add failure",
                FavoritesAction::Remove { .. } => "[Favorites] remove",
                FavoritesAction::RemoveSuccess { .. } => "[Favorites] remove success",
                FavoritesAction::RemoveFailure { .. } => "[Favorites] remove failure",
            },
            Action::Applications(action) => match action {
                ApplicationsAction::Load { .. } => "[Applications] load",
                ApplicationsAction::LoadSuccess { .. } => "[Applications] load success",
                ApplicationsAction::LoadFailure { .. } => "[Applications] load failure",
                ApplicationsAction::Add { .. } => "[Applications] add",
                ApplicationsAction::AddSuccess { .. } => "[Applications] add success",
                ApplicationsAction::AddFailure { .. } => "[Applications] add failure",
                ApplicationsAction::UpdateNotes { .. } => "[Applications] update notes",
                ApplicationsAction::UpdateNotesSuccess { .. } => {
                    "[Applications] update notes success"
                }
                ApplicationsAction::UpdateNotesFailure { .. } => {
                    "[Applications] update notes failure"
                }
                ApplicationsAction::UpdateStatus { .. } => "[Applications] update status",
                ApplicationsAction::UpdateStatusSuccess { .. } => {
                    "[Applications] update status success"
                }
                ApplicationsAction::UpdateStatusFailure { .. } => {
                    "[Applications] update status failure"
                }
                ApplicationsAction::Remove { .. } => "[Applications] remove",
                ApplicationsAction::RemoveSuccess { .. } => "[Applications] remove success",
                ApplicationsAction::RemoveFailure { .. } => "[Applications] remove failure",
            },
            Action::Navigation(NavigationAction::Navigate(_)) => "[Navigation] navigate",
        }
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<FavoritesAction> for Action {
    fn from(action: FavoritesAction) -> Self {
        Action::Favorites(action)
    }
}

impl From<ApplicationsAction> for Action {
    fn from(action: ApplicationsAction) -> Self {
        Action::Applications(action)
    }
}

impl From<NavigationAction> for Action {
    fn from(action: NavigationAction) -> Self {
        Action::Navigation(action)
    }
}

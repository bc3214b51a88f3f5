use crate::domain::{
    Application, ApplicationStatus, FavoriteOffer, LoginRequest, RecordId, RegisterRequest,
    UpdateProfileRequest,
};

use super::state::Route;

/// Side effects requested by reducers. Each command answers with exactly one
/// follow-up action on the store's channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login(LoginRequest),
    Register(RegisterRequest),
    UpdateProfile {
        user_id: RecordId,
        changes: UpdateProfileRequest,
    },
    /// Forget the persisted session, then go to the login page.
    ClearSession,
    Navigate(Route),
    LoadFavorites {
        user_id: RecordId,
    },
    AddFavorite {
        favorite: FavoriteOffer,
    },
    RemoveFavorite {
        id: RecordId,
    },
    LoadApplications {
        user_id: RecordId,
    },
    AddApplication {
        application: Application,
    },
    UpdateApplicationNotes {
        id: RecordId,
        notes: String,
        seq: u64,
    },
    UpdateApplicationStatus {
        id: RecordId,
        status: ApplicationStatus,
        seq: u64,
    },
    RemoveApplication {
        id: RecordId,
    },
}

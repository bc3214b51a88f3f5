//! Ports the store's effect handlers call through.
//!
//! The reqwest-backed adapters live in `infra::api`; tests substitute
//! in-memory fakes.

use async_trait::async_trait;

use super::application::{Application, ApplicationStatus};
use super::error::{GatewayError, StorageError};
use super::favorite::FavoriteOffer;
use super::offer::{JobSearchParams, JobSearchResult};
use super::user::{RecordId, UpdateProfileRequest, User, UserResponse};

/// `users` resource of the CRUD API.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// `GET /users`, the full collection including passwords.
    async fn list_users(&self) -> Result<Vec<User>, GatewayError>;

    /// `POST /users`.
    async fn create_user(&self, user: &User) -> Result<User, GatewayError>;

    /// `PATCH /users/{id}`.
    async fn update_user(
        &self,
        user_id: RecordId,
        changes: &UpdateProfileRequest,
    ) -> Result<User, GatewayError>;
}

/// `favoritesOffers` resource of the CRUD API.
#[async_trait]
pub trait FavoritesGateway: Send + Sync {
    async fn list_favorites(&self, user_id: RecordId) -> Result<Vec<FavoriteOffer>, GatewayError>;

    async fn add_favorite(&self, favorite: &FavoriteOffer) -> Result<FavoriteOffer, GatewayError>;

    async fn remove_favorite(&self, id: RecordId) -> Result<(), GatewayError>;
}

/// `applications` resource of the CRUD API.
#[async_trait]
pub trait ApplicationsGateway: Send + Sync {
    async fn list_applications(&self, user_id: RecordId)
    -> Result<Vec<Application>, GatewayError>;

    async fn add_application(&self, application: &Application)
    -> Result<Application, GatewayError>;

    async fn update_notes(&self, id: RecordId, notes: &str) -> Result<Application, GatewayError>;

    async fn update_status(
        &self,
        id: RecordId,
        status: ApplicationStatus,
    ) -> Result<Application, GatewayError>;

    async fn remove_application(&self, id: RecordId) -> Result<(), GatewayError>;
}

/// External job listings search.
#[async_trait]
pub trait JobSearchGateway: Send + Sync {
    async fn search_jobs(&self, params: &JobSearchParams) -> Result<JobSearchResult, GatewayError>;
}

/// Synchronous key-value storage holding the resumable session.
pub trait SessionStorage: Send + Sync {
    /// Returns the persisted user, or `None` when absent or unreadable.
    fn load_user(&self) -> Option<UserResponse>;

    fn save_user(&self, user: &UserResponse) -> Result<(), StorageError>;

    /// Removes every session key.
    fn clear(&self) -> Result<(), StorageError>;
}

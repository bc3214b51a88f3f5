//! Adapter for the generic CRUD API (`users`, `favoritesOffers`, `applications`).

use async_trait::async_trait;
use reqwest::{Method, Url};
use serde_json::json;

use super::client::{ApiClient, resource_url};
use crate::domain::{
    Application, ApplicationStatus, ApplicationsGateway, AuthGateway, FavoriteOffer,
    FavoritesGateway, GatewayError, RecordId, UpdateProfileRequest, User,
};

const USERS: &str = "users";
const FAVORITES: &str = "favoritesOffers";
const APPLICATIONS: &str = "applications";

pub struct RestApi {
    http: ApiClient,
    base: Url,
}

impl RestApi {
    pub fn new(http: ApiClient, base: Url) -> Self {
        Self { http, base }
    }

    fn collection(&self, resource: &str) -> Result<Url, GatewayError> {
        resource_url(&self.base, &[resource])
    }

    fn item(&self, resource: &str, id: RecordId) -> Result<Url, GatewayError> {
        resource_url(&self.base, &[resource, id.to_string().as_str()])
    }

    fn for_user(&self, resource: &str, user_id: RecordId) -> Result<Url, GatewayError> {
        let mut url = self.collection(resource)?;
        url.query_pairs_mut()
            .append_pair("userId", &user_id.to_string());
        Ok(url)
    }
}

#[async_trait]
impl AuthGateway for RestApi {
    async fn list_users(&self) -> Result<Vec<User>, GatewayError> {
        self.http.get_json(self.collection(USERS)?).await
    }

    async fn create_user(&self, user: &User) -> Result<User, GatewayError> {
        self.http
            .send_json(Method::POST, self.collection(USERS)?, user)
            .await
    }

    async fn update_user(
        &self,
        user_id: RecordId,
        changes: &UpdateProfileRequest,
    ) -> Result<User, GatewayError> {
        self.http
            .send_json(Method::PATCH, self.item(USERS, user_id)?, changes)
            .await
    }
}

#[async_trait]
impl FavoritesGateway for RestApi {
    async fn list_favorites(&self, user_id: RecordId) -> Result<Vec<FavoriteOffer>, GatewayError> {
        self.http.get_json(self.for_user(FAVORITES, user_id)?).await
    }

    async fn add_favorite(&self, favorite: &FavoriteOffer) -> Result<FavoriteOffer, GatewayError> {
        self.http
            .send_json(Method::POST, self.collection(FAVORITES)?, favorite)
            .await
    }

    async fn remove_favorite(&self, id: RecordId) -> Result<(), GatewayError> {
        self.http.delete(self.item(FAVORITES, id)?).await
    }
}

#[async_trait]
impl ApplicationsGateway for RestApi {
    async fn list_applications(
        &self,
        user_id: RecordId,
    ) -> Result<Vec<Application>, GatewayError> {
        self.http.get_json(self.for_user(APPLICATIONS, user_id)?).await
    }

    async fn add_application(
        &self,
        application: &Application,
    ) -> Result<Application, GatewayError> {
        self.http
            .send_json(Method::POST, self.collection(APPLICATIONS)?, application)
            .await
    }

    async fn update_notes(&self, id: RecordId, notes: &str) -> Result<Application, GatewayError> {
        self.http
            .send_json(
                Method::PATCH,
                self.item(APPLICATIONS, id)?,
                &json!({ "notes": notes }),
            )
            .await
    }

    async fn update_status(
        &self,
        id: RecordId,
        status: ApplicationStatus,
    ) -> Result<Application, GatewayError> {
        self.http
            .send_json(
                Method::PATCH,
                self.item(APPLICATIONS, id)?,
                &json!({ "status": status }),
            )
            .await
    }

    async fn remove_application(&self, id: RecordId) -> Result<(), GatewayError> {
        self.http.delete(self.item(APPLICATIONS, id)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn api() -> RestApi {
        RestApi::new(
            ApiClient::new(Duration::from_secs(1)).unwrap(),
            Url::parse("http://localhost:3000").unwrap(),
        )
    }

    #[test]
    fn user_scoped_listing_uses_query() {
        let url = api().for_user(FAVORITES, 42).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/favoritesOffers?userId=42");
    }

    #[test]
    fn item_urls_carry_the_id() {
        let url = api().item(APPLICATIONS, 5).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/applications/5");
    }
}

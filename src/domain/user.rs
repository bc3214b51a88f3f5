use serde::{Deserialize, Serialize};

/// Identifier of a record stored in the CRUD API.
pub type RecordId = i64;

/// A stored user, including the plaintext password the mock API keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Drops the secret so the record can be kept in client state.
    pub fn into_response(self) -> UserResponse {
        UserResponse {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }

    pub fn matches_credentials(&self, credentials: &LoginRequest) -> bool {
        self.email == credentials.email && self.password == credentials.password
    }
}

/// A user as seen by the client: every field of [`User`] except the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserResponse {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Builds the record posted to the API; the mock backend expects the
    /// client to choose the id.
    pub fn into_user(self, id: RecordId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
        }
    }
}

/// Partial update sent by the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "a@b.com".into(),
            password: "x".into(),
        }
    }

    #[test]
    fn response_json_has_no_password() {
        let json = serde_json::to_value(user().into_response()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn credentials_compare_exactly() {
        let u = user();
        assert!(u.matches_credentials(&LoginRequest {
            email: "a@b.com".into(),
            password: "x".into(),
        }));
        assert!(!u.matches_credentials(&LoginRequest {
            email: "A@b.com".into(),
            password: "x".into(),
        }));
        assert!(!u.matches_credentials(&LoginRequest {
            email: "a@b.com".into(),
            password: "x ".into(),
        }));
    }

    #[test]
    fn display_name_trims_missing_parts() {
        let mut response = user().into_response();
        response.last_name.clear();
        assert_eq!(response.display_name(), "Ada");
    }
}

//! Domain types for jobforsa.
//! Plain records exchanged with the CRUD and job-search APIs, plus the ports
//! the store talks to.

pub mod application;
pub mod error;
pub mod favorite;
pub mod offer;
pub mod ports;
pub mod user;
pub mod validation;

pub use application::*;
pub use error::*;
pub use favorite::*;
pub use offer::*;
pub use ports::*;
pub use user::*;

/// Linear scan for the first user whose email and password both match.
///
/// Plaintext equality against the full collection; this mirrors the mock
/// backend and is not a credential check worth the name.
pub fn find_by_credentials(users: Vec<User>, credentials: &LoginRequest) -> Option<UserResponse> {
    users
        .into_iter()
        .find(|user| user.matches_credentials(credentials))
        .map(User::into_response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Vec<User> {
        vec![
            User {
                id: 1,
                first_name: "A".into(),
                last_name: "B".into(),
                email: "a@b.com".into(),
                password: "x".into(),
            },
            User {
                id: 2,
                first_name: "C".into(),
                last_name: "D".into(),
                email: "c@d.com".into(),
                password: "y".into(),
            },
            User {
                id: 3,
                first_name: "Dup".into(),
                last_name: "E".into(),
                email: "a@b.com".into(),
                password: "x".into(),
            },
        ]
    }

    #[test]
    fn first_match_wins() {
        let found = find_by_credentials(
            seeded(),
            &LoginRequest {
                email: "a@b.com".into(),
                password: "x".into(),
            },
        )
        .unwrap();
        assert_eq!(found.id, 1);
    }

    #[test]
    fn wrong_password_finds_nothing() {
        let found = find_by_credentials(
            seeded(),
            &LoginRequest {
                email: "a@b.com".into(),
                password: "y".into(),
            },
        );
        assert!(found.is_none());
    }
}

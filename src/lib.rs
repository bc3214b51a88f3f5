//! Job search and application tracking client.
//!
//! [`store::Store`] holds the auth, favorites and applications slices and
//! runs their effects against the gateways in [`infra::api`].

pub mod domain;
pub mod infra;
pub mod store;

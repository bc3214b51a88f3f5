//! Infrastructure layer (adapters/implementations).
//!
//! This module contains IO-heavy integrations (HTTP APIs, config file,
//! session storage).

pub mod api;
pub mod app_config;
pub mod session;

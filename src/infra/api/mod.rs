//! HTTP gateways for the CRUD API and the job-search API.

pub mod client;
mod dto;
pub mod jobs;
pub mod rest;

use reqwest::Url;
use std::sync::Arc;

use crate::domain::{
    ApplicationsGateway, AuthGateway, FavoritesGateway, GatewayError, JobSearchGateway,
};
use crate::infra::app_config::AppConfig;

pub use client::{ApiClient, HeaderRule};
pub use jobs::UsaJobsSource;
pub use rest::RestApi;

/// Header USAJobs expects the API key in.
pub const API_KEY_HEADER: &str = "Authorization-Key";

/// The four gateways the store's effects need.
#[derive(Clone)]
pub struct Gateways {
    pub auth: Arc<dyn AuthGateway>,
    pub favorites: Arc<dyn FavoritesGateway>,
    pub applications: Arc<dyn ApplicationsGateway>,
    pub jobs: Arc<dyn JobSearchGateway>,
}

impl Gateways {
    /// Builds reqwest-backed gateways from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, GatewayError> {
        let mut http = ApiClient::new(config.request_timeout())?;
        match config.api_key() {
            Some(key) => {
                http = http.with_header_rule(HeaderRule {
                    url_contains: config.job_search_host.clone(),
                    name: API_KEY_HEADER.to_string(),
                    value: key,
                });
            }
            None => log::warn!("No USAJobs API key configured; searches will be rejected"),
        }

        let base = parse_url("api_base_url", &config.api_base_url)?;
        let endpoint = parse_url("job_search_url", &config.job_search_url)?;
        let rest = Arc::new(RestApi::new(http.clone(), base));

        Ok(Self {
            auth: rest.clone(),
            favorites: rest.clone(),
            applications: rest,
            jobs: Arc::new(UsaJobsSource::new(http, endpoint)),
        })
    }
}

fn parse_url(field: &str, value: &str) -> Result<Url, GatewayError> {
    Url::parse(value).map_err(|e| GatewayError::InvalidRequest(format!("{field}: {e}")))
}

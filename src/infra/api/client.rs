//! Shared reqwest client for every gateway.
//!
//! Owns transport details only: timeouts, per-host header injection, status
//! mapping and JSON decoding.

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::domain::GatewayError;

/// Adds a header to every request whose URL contains `url_contains`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRule {
    pub url_contains: String,
    pub name: String,
    pub value: String,
}

impl HeaderRule {
    pub fn matches(&self, url: &Url) -> bool {
        url.as_str().contains(self.url_contains.as_str())
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    header_rules: Vec<HeaderRule>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            header_rules: Vec::new(),
        })
    }

    pub fn with_header_rule(mut self, rule: HeaderRule) -> Self {
        self.header_rules.push(rule);
        self
    }

    /// Headers the client would attach to a request for `url`.
    pub fn headers_for<'a>(&'a self, url: &'a Url) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.header_rules
            .iter()
            .filter(move |rule| rule.matches(url))
            .map(|rule| (rule.name.as_str(), rule.value.as_str()))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        for (name, value) in self.headers_for(&url) {
            builder = builder.header(name, value);
        }
        builder
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GatewayError> {
        let builder = self.request(Method::GET, url.clone());
        send_json(builder, &url).await
    }

    pub async fn send_json<B, T>(&self, method: Method, url: Url, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method, url.clone()).json(body);
        send_json(builder, &url).await
    }

    pub async fn delete(&self, url: Url) -> Result<(), GatewayError> {
        let response = self
            .request(Method::DELETE, url.clone())
            .send()
            .await
            .map_err(GatewayError::from)?;
        check_status(response.status(), &url)
    }
}

async fn send_json<T: DeserializeOwned>(builder: RequestBuilder, url: &Url) -> Result<T, GatewayError> {
    let response = builder.send().await.map_err(GatewayError::from)?;
    let status = response.status();
    let body = response.bytes().await.map_err(GatewayError::from)?;
    check_status(status, url)?;
    serde_json::from_slice(body.as_ref())
        .map_err(|e| GatewayError::Decode(format!("invalid JSON from {url}: {e}")))
}

fn check_status(status: reqwest::StatusCode, url: &Url) -> Result<(), GatewayError> {
    if status.is_success() {
        return Ok(());
    }
    Err(GatewayError::Status {
        url: url.to_string(),
        status: status.as_u16(),
    })
}

/// Appends path segments to `base`, keeping any path prefix it already has.
pub fn resource_url(base: &Url, segments: &[&str]) -> Result<Url, GatewayError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| GatewayError::InvalidRequest(format!("{base} cannot be a base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

//! USAJobs search adapter.

use async_trait::async_trait;
use reqwest::Url;

use super::client::ApiClient;
use super::dto::UsaJobsResponse;
use crate::domain::{GatewayError, JobSearchGateway, JobSearchParams, JobSearchResult};

pub struct UsaJobsSource {
    http: ApiClient,
    endpoint: Url,
}

impl UsaJobsSource {
    pub fn new(http: ApiClient, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// Translates the generic query into USAJobs parameter names.
    pub fn search_url(&self, params: &JobSearchParams) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            if let Some(keyword) = params.keyword.as_deref().filter(|k| !k.is_empty()) {
                query.append_pair("Keyword", keyword);
            }
            if let Some(location) = params.location.as_deref().filter(|l| !l.is_empty()) {
                query.append_pair("LocationName", location);
            }
            query.append_pair("Page", &params.page().to_string());
            query.append_pair("ResultsPerPage", &params.results_per_page().to_string());
        }
        url
    }
}

#[async_trait]
impl JobSearchGateway for UsaJobsSource {
    async fn search_jobs(&self, params: &JobSearchParams) -> Result<JobSearchResult, GatewayError> {
        let url = self.search_url(params);
        log::debug!("searching jobs: {url}");
        let response: UsaJobsResponse = self.http.get_json(url).await?;
        Ok(response.into_search_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn source() -> UsaJobsSource {
        UsaJobsSource::new(
            ApiClient::new(Duration::from_secs(1)).unwrap(),
            Url::parse("https://data.usajobs.gov/api/Search").unwrap(),
        )
    }

    #[test]
    fn defaults_page_and_size() {
        let url = source().search_url(&JobSearchParams::default());
        assert_eq!(
            url.as_str(),
            "https://data.usajobs.gov/api/Search?Page=1&ResultsPerPage=4"
        );
    }

    #[test]
    fn maps_keyword_and_location() {
        let url = source().search_url(&JobSearchParams {
            keyword: Some("park ranger".into()),
            location: Some("Denver, CO".into()),
            page: Some(2),
            results_per_page: Some(6),
        });
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Keyword".to_string(), "park ranger".to_string()),
                ("LocationName".to_string(), "Denver, CO".to_string()),
                ("Page".to_string(), "2".to_string()),
                ("ResultsPerPage".to_string(), "6".to_string()),
            ]
        );
    }
}

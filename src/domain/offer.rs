use serde::{Deserialize, Serialize};

/// Results per page when a caller does not ask for a specific size.
pub const DEFAULT_RESULTS_PER_PAGE: u32 = 4;

/// A single listing returned by the job-search API, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOffer {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Publication date exactly as the API reports it.
    pub date: String,
    pub description: String,
    pub salary: Option<String>,
    pub url: Option<String>,
}

impl JobOffer {
    /// First letter of the company name, used as an avatar placeholder.
    pub fn company_initial(&self) -> char {
        self.company
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('C')
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSearchParams {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub page: Option<u32>,
    pub results_per_page: Option<u32>,
}

impl JobSearchParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    pub fn results_per_page(&self) -> u32 {
        self.results_per_page.unwrap_or(DEFAULT_RESULTS_PER_PAGE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSearchResult {
    pub jobs: Vec<JobOffer>,
    pub total_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_default_to_first_page_of_four() {
        let params = JobSearchParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.results_per_page(), 4);

        let params = JobSearchParams {
            page: Some(3),
            results_per_page: Some(10),
            ..Default::default()
        };
        assert_eq!(params.page(), 3);
        assert_eq!(params.results_per_page(), 10);
    }

    #[test]
    fn company_initial_falls_back() {
        let mut offer = JobOffer {
            id: "1".into(),
            title: "T".into(),
            company: "nasa".into(),
            location: String::new(),
            date: String::new(),
            description: String::new(),
            salary: None,
            url: None,
        };
        assert_eq!(offer.company_initial(), 'N');
        offer.company.clear();
        assert_eq!(offer.company_initial(), 'C');
    }
}

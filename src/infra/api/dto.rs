//! DTOs for decoding USAJobs search responses.
//!
//! The adapter decodes into these transport DTOs first, then flattens them
//! into [`JobSearchResult`] in one pass.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{JobOffer, JobSearchResult};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct UsaJobsResponse {
    #[serde(default)]
    pub(super) search_result: Option<SearchResultDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct SearchResultDto {
    #[serde(default)]
    pub(super) search_result_count_all: Option<u64>,
    #[serde(default)]
    pub(super) search_result_items: Vec<SearchResultItemDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct SearchResultItemDto {
    #[serde(default)]
    pub(super) matched_object_id: Value,
    #[serde(default)]
    pub(super) matched_object_descriptor: DescriptorDto,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct DescriptorDto {
    pub(super) position_title: Option<String>,
    pub(super) organization_name: Option<String>,
    pub(super) position_location_display: Option<String>,
    pub(super) publication_start_date: Option<String>,
    #[serde(rename = "PositionURI")]
    pub(super) position_uri: Option<String>,
    #[serde(rename = "ApplyURI", default)]
    pub(super) apply_uri: Vec<String>,
    pub(super) qualification_summary: Option<String>,
    #[serde(default)]
    pub(super) position_remuneration: Vec<RemunerationDto>,
    pub(super) user_area: Option<UserAreaDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct RemunerationDto {
    pub(super) minimum_range: Option<Value>,
    pub(super) maximum_range: Option<Value>,
    pub(super) description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct UserAreaDto {
    pub(super) details: Option<DetailsDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct DetailsDto {
    pub(super) job_summary: Option<String>,
}

impl UsaJobsResponse {
    pub(super) fn into_search_result(self) -> JobSearchResult {
        let result = self.search_result.unwrap_or_default();
        JobSearchResult {
            total_count: result.search_result_count_all.unwrap_or(0),
            jobs: result
                .search_result_items
                .into_iter()
                .map(SearchResultItemDto::into_offer)
                .collect(),
        }
    }
}

impl SearchResultItemDto {
    fn into_offer(self) -> JobOffer {
        let d = self.matched_object_descriptor;
        let salary = d.position_remuneration.first().map(RemunerationDto::label);
        let description = d
            .user_area
            .and_then(|area| area.details)
            .and_then(|details| details.job_summary)
            .or(d.qualification_summary)
            .unwrap_or_default();
        let url = d
            .position_uri
            .or_else(|| d.apply_uri.into_iter().next())
            .unwrap_or_default();

        JobOffer {
            id: scalar_text(Some(&self.matched_object_id)),
            title: d.position_title.unwrap_or_default(),
            company: d.organization_name.unwrap_or_default(),
            location: d.position_location_display.unwrap_or_default(),
            date: d.publication_start_date.unwrap_or_default(),
            description,
            salary,
            url: Some(url),
        }
    }
}

impl RemunerationDto {
    fn label(&self) -> String {
        format!(
            "${} - ${} {}",
            scalar_text(self.minimum_range.as_ref()),
            scalar_text(self.maximum_range.as_ref()),
            self.description.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}

/// USAJobs is loose about strings vs numbers for ids and pay ranges.
fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(id: &str, descriptor: Value) -> Value {
        json!({ "MatchedObjectId": id, "MatchedObjectDescriptor": descriptor })
    }

    fn decode(value: Value) -> JobSearchResult {
        serde_json::from_value::<UsaJobsResponse>(value)
            .unwrap()
            .into_search_result()
    }

    #[test]
    fn counts_come_from_count_all() {
        let items: Vec<Value> = (0..6)
            .map(|i| item(&format!("J{i}"), json!({ "PositionTitle": "T" })))
            .collect();
        let result = decode(json!({
            "SearchResult": {
                "SearchResultCount": 6,
                "SearchResultCountAll": 42,
                "SearchResultItems": items
            }
        }));
        assert_eq!(result.jobs.len(), 6);
        assert_eq!(result.total_count, 42);
    }

    #[test]
    fn empty_payload_means_no_jobs() {
        let result = decode(json!({}));
        assert!(result.jobs.is_empty());
        assert_eq!(result.total_count, 0);
    }

    #[test]
    fn salary_only_when_remuneration_present() {
        let result = decode(json!({
            "SearchResult": {
                "SearchResultCountAll": 2,
                "SearchResultItems": [
                    item("A", json!({
                        "PositionRemuneration": [
                            { "MinimumRange": "50000.0", "MaximumRange": 80000, "Description": "Per Year" },
                            { "MinimumRange": "1", "MaximumRange": "2", "Description": "Ignored" }
                        ]
                    })),
                    item("B", json!({ "PositionRemuneration": [] }))
                ]
            }
        }));
        assert_eq!(
            result.jobs[0].salary.as_deref(),
            Some("$50000.0 - $80000 Per Year")
        );
        assert_eq!(result.jobs[1].salary, None);
    }

    #[test]
    fn description_and_url_fall_back() {
        let result = decode(json!({
            "SearchResult": {
                "SearchResultItems": [
                    item("A", json!({
                        "UserArea": { "Details": { "JobSummary": "Summary" } },
                        "QualificationSummary": "Quals",
                        "PositionURI": "https://x/a",
                        "ApplyURI": ["https://x/apply-a"]
                    })),
                    item("B", json!({
                        "UserArea": { "Details": {} },
                        "QualificationSummary": "Quals",
                        "ApplyURI": ["https://x/apply-b", "https://x/other"]
                    })),
                    item("C", json!({}))
                ]
            }
        }));
        let jobs = &result.jobs;
        assert_eq!(jobs[0].description, "Summary");
        assert_eq!(jobs[0].url.as_deref(), Some("https://x/a"));
        assert_eq!(jobs[1].description, "Quals");
        assert_eq!(jobs[1].url.as_deref(), Some("https://x/apply-b"));
        assert_eq!(jobs[2].description, "");
        assert_eq!(jobs[2].url.as_deref(), Some(""));
        assert_eq!(jobs[2].title, "");
    }

    #[test]
    fn item_without_id_keeps_the_rest_of_the_page() {
        let result = decode(json!({
            "SearchResult": {
                "SearchResultCountAll": 2,
                "SearchResultItems": [
                    { "MatchedObjectDescriptor": { "PositionTitle": "No id" } },
                    item("B", json!({ "PositionTitle": "Has id" })),
                    { "MatchedObjectId": 7781 }
                ]
            }
        }));
        assert_eq!(result.jobs.len(), 3);
        assert_eq!(result.jobs[0].id, "");
        assert_eq!(result.jobs[0].title, "No id");
        assert_eq!(result.jobs[1].id, "B");
        assert_eq!(result.jobs[2].id, "7781");
    }
}

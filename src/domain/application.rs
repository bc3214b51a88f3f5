use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::offer::JobOffer;
use super::user::RecordId;

/// Source tag stored with applications created from search results.
pub const USAJOBS_SOURCE: &str = "USAJobs";

/// Where an application stands in the hiring pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Applied,
    Interview,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        Self::Pending,
        Self::Applied,
        Self::Interview,
        Self::Accepted,
        Self::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Applied => "APPLIED",
            Self::Interview => "INTERVIEW",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPLIED" => Ok(Self::Applied),
            "INTERVIEW" => Ok(Self::Interview),
            "ACCEPTED" => Ok(Self::Accepted),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(format!("unknown application status: {other}")),
        }
    }
}

/// A job the user is tracking, with free-form notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Assigned by the API on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub user_id: RecordId,
    pub offer_id: String,
    pub api_source: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub notes: String,
    /// RFC3339 creation timestamp.
    pub date_added: String,
}

impl Application {
    /// Starts tracking `offer` as a pending application.
    pub fn track(user_id: RecordId, offer: &JobOffer, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            user_id,
            offer_id: offer.id.clone(),
            api_source: USAJOBS_SOURCE.to_string(),
            title: offer.title.clone(),
            company: offer.company.clone(),
            location: offer.location.clone(),
            url: offer.url.clone().unwrap_or_default(),
            status: ApplicationStatus::Pending,
            notes: String::new(),
            date_added: now.to_rfc3339(),
        }
    }

    /// Whole days between `date_added` and `now`, rounded up.
    pub fn days_since_added(&self, now: DateTime<Utc>) -> Option<i64> {
        let added = DateTime::parse_from_rfc3339(&self.date_added).ok()?;
        let seconds = (now - added.with_timezone(&Utc)).num_seconds().abs();
        Some((seconds + 86_399) / 86_400)
    }
}

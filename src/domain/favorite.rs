use serde::{Deserialize, Serialize};

use super::offer::JobOffer;
use super::user::RecordId;

/// A job offer bookmarked by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteOffer {
    /// Assigned by the API on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub user_id: RecordId,
    pub offer_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
}

impl FavoriteOffer {
    pub fn from_offer(user_id: RecordId, offer: &JobOffer) -> Self {
        Self {
            id: None,
            user_id,
            offer_id: offer.id.clone(),
            title: offer.title.clone(),
            company: offer.company.clone(),
            location: offer.location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_favorite_serializes_without_id() {
        let offer = JobOffer {
            id: "ABC-1".into(),
            title: "Ranger".into(),
            company: "NPS".into(),
            location: "Yosemite, CA".into(),
            date: "2025-01-01".into(),
            description: String::new(),
            salary: None,
            url: None,
        };
        let favorite = FavoriteOffer::from_offer(7, &offer);
        let json = serde_json::to_value(&favorite).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["userId"], 7);
        assert_eq!(json["offerId"], "ABC-1");
    }
}

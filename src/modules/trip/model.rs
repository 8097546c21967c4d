use bson::oid::ObjectId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const SAMPLE_GROUP_ID: &str = "sample-group-id";
pub const SAMPLE_USER_ID: &str = "sample-user-id";
pub const DEFAULT_CURRENCY: &str = "INR";
pub const SAMPLE_TRIP_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    pub group_id: String,
    pub created_by: String,
    pub start_date: bson::DateTime,
    pub end_date: bson::DateTime,
    pub currency: String,
    pub members: BTreeSet<String>,
    // Server-assigned, never written by the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<bson::DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<bson::DateTime>,
}

impl Trip {
    /// Placeholder trip used to seed the collection. The group and user ids
    /// are sample values and must be replaced with real ones.
    pub fn sample(now: DateTime<Utc>) -> Self {
        let end = now + Duration::days(SAMPLE_TRIP_DAYS);

        Self {
            id: None,
            name: "Sample Trip".to_string(),
            description: "This is a sample trip to demonstrate the structure".to_string(),
            group_id: SAMPLE_GROUP_ID.to_string(),
            created_by: SAMPLE_USER_ID.to_string(),
            start_date: bson::DateTime::from_chrono(now),
            end_date: bson::DateTime::from_chrono(end),
            currency: DEFAULT_CURRENCY.to_string(),
            members: BTreeSet::from([SAMPLE_USER_ID.to_string()]),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end_date.to_chrono() - self.start_date.to_chrono()
    }

    pub fn start_date_rfc3339(&self) -> String {
        self.start_date.try_to_rfc3339_string().unwrap_or_default()
    }

    pub fn end_date_rfc3339(&self) -> String {
        self.end_date.try_to_rfc3339_string().unwrap_or_default()
    }
}

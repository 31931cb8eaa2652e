use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged occurrence as the record store serves it. Only the two
/// projected fields are kept; anything else in the store row is dropped
/// during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RawEvent {
    #[serde(rename = "dateKey", default)]
    pub date_key: Option<String>,
    #[serde(rename = "eventType", default)]
    pub event_type: Option<String>,
}

/// One page of records from the store. `next_token` absent means the scan
/// is exhausted.
#[derive(Debug, Deserialize)]
pub struct RecordPage {
    #[serde(default)]
    pub items: Vec<RawEvent>,
    #[serde(rename = "nextToken", default)]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTrendEntry {
    pub date: String,
    pub accesses: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBreakdownEntry {
    pub name: String,
    pub value: u64,
    pub percentage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub daily_trend: Vec<DailyTrendEntry>,
    pub type_breakdown: Vec<TypeBreakdownEntry>,
    pub total_events: u64,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub status: &'static str,
    pub data: Summary,
}

impl SummaryResponse {
    pub fn success(data: Summary) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

use crate::models::{DailyTrendEntry, RawEvent, Summary, TypeBreakdownEntry};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};

pub fn aggregate(records: &[RawEvent]) -> Summary {
    aggregate_at(Utc::now(), records)
}

/// Folds the full record set into the summary views. Pure given `now`;
/// missing fields are absorbed into the sentinel buckets, never rejected.
pub fn aggregate_at(now: DateTime<Utc>, records: &[RawEvent]) -> Summary {
    let mut day_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut type_counts: HashMap<String, u64> = HashMap::new();
    let mut type_order: Vec<String> = Vec::new();
    let mut total_events = 0u64;

    for record in records {
        let date = non_empty(record.date_key.as_deref()).unwrap_or("unknown");
        let name = non_empty(record.event_type.as_deref()).unwrap_or("Other");

        let day = day_counts.entry(date.to_string()).or_default();
        *day = day.saturating_add(1);

        if !type_counts.contains_key(name) {
            type_order.push(name.to_string());
        }
        let kind = type_counts.entry(name.to_string()).or_default();
        *kind = kind.saturating_add(1);

        total_events = total_events.saturating_add(1);
    }

    // BTreeMap iteration gives the dates in ascending lexicographic order,
    // which is chronological for YYYY-MM-DD keys.
    let daily_trend = day_counts
        .into_iter()
        .map(|(date, accesses)| DailyTrendEntry { date, accesses })
        .collect();

    // Breakdown entries keep first-observed order; consumers rely on it.
    let type_breakdown = type_order
        .into_iter()
        .map(|name| {
            let value = type_counts[&name];
            TypeBreakdownEntry {
                percentage: percentage(value, total_events),
                name,
                value,
            }
        })
        .collect();

    Summary {
        daily_trend,
        type_breakdown,
        total_events,
        last_updated: now,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

fn percentage(value: u64, total: u64) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", value as f64 / total as f64 * 100.0)
}

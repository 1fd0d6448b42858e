//! Breach incident rows: the first few breach records, shaped for a list.

#[cfg(feature = "serde")]
use serde::Serialize;

use pf_core::model::BreachRecord;
use pf_core::rounding::truncate_chars;
use pf_core::year::YearKey;

pub const MAX_INCIDENTS: usize = 3;
pub const STORY_LIMIT: usize = 180;
pub const UNKNOWN_ORGANIZATION: &str = "Unknown org";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BreachIncident {
    pub organization: String,
    pub year: YearKey,
    /// `None` when the record count is unknown.
    pub records_lost: Option<u64>,
    pub story: Option<String>,
}

pub fn summarize_breaches(records: &[BreachRecord]) -> Vec<BreachIncident> {
    records
        .iter()
        .take(MAX_INCIDENTS)
        .map(|r| BreachIncident {
            organization: r
                .organization
                .clone()
                .unwrap_or_else(|| UNKNOWN_ORGANIZATION.to_string()),
            year: YearKey::from_resolved(r.year),
            records_lost: r.records_lost,
            story: r.story.as_deref().map(|s| truncate_chars(s, STORY_LIMIT)),
        })
        .collect()
}

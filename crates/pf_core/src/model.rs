//! Strict profile model.
//!
//! These are the internal types a raw profile document is converted into at the
//! `pf_io` boundary. Every field has already been through its field-resolution
//! rule, so each `Option` means "no source field present, or the first present
//! one was malformed", never "wrong type". Defaults (`Medium`, `0`, `"unknown"`, ...) are applied by
//! the projections, not here, so absence stays observable.

use crate::risk::RiskLevel;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The whole document after boundary conversion.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Profile {
    /// Original search term; empty when the document carried none.
    pub query: String,
    pub summary: Option<String>,
    pub descriptive_report: Option<String>,
    /// `None` when the document had no `scores` object at all.
    pub scores: Option<Scores>,
    pub actor_intel: Vec<ActorSignal>,
    pub breach_data: Vec<BreachRecord>,
    pub clusters: Vec<Cluster>,
    /// Number of personal exposure entries (`person_breach`).
    pub person_exposures: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Scores {
    pub final_threat_score: Option<f64>,
    pub breach_impact_score: Option<f64>,
    pub actor_boost_estimate: Option<f64>,
}

/// One actor-intelligence signal.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ActorSignal {
    pub platform: Option<String>,
    /// `username`, else `email`.
    pub identity: Option<String>,
    pub country: Option<String>,
    /// `risk_level`, else `risk` when `risk_level` is absent; `None` when neither is
    /// present or the deciding value is not a known bucket.
    pub risk: Option<RiskLevel>,
    /// `confidence`, else `conf`. An explicit `0` is `Some(0.0)`.
    pub confidence: Option<f64>,
    /// `note`, else `activity_type`.
    pub note: Option<String>,
}

/// One organization-level breach record.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BreachRecord {
    /// `Year`, else `year`, else `"Year "`.
    pub year: Option<i32>,
    pub organization: Option<String>,
    pub records_lost: Option<u64>,
    pub story: Option<String>,
}

/// A grouped entity linked to the subject.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Cluster {
    /// Entity kind (`email`, `phone`, `wallet`, `name`, ...).
    pub kind: Option<String>,
    pub value: Option<String>,
    pub score: Option<f64>,
    pub occurrences: Vec<Occurrence>,
}

/// Evidence reference for a cluster.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Occurrence {
    pub source: Option<String>,
}

impl Cluster {
    /// Distinct evidence sources, in first-seen order.
    pub fn sources(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for s in self.occurrences.iter().filter_map(|o| o.source.as_deref()) {
            if !out.contains(&s) {
                out.push(s);
            }
        }
        out
    }
}

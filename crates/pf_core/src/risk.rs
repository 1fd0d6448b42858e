//! Risk buckets for actor signals.
//!
//! The bucket set is closed: `Critical | High | Medium | Low`. Anything else a
//! document carries (misspellings, other vocabularies, numbers) is not a bucket;
//! callers fall back to [`RiskLevel::DEFAULT`].

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Display order, most severe first.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Critical,
        RiskLevel::High,
        RiskLevel::Medium,
        RiskLevel::Low,
    ];

    /// Bucket for absent or unrecognized labels.
    pub const DEFAULT: RiskLevel = RiskLevel::Medium;

    /// Recognize a bucket label. Surrounding whitespace and ASCII case are ignored.
    pub fn parse(label: &str) -> Option<RiskLevel> {
        let t = label.trim();
        RiskLevel::ALL
            .into_iter()
            .find(|lvl| lvl.as_str().eq_ignore_ascii_case(t))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Critical => "Critical",
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        }
    }

    /// Position in [`RiskLevel::ALL`].
    pub fn index(self) -> usize {
        match self {
            RiskLevel::Critical => 0,
            RiskLevel::High => 1,
            RiskLevel::Medium => 2,
            RiskLevel::Low => 3,
        }
    }

    /// Relative weight the scoring backend assigns to each bucket.
    /// Display only; scores are never recomputed here.
    pub fn weight(self) -> u8 {
        match self {
            RiskLevel::Critical => 30,
            RiskLevel::High => 20,
            RiskLevel::Medium => 10,
            RiskLevel::Low => 4,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Threat gauge and score card.
//!
//! The gauge is a percent split: `risk` is the final threat score clamped to
//! `[0, 100]` (no rounding), `remaining` is `100 - risk` computed after
//! clamping, so the two always sum to 100.

#[cfg(feature = "serde")]
use serde::Serialize;

use pf_core::model::{Profile, Scores};
use pf_core::rounding::{clamp_percent, round_2dp};

pub const GAUGE_FULL: f64 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ThreatGauge {
    pub risk: f64,
    pub remaining: f64,
}

impl ThreatGauge {
    pub fn from_score(score: f64) -> Self {
        let risk = clamp_percent(score);
        Self { risk, remaining: GAUGE_FULL - risk }
    }
}

/// Gauge for a profile. Absent profile, scores or final score give `risk = 0`.
pub fn compute_threat_gauge(profile: Option<&Profile>) -> ThreatGauge {
    let score = profile
        .and_then(|p| p.scores)
        .and_then(|s| s.final_threat_score)
        .unwrap_or(0.0);
    ThreatGauge::from_score(score)
}

/// All three backend scores, two decimals, absent as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScoreCard {
    pub final_threat_score: f64,
    pub breach_impact_score: f64,
    pub actor_boost_estimate: f64,
}

pub fn compute_score_card(profile: Option<&Profile>) -> ScoreCard {
    let s: Scores = profile.and_then(|p| p.scores).unwrap_or_default();
    let shown = |v: Option<f64>| round_2dp(v.unwrap_or(0.0));
    ScoreCard {
        final_threat_score: shown(s.final_threat_score),
        breach_impact_score: shown(s.breach_impact_score),
        actor_boost_estimate: shown(s.actor_boost_estimate),
    }
}

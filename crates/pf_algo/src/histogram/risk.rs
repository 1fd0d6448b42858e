//! Risk-level distribution of actor signals.
//!
//! The bucket set is fixed at `Critical | High | Medium | Low`. A signal with no
//! recognized bucket counts as `Medium`, so the histogram total always equals
//! the number of signals.

#[cfg(feature = "serde")]
use serde::Serialize;

use pf_core::model::ActorSignal;
use pf_core::risk::RiskLevel;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RiskHistogram {
    #[cfg_attr(feature = "serde", serde(rename = "Critical"))]
    pub critical: usize,
    #[cfg_attr(feature = "serde", serde(rename = "High"))]
    pub high: usize,
    #[cfg_attr(feature = "serde", serde(rename = "Medium"))]
    pub medium: usize,
    #[cfg_attr(feature = "serde", serde(rename = "Low"))]
    pub low: usize,
}

impl RiskHistogram {
    pub fn get(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Critical => self.critical,
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    fn bump(&mut self, level: RiskLevel) {
        let slot = match level {
            RiskLevel::Critical => &mut self.critical,
            RiskLevel::High => &mut self.high,
            RiskLevel::Medium => &mut self.medium,
            RiskLevel::Low => &mut self.low,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }

    /// `(bucket, count)` in severity order, zero buckets included.
    pub fn iter(&self) -> impl Iterator<Item = (RiskLevel, usize)> + '_ {
        RiskLevel::ALL.into_iter().map(move |lvl| (lvl, self.get(lvl)))
    }
}

/// Count signals per bucket; absent or unrecognized risk counts as `Medium`.
pub fn classify_risk(signals: &[ActorSignal]) -> RiskHistogram {
    let mut h = RiskHistogram::default();
    for s in signals {
        h.bump(s.risk.unwrap_or(RiskLevel::DEFAULT));
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(risk: Option<RiskLevel>) -> ActorSignal {
        ActorSignal { risk, ..ActorSignal::default() }
    }

    #[test]
    fn high_absent_low() {
        let h = classify_risk(&[sig(Some(RiskLevel::High)), sig(None), sig(Some(RiskLevel::Low))]);
        assert_eq!(h, RiskHistogram { critical: 0, high: 1, medium: 1, low: 1 });
    }

    #[test]
    fn empty_input_has_all_buckets_at_zero() {
        let h = classify_risk(&[]);
        assert_eq!(h.total(), 0);
        assert_eq!(h.iter().count(), 4);
    }

    #[test]
    fn iter_is_severity_ordered() {
        let h = classify_risk(&[sig(Some(RiskLevel::Critical)), sig(Some(RiskLevel::Critical))]);
        let v: Vec<_> = h.iter().collect();
        assert_eq!(
            v,
            vec![
                (RiskLevel::Critical, 2),
                (RiskLevel::High, 0),
                (RiskLevel::Medium, 0),
                (RiskLevel::Low, 0)
            ]
        );
    }
}

//! Actor card normalization: one display row per actor signal, every field
//! filled in.

#[cfg(feature = "serde")]
use serde::Serialize;

use pf_core::model::ActorSignal;
use pf_core::risk::RiskLevel;
use pf_core::rounding::round_2dp;

pub const UNKNOWN_IDENTITY: &str = "unknown";
pub const UNKNOWN_PLATFORM: &str = "unknown";
pub const NOTE_PLACEHOLDER: &str = "No notes";

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DisplayActor {
    pub platform: String,
    pub identity: String,
    pub country: Option<String>,
    pub risk: RiskLevel,
    /// Backend weight of `risk`, for relative emphasis.
    pub risk_weight: u8,
    /// 0..1 as sent, two decimals. Explicit `0` stays `0`.
    pub confidence: f64,
    pub note: String,
}

pub fn normalize_actor_card(signal: &ActorSignal) -> DisplayActor {
    let risk = signal.risk.unwrap_or(RiskLevel::DEFAULT);
    DisplayActor {
        platform: signal.platform.clone().unwrap_or_else(|| UNKNOWN_PLATFORM.to_string()),
        identity: signal.identity.clone().unwrap_or_else(|| UNKNOWN_IDENTITY.to_string()),
        country: signal.country.clone(),
        risk,
        risk_weight: risk.weight(),
        confidence: round_2dp(signal.confidence.unwrap_or(0.0)),
        note: signal.note.clone().unwrap_or_else(|| NOTE_PLACEHOLDER.to_string()),
    }
}

/// Cards in document order.
pub fn normalize_actor_cards(signals: &[ActorSignal]) -> Vec<DisplayActor> {
    signals.iter().map(normalize_actor_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_signal_gets_every_default() {
        let c = normalize_actor_card(&ActorSignal::default());
        assert_eq!(c.identity, "unknown");
        assert_eq!(c.platform, "unknown");
        assert_eq!(c.confidence, 0.0);
        assert_eq!(c.note, NOTE_PLACEHOLDER);
        assert_eq!(c.risk, RiskLevel::Medium);
        assert_eq!(c.risk_weight, 10);
        assert!(c.country.is_none());
    }

    #[test]
    fn confidence_rounds_to_two_decimals() {
        let s = ActorSignal { confidence: Some(0.876), ..ActorSignal::default() };
        assert_eq!(normalize_actor_card(&s).confidence, 0.88);
    }

    #[test]
    fn explicit_zero_confidence_survives() {
        // conf=0.9 never reaches the model when confidence=0 is present
        let s = ActorSignal { confidence: Some(0.0), ..ActorSignal::default() };
        assert_eq!(normalize_actor_card(&s).confidence, 0.0);
    }

    #[test]
    fn cards_keep_document_order() {
        let a = ActorSignal { identity: Some("a".into()), ..ActorSignal::default() };
        let b = ActorSignal { identity: Some("b".into()), ..ActorSignal::default() };
        let ids: Vec<String> = normalize_actor_cards(&[b, a]).into_iter().map(|c| c.identity).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}

//! Property tests for the projections.

use std::collections::BTreeSet;
use std::f64::consts::TAU;

use proptest::prelude::*;

use pf_algo::{classify_risk, compute_threat_gauge, histogram_breach_years, layout_radial_graph};
use pf_core::model::{ActorSignal, BreachRecord, Cluster, Profile, Scores};
use pf_core::risk::RiskLevel;
use pf_core::year::YearKey;

fn risk_strategy() -> impl Strategy<Value = Option<RiskLevel>> {
    prop_oneof![
        Just(None),
        Just(Some(RiskLevel::Critical)),
        Just(Some(RiskLevel::High)),
        Just(Some(RiskLevel::Medium)),
        Just(Some(RiskLevel::Low)),
    ]
}

fn signals() -> impl Strategy<Value = Vec<ActorSignal>> {
    prop::collection::vec(
        risk_strategy().prop_map(|risk| ActorSignal { risk, ..ActorSignal::default() }),
        0..64,
    )
}

fn breaches() -> impl Strategy<Value = Vec<BreachRecord>> {
    prop::collection::vec(
        prop::option::of(1990i32..2030).prop_map(|year| BreachRecord { year, ..BreachRecord::default() }),
        0..64,
    )
}

proptest! {
    #[test]
    fn risk_histogram_total_is_signal_count(s in signals()) {
        let h = classify_risk(&s);
        prop_assert_eq!(h.total(), s.len());
    }

    #[test]
    fn unrecognized_risk_lands_in_medium(n in 0usize..32) {
        let s = vec![ActorSignal::default(); n];
        let h = classify_risk(&s);
        prop_assert_eq!(h.get(RiskLevel::Medium), n);
        prop_assert_eq!(h.iter().count(), 4);
    }

    #[test]
    fn breach_keys_unique_sorted_unknown_last(r in breaches()) {
        let h = histogram_breach_years(&r);
        let order = h.display_order();
        let unique: BTreeSet<YearKey> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len());
        prop_assert!(order.windows(2).all(|w| w[0] < w[1]));
        if let Some(pos) = order.iter().position(|k| *k == YearKey::Unknown) {
            prop_assert_eq!(pos, order.len() - 1);
        }
        prop_assert_eq!(h.total(), r.len());
    }

    #[test]
    fn gauge_is_clamped_and_sums_to_100(v in -1.0e6f64..1.0e6) {
        let p = Profile {
            scores: Some(Scores { final_threat_score: Some(v), ..Scores::default() }),
            ..Profile::default()
        };
        let g = compute_threat_gauge(Some(&p));
        prop_assert_eq!(g.risk, v.clamp(0.0, 100.0));
        prop_assert_eq!(g.risk + g.remaining, 100.0);
    }

    #[test]
    fn layout_has_one_point_per_cluster_plus_center(n in 0usize..48) {
        let cs = vec![Cluster::default(); n];
        let l = layout_radial_graph("q", &cs);
        prop_assert_eq!(l.len(), n + 1);
        for (i, node) in l.nodes.iter().enumerate() {
            let expected = TAU * i as f64 / n as f64;
            prop_assert!((node.angle - expected).abs() < 1e-9);
            prop_assert!(node.angle >= 0.0 && node.angle < TAU);
        }
    }
}

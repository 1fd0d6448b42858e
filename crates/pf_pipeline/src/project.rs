//! PROJECT stage: every derived view for one converted document.

use serde::Serialize;

use pf_algo::{
    classify_risk, compute_score_card, compute_threat_gauge, histogram_breach_years,
    layout::radial::cluster_label, layout_radial_graph, normalize_actor_cards, summarize_breaches,
    BreachHistogram, BreachIncident, DisplayActor, RadialLayout, RiskHistogram, ScoreCard,
    ThreatGauge,
};
use pf_core::ids::DocumentId;
use pf_core::model::{Cluster, Profile};
use pf_io::ProfileDocument;

/// Distinct evidence sources behind one cluster, aligned with the layout nodes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClusterEvidence {
    pub label: String,
    pub occurrences: usize,
    pub sources: Vec<String>,
}

/// Immutable snapshot of all views for one document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileViews {
    pub document_id: DocumentId,
    pub query: String,
    pub summary: Option<String>,
    pub descriptive_report: Option<String>,
    pub risk_histogram: RiskHistogram,
    pub breach_histogram: BreachHistogram,
    pub threat_gauge: ThreatGauge,
    pub score_card: ScoreCard,
    pub actors: Vec<DisplayActor>,
    pub breach_incidents: Vec<BreachIncident>,
    pub radial_layout: RadialLayout,
    pub cluster_evidence: Vec<ClusterEvidence>,
    pub person_exposures: usize,
}

pub fn project_profile(id: &DocumentId, profile: &Profile) -> ProfileViews {
    let span = tracing::debug_span!("project", document = %id);
    let _enter = span.enter();

    let views = ProfileViews {
        document_id: id.clone(),
        query: profile.query.clone(),
        summary: profile.summary.clone(),
        descriptive_report: profile.descriptive_report.clone(),
        risk_histogram: classify_risk(&profile.actor_intel),
        breach_histogram: histogram_breach_years(&profile.breach_data),
        threat_gauge: compute_threat_gauge(Some(profile)),
        score_card: compute_score_card(Some(profile)),
        actors: normalize_actor_cards(&profile.actor_intel),
        breach_incidents: summarize_breaches(&profile.breach_data),
        radial_layout: layout_radial_graph(&profile.query, &profile.clusters),
        cluster_evidence: profile.clusters.iter().map(evidence).collect(),
        person_exposures: profile.person_exposures,
    };

    tracing::debug!(
        actors = views.actors.len(),
        breach_years = views.breach_histogram.len(),
        clusters = views.cluster_evidence.len(),
        risk = views.threat_gauge.risk,
        "projected"
    );
    views
}

/// No document, no views.
pub fn project_document(doc: Option<&ProfileDocument>) -> Option<ProfileViews> {
    doc.map(|d| project_profile(&d.id, &d.profile))
}

fn evidence(c: &Cluster) -> ClusterEvidence {
    ClusterEvidence {
        label: cluster_label(c),
        occurrences: c.occurrences.len(),
        sources: c.sources().into_iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::model::{ActorSignal, Occurrence};
    use pf_core::risk::RiskLevel;

    fn id() -> DocumentId {
        DocumentId::from_digest_hex(&"ab".repeat(32)).unwrap()
    }

    #[test]
    fn absent_document_has_no_views() {
        assert!(project_document(None).is_none());
    }

    #[test]
    fn empty_profile_projects_to_empty_views() {
        let v = project_profile(&id(), &Profile::default());
        assert_eq!(v.risk_histogram.total(), 0);
        assert!(v.breach_histogram.is_empty());
        assert_eq!(v.threat_gauge, ThreatGauge { risk: 0.0, remaining: 100.0 });
        assert_eq!(v.radial_layout.len(), 1);
        assert!(v.actors.is_empty() && v.breach_incidents.is_empty() && v.cluster_evidence.is_empty());
    }

    #[test]
    fn evidence_lines_up_with_nodes() {
        let p = Profile {
            query: "q".into(),
            actor_intel: vec![ActorSignal { risk: Some(RiskLevel::High), ..ActorSignal::default() }],
            clusters: vec![Cluster {
                kind: Some("phone".into()),
                value: Some("+15550100".into()),
                occurrences: vec![
                    Occurrence { source: Some("leak-a".into()) },
                    Occurrence { source: Some("leak-a".into()) },
                ],
                ..Cluster::default()
            }],
            ..Profile::default()
        };
        let v = project_profile(&id(), &p);
        assert_eq!(v.cluster_evidence[0].label, v.radial_layout.nodes[0].point.label);
        assert_eq!(v.cluster_evidence[0].sources, vec!["leak-a".to_string()]);
        assert_eq!(v.cluster_evidence[0].occurrences, 2);
        assert_eq!(v.risk_histogram.high, 1);
    }
}

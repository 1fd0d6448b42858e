//! Inbound profile document.
//!
//! `RawProfileDocument` is the partial record exactly as the backend sends it:
//! every top-level field optional and untyped. It never leaves this crate's
//! public surface except through `into_profile`, which applies the rules in
//! [`crate::fields`] and produces the strict `pf_core::Profile`.

use serde::Deserialize;
use serde_json::Value;

use pf_core::ids::DocumentId;
use pf_core::model::{ActorSignal, BreachRecord, Cluster, Occurrence, Profile, Scores};

use crate::fields::{self, JsonObject};
use crate::hasher;
use crate::{IoError, IoResult};

/// Partial record view of `GET /api/profile?q=<query>`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfileDocument {
    #[serde(default)]
    pub query: Option<Value>,
    #[serde(default)]
    pub summary: Option<Value>,
    #[serde(default)]
    pub descriptive_report: Option<Value>,
    #[serde(default)]
    pub scores: Option<Value>,
    #[serde(default)]
    pub actor_intel: Option<Value>,
    #[serde(default)]
    pub breach_data: Option<Value>,
    #[serde(default)]
    pub clusters: Option<Value>,
    #[serde(default)]
    pub person_breach: Option<Value>,
}

/// A converted document plus its content identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDocument {
    pub id: DocumentId,
    pub profile: Profile,
}

impl ProfileDocument {
    /// Convert a parsed JSON value. Fails only when the root is not an object.
    pub fn from_value(value: Value) -> IoResult<Self> {
        if !value.is_object() {
            return Err(IoError::Shape(format!(
                "expected a JSON object at the root, found {}",
                json_kind(&value)
            )));
        }
        let id = hasher::document_id(&value)?;
        let raw: RawProfileDocument = serde_json::from_value(value)?;
        let profile = raw.into_profile();
        tracing::debug!(
            document = %id,
            actors = profile.actor_intel.len(),
            breaches = profile.breach_data.len(),
            clusters = profile.clusters.len(),
            "document converted"
        );
        Ok(Self { id, profile })
    }
}

impl RawProfileDocument {
    pub fn into_profile(self) -> Profile {
        Profile {
            query: self.query.as_ref().and_then(fields::text).unwrap_or_default(),
            summary: self.summary.as_ref().and_then(fields::text),
            descriptive_report: self.descriptive_report.as_ref().and_then(fields::text),
            scores: self.scores.as_ref().and_then(scores),
            actor_intel: records("actor_intel", self.actor_intel.as_ref(), actor_signal),
            breach_data: records("breach_data", self.breach_data.as_ref(), breach_record),
            clusters: records("clusters", self.clusters.as_ref(), cluster),
            person_exposures: sequence("person_breach", self.person_breach.as_ref()).len(),
        }
    }
}

/* ----------------------------- record builders ---------------------------- */

fn scores(v: &Value) -> Option<Scores> {
    let Some(obj) = v.as_object() else {
        tracing::debug!(field = "scores", "not an object; scores treated as absent");
        return None;
    };
    Some(Scores {
        final_threat_score: fields::FINAL_THREAT_SCORE.resolve(obj, fields::number),
        breach_impact_score: fields::BREACH_IMPACT_SCORE.resolve(obj, fields::number),
        actor_boost_estimate: fields::ACTOR_BOOST_ESTIMATE.resolve(obj, fields::number),
    })
}

fn actor_signal(obj: &JsonObject) -> ActorSignal {
    ActorSignal {
        platform: fields::PLATFORM.resolve(obj, fields::text),
        identity: fields::resolve_identity(obj),
        country: fields::COUNTRY.resolve(obj, fields::text),
        risk: fields::resolve_risk(obj),
        confidence: fields::resolve_confidence(obj),
        note: fields::resolve_note(obj),
    }
}

fn breach_record(obj: &JsonObject) -> BreachRecord {
    BreachRecord {
        year: fields::resolve_year(obj),
        organization: fields::ORGANIZATION.resolve(obj, fields::text),
        records_lost: fields::resolve_records_lost(obj),
        story: fields::STORY.resolve(obj, fields::text),
    }
}

fn cluster(obj: &JsonObject) -> Cluster {
    Cluster {
        kind: fields::CLUSTER_KIND.resolve(obj, fields::text),
        value: fields::CLUSTER_VALUE.resolve(obj, fields::text),
        score: fields::CLUSTER_SCORE.resolve(obj, fields::number),
        occurrences: records("occurrences", obj.get("occurrences"), occurrence),
    }
}

fn occurrence(obj: &JsonObject) -> Occurrence {
    Occurrence {
        source: fields::OCCURRENCE_SOURCE.resolve(obj, fields::text),
    }
}

/* -------------------------------- helpers --------------------------------- */

/// Elements of an array field; anything else (absent, null, scalar, object) is empty.
fn sequence<'a>(field: &'static str, v: Option<&'a Value>) -> &'a [Value] {
    match v {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => &[],
        Some(other) => {
            tracing::debug!(field, found = json_kind(other), "expected an array; treated as empty");
            &[]
        }
    }
}

/// Build one record per element. Non-object elements still count and become
/// all-absent records, so collection lengths match the document.
fn records<T: Default>(
    field: &'static str,
    v: Option<&Value>,
    build: impl Fn(&JsonObject) -> T,
) -> Vec<T> {
    sequence(field, v)
        .iter()
        .enumerate()
        .map(|(index, item)| match item.as_object() {
            Some(obj) => build(obj),
            None => {
                tracing::debug!(field, index, "non-object record; all attributes defaulted");
                T::default()
            }
        })
        .collect()
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(all(test, feature = "hash"))]
mod tests {
    use super::*;
    use pf_core::risk::RiskLevel;
    use serde_json::json;

    fn convert(v: Value) -> Profile {
        ProfileDocument::from_value(v).unwrap().profile
    }

    #[test]
    fn root_must_be_an_object() {
        assert!(matches!(ProfileDocument::from_value(json!([1, 2])), Err(IoError::Shape(_))));
        assert!(matches!(ProfileDocument::from_value(json!(null)), Err(IoError::Shape(_))));
    }

    #[test]
    fn empty_object_is_an_empty_profile() {
        assert_eq!(convert(json!({})), Profile::default());
    }

    #[test]
    fn mistyped_collections_become_empty() {
        let p = convert(json!({
            "actor_intel": "oops",
            "breach_data": {"Year": 2019},
            "clusters": null,
            "scores": [1, 2, 3]
        }));
        assert!(p.actor_intel.is_empty());
        assert!(p.breach_data.is_empty());
        assert!(p.clusters.is_empty());
        assert!(p.scores.is_none());
    }

    #[test]
    fn non_object_elements_are_kept_as_empty_records() {
        let p = convert(json!({"actor_intel": [{"risk_level": "High"}, 7, null]}));
        assert_eq!(p.actor_intel.len(), 3);
        assert_eq!(p.actor_intel[0].risk, Some(RiskLevel::High));
        assert_eq!(p.actor_intel[1], ActorSignal::default());
    }

    #[test]
    fn actor_fields_follow_resolution_rules() {
        let p = convert(json!({
            "query": "darklion99",
            "actor_intel": [{
                "platform": "Telegram",
                "email": "d@x.io",
                "risk": "critical",
                "confidence": 0,
                "conf": 0.9,
                "activity_type": "carding"
            }]
        }));
        assert_eq!(p.query, "darklion99");
        let a = &p.actor_intel[0];
        assert_eq!(a.platform.as_deref(), Some("Telegram"));
        assert_eq!(a.identity.as_deref(), Some("d@x.io"));
        assert_eq!(a.risk, Some(RiskLevel::Critical));
        assert_eq!(a.confidence, Some(0.0));
        assert_eq!(a.note.as_deref(), Some("carding"));
    }

    #[test]
    fn breach_and_cluster_fields() {
        let p = convert(json!({
            "breach_data": [{
                "Entity": "Yahoo",
                "Year ": "2014",
                "Records Lost": "500,000,000",
                "Story": "State-sponsored"
            }],
            "clusters": [{
                "type": "email",
                "value": "d@x.io",
                "score": "0.8",
                "occurrences": [{"source": "pastebin", "id": "p1"}, "bogus"]
            }],
            "person_breach": [{}, {}]
        }));
        let b = &p.breach_data[0];
        assert_eq!(b.year, Some(2014));
        assert_eq!(b.organization.as_deref(), Some("Yahoo"));
        assert_eq!(b.records_lost, Some(500_000_000));
        assert_eq!(b.story.as_deref(), Some("State-sponsored"));

        let c = &p.clusters[0];
        assert_eq!(c.kind.as_deref(), Some("email"));
        assert_eq!(c.score, Some(0.8));
        assert_eq!(c.occurrences.len(), 2);
        assert_eq!(c.sources(), vec!["pastebin"]);
        assert_eq!(p.person_exposures, 2);
    }

    #[test]
    fn scores_keep_absence_per_field() {
        let p = convert(json!({"scores": {"final_threat_score": "72.5", "breach_impact_score": "n/a"}}));
        let s = p.scores.unwrap();
        assert_eq!(s.final_threat_score, Some(72.5));
        assert_eq!(s.breach_impact_score, None);
        assert_eq!(s.actor_boost_estimate, None);
    }

    #[test]
    fn converted_profile_carries_resolved_values() {
        let p = convert(json!({
            "query": "q",
            "actor_intel": [{"username": "u", "conf": "0.5", "risk_level": "LOW", "extra": true}]
        }));
        assert_json_diff::assert_json_include!(
            actual: serde_json::to_value(&p).unwrap(),
            expected: json!({
                "query": "q",
                "actor_intel": [{"identity": "u", "confidence": 0.5, "risk": "Low", "note": null}],
                "breach_data": [],
                "person_exposures": 0
            })
        );
    }

    #[test]
    fn identity_ignores_key_order() {
        let a = ProfileDocument::from_value(json!({"query": "q", "clusters": []})).unwrap();
        let b = ProfileDocument::from_value(json!({"clusters": [], "query": "q"})).unwrap();
        assert_eq!(a.id, b.id);
    }
}

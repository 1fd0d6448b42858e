//! Field-resolution rules.
//!
//! Every attribute the projections read has exactly one rule here: an ordered
//! list of source keys and an extractor for the value kind. The first key that
//! is *present* decides: absent, `null` and blank strings fall through to the
//! next key, anything else ends the search. A present value the extractor
//! rejects (wrong type, unparsable) resolves to `None`, logged at `debug`, and
//! the projection applies its default. Later keys are not consulted.
//!
//! | attribute      | keys (priority order)                    | kind          |
//! |----------------|------------------------------------------|---------------|
//! | risk           | `risk_level`, `risk`                     | risk bucket   |
//! | confidence     | `confidence`, `conf`                     | number        |
//! | identity       | `username`, `email`                      | text          |
//! | note           | `note`, `activity_type`                  | text          |
//! | year           | `Year`, `year`, `Year `                  | integral year |
//! | organization   | `Entity`, `Organization`, `organization` | text          |
//! | records lost   | `Records Lost`, `records_lost`           | count         |
//! | story          | `Story`, `story`                         | text          |

use serde_json::{Map, Value};

use pf_core::risk::RiskLevel;

pub type JsonObject = Map<String, Value>;

/// Ordered source keys for one attribute.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub attribute: &'static str,
    pub keys: &'static [&'static str],
}

impl FieldRule {
    pub const fn new(attribute: &'static str, keys: &'static [&'static str]) -> Self {
        Self { attribute, keys }
    }

    /// Value of the first present key in `keys`, if the extractor accepts it.
    pub fn resolve<T>(&self, obj: &JsonObject, extract: impl Fn(&Value) -> Option<T>) -> Option<T> {
        let (key, v) = self
            .keys
            .iter()
            .find_map(|key| obj.get(*key).filter(|v| is_present(v)).map(|v| (*key, v)))?;
        let out = extract(v);
        if out.is_none() {
            tracing::debug!(attribute = self.attribute, key, "malformed field; default applies");
        }
        out
    }
}

/// Absent-equivalent values: `null` and blank strings.
fn is_present(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

/* ------------------------------- rule table ------------------------------- */

pub const RISK: FieldRule = FieldRule::new("risk", &["risk_level", "risk"]);
pub const CONFIDENCE: FieldRule = FieldRule::new("confidence", &["confidence", "conf"]);
pub const IDENTITY: FieldRule = FieldRule::new("identity", &["username", "email"]);
pub const NOTE: FieldRule = FieldRule::new("note", &["note", "activity_type"]);
pub const PLATFORM: FieldRule = FieldRule::new("platform", &["platform"]);
pub const COUNTRY: FieldRule = FieldRule::new("country", &["country"]);

pub const YEAR: FieldRule = FieldRule::new("year", &["Year", "year", "Year "]);
pub const ORGANIZATION: FieldRule = FieldRule::new("organization", &["Entity", "Organization", "organization"]);
pub const RECORDS_LOST: FieldRule = FieldRule::new("records_lost", &["Records Lost", "records_lost"]);
pub const STORY: FieldRule = FieldRule::new("story", &["Story", "story"]);

pub const CLUSTER_KIND: FieldRule = FieldRule::new("cluster.type", &["type"]);
pub const CLUSTER_VALUE: FieldRule = FieldRule::new("cluster.value", &["value"]);
pub const CLUSTER_SCORE: FieldRule = FieldRule::new("cluster.score", &["score"]);
pub const OCCURRENCE_SOURCE: FieldRule = FieldRule::new("occurrence.source", &["source"]);

pub const FINAL_THREAT_SCORE: FieldRule = FieldRule::new("final_threat_score", &["final_threat_score"]);
pub const BREACH_IMPACT_SCORE: FieldRule = FieldRule::new("breach_impact_score", &["breach_impact_score"]);
pub const ACTOR_BOOST_ESTIMATE: FieldRule = FieldRule::new("actor_boost_estimate", &["actor_boost_estimate"]);

/* ------------------------------- resolvers -------------------------------- */

pub fn resolve_risk(obj: &JsonObject) -> Option<RiskLevel> {
    RISK.resolve(obj, risk_bucket)
}

pub fn resolve_confidence(obj: &JsonObject) -> Option<f64> {
    CONFIDENCE.resolve(obj, number)
}

pub fn resolve_identity(obj: &JsonObject) -> Option<String> {
    IDENTITY.resolve(obj, text)
}

pub fn resolve_note(obj: &JsonObject) -> Option<String> {
    NOTE.resolve(obj, text)
}

pub fn resolve_year(obj: &JsonObject) -> Option<i32> {
    YEAR.resolve(obj, year)
}

pub fn resolve_records_lost(obj: &JsonObject) -> Option<u64> {
    RECORDS_LOST.resolve(obj, count)
}

/* ------------------------------- extractors ------------------------------- */

/// Non-empty trimmed string; numbers are shown as written (CSV-born usernames).
pub fn text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Finite number, or a string that parses as one.
pub fn number(v: &Value) -> Option<f64> {
    let x = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    x.is_finite().then_some(x)
}

/// A recognized risk bucket label.
pub fn risk_bucket(v: &Value) -> Option<RiskLevel> {
    v.as_str().and_then(RiskLevel::parse)
}

/// Integral year from a number (`2019`, `2019.0`) or numeric string (`"2019"`, `" 2019 "`).
pub fn year(v: &Value) -> Option<i32> {
    match v {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).ok(),
            None => integral_f64_to_i32(n.as_f64()?),
        },
        Value::String(s) => {
            let t = s.trim();
            t.parse::<i32>()
                .ok()
                .or_else(|| integral_f64_to_i32(t.parse::<f64>().ok()?))
        }
        _ => None,
    }
}

/// Non-negative count; strings may carry thousands separators (`"1,500,000"`).
pub fn count(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64().or_else(|| {
            let f = n.as_f64()?;
            (f.is_finite() && f >= 0.0 && f <= u64::MAX as f64).then(|| f.trunc() as u64)
        }),
        Value::String(s) => {
            let cleaned: String = s.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
            cleaned.parse::<u64>().ok()
        }
        _ => None,
    }
}

fn integral_f64_to_i32(f: f64) -> Option<i32> {
    if f.is_finite() && f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
        Some(f as i32)
    } else {
        None
    }
}

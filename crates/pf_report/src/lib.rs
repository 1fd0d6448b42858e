//! pf_report: dashboard model + renderers (JSON/HTML).
//!
//! - No network, no filesystem. Callers hand in views already projected.
//! - The model is built once from `Option<&ProfileViews>`; a missing document
//!   is a fixed "No data" state, an empty collection gets a "No signals
//!   detected" placeholder.
//! - Section order and field names are stable.

#![deny(unsafe_code)]

use std::fmt;

use serde::Serialize;

use pf_algo::{BreachIncident, DisplayActor, ScoreCard, ThreatGauge};
use pf_pipeline::ProfileViews;

#[cfg(feature = "render_html")]
pub mod render_html;
#[cfg(feature = "render_json")]
pub mod render_json;

#[cfg(feature = "render_html")]
pub use render_html::render_html;
#[cfg(feature = "render_json")]
pub use render_json::render_json;

pub const NO_DATA: &str = "No data";
pub const NO_SIGNALS: &str = "No signals detected";

// ===== Errors =====

#[derive(Debug)]
pub enum ReportError {
    Template(&'static str),
    Serialize(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Template(stage) => write!(f, "template error ({stage})"),
            ReportError::Serialize(m) => write!(f, "serialize error: {m}"),
        }
    }
}

impl std::error::Error for ReportError {}

// ===== Model =====

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardModel {
    /// The query, or `NO_DATA` when there is no document.
    pub headline: String,
    pub has_data: bool,
    pub document_id: Option<String>,
    pub summary: Option<String>,
    pub descriptive_report: Option<String>,
    pub gauge: ThreatGauge,
    pub score_card: ScoreCard,
    pub risk_bars: Vec<BarRow>,
    pub breach_year_bars: Vec<BarRow>,
    pub actors: Section<DisplayActor>,
    pub breaches: Section<BreachIncident>,
    pub clusters: Section<ClusterRow>,
    pub person_exposures: usize,
}

/// One bar of a histogram chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BarRow {
    pub label: String,
    pub count: usize,
}

/// Rows of a panel, or the text shown instead of them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Section<T> {
    pub rows: Vec<T>,
    pub placeholder: Option<&'static str>,
}

impl<T> Section<T> {
    fn from_rows(rows: Vec<T>) -> Self {
        let placeholder = rows.is_empty().then_some(NO_SIGNALS);
        Self { rows, placeholder }
    }

    fn no_data() -> Self {
        Self { rows: Vec::new(), placeholder: Some(NO_DATA) }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClusterRow {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub score: f64,
    pub occurrences: usize,
    pub sources: Vec<String>,
}

/// Build the dashboard. `None` means no usable document was received.
pub fn build_model(views: Option<&ProfileViews>) -> DashboardModel {
    let Some(v) = views else {
        return DashboardModel {
            headline: NO_DATA.to_string(),
            has_data: false,
            document_id: None,
            summary: None,
            descriptive_report: None,
            gauge: ThreatGauge::from_score(0.0),
            score_card: ScoreCard::default(),
            risk_bars: Vec::new(),
            breach_year_bars: Vec::new(),
            actors: Section::no_data(),
            breaches: Section::no_data(),
            clusters: Section::no_data(),
            person_exposures: 0,
        };
    };

    let risk_bars = v
        .risk_histogram
        .iter()
        .map(|(lvl, count)| BarRow { label: lvl.to_string(), count })
        .collect();
    let breach_year_bars = v
        .breach_histogram
        .iter()
        .map(|(key, count)| BarRow { label: key.to_string(), count })
        .collect();
    let clusters = v
        .radial_layout
        .nodes
        .iter()
        .zip(&v.cluster_evidence)
        .map(|(node, ev)| ClusterRow {
            label: node.point.label.clone(),
            x: node.point.x,
            y: node.point.y,
            score: node.score,
            occurrences: node.occurrences,
            sources: ev.sources.clone(),
        })
        .collect();

    DashboardModel {
        headline: v.query.clone(),
        has_data: true,
        document_id: Some(v.document_id.to_string()),
        summary: v.summary.clone(),
        descriptive_report: v.descriptive_report.clone(),
        gauge: v.threat_gauge,
        score_card: v.score_card,
        risk_bars,
        breach_year_bars,
        actors: Section::from_rows(v.actors.clone()),
        breaches: Section::from_rows(v.breach_incidents.clone()),
        clusters: Section::from_rows(clusters),
        person_exposures: v.person_exposures,
    }
}

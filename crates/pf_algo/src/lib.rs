// crates/pf_algo/src/lib.rs
#![forbid(unsafe_code)]

//! Projection layer. Every function here is pure and total: it takes the strict
//! `pf_core` model and returns an owned view. Nothing fails, nothing is cached,
//! and no input is mutated.

// ----------------------------- Histograms -----------------------------------

pub mod histogram {
    pub mod breach_years;
    pub mod risk;

    pub use breach_years::{histogram_breach_years, BreachHistogram};
    pub use risk::{classify_risk, RiskHistogram};
}

pub use histogram::{classify_risk, histogram_breach_years, BreachHistogram, RiskHistogram};

// ----------------------------- Scalar views ---------------------------------

pub mod gauge;
pub use gauge::{compute_score_card, compute_threat_gauge, ScoreCard, ThreatGauge};

// ----------------------------- Display rows ---------------------------------

pub mod actor_card;
pub mod breach_incidents;

pub use actor_card::{normalize_actor_card, normalize_actor_cards, DisplayActor};
pub use breach_incidents::{summarize_breaches, BreachIncident};

// ----------------------------- Layout ---------------------------------------

pub mod layout {
    //! Fixed canvas geometry for the cluster graph.

    pub mod radial;

    /// Canvas width in layout units.
    pub const CANVAS_WIDTH: f64 = 600.0;
    /// Canvas height in layout units.
    pub const CANVAS_HEIGHT: f64 = 400.0;
    /// Horizontal radius of the satellite ellipse.
    pub const RADIUS_X: f64 = 220.0;
    /// Vertical radius of the satellite ellipse.
    pub const RADIUS_Y: f64 = 140.0;
    /// Max characters of a cluster value shown in its label.
    pub const LABEL_VALUE_LIMIT: usize = 12;

    pub use radial::{layout_radial_graph, RadialLayout, RadialNode, RadialPoint};
}

pub use layout::{layout_radial_graph, RadialLayout, RadialNode, RadialPoint};

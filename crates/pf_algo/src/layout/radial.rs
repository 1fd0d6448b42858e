//! Radial cluster layout.
//!
//! The query sits at the canvas midpoint. Cluster `i` of `n` sits at angle
//! `(i / n) * 2π` on the fixed ellipse around it, measured from the positive
//! x axis with y growing downward (screen coordinates). Positions are rounded
//! to two decimals; angles are exact.

use core::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::Serialize;

use pf_core::model::Cluster;
use pf_core::rounding::{round_2dp, truncate_chars};

use super::{CANVAS_HEIGHT, CANVAS_WIDTH, LABEL_VALUE_LIMIT, RADIUS_X, RADIUS_Y};

const UNKNOWN_KIND: &str = "unknown";

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RadialPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// One satellite: its position plus the cluster evidence shown beside it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RadialNode {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub point: RadialPoint,
    /// Radians in `[0, 2π)`.
    pub angle: f64,
    pub score: f64,
    pub occurrences: usize,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RadialLayout {
    pub center: RadialPoint,
    pub nodes: Vec<RadialNode>,
}

impl RadialLayout {
    /// Center plus one point per cluster.
    pub fn len(&self) -> usize {
        self.nodes.len() + 1
    }

    /// Never empty: the center is always present.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// `"{type}: {value}"` with the value cut to the label limit.
pub fn cluster_label(c: &Cluster) -> String {
    let kind = c.kind.as_deref().unwrap_or(UNKNOWN_KIND);
    let value = truncate_chars(c.value.as_deref().unwrap_or(""), LABEL_VALUE_LIMIT);
    format!("{kind}: {value}")
}

pub fn layout_radial_graph(query_label: &str, clusters: &[Cluster]) -> RadialLayout {
    let cx = CANVAS_WIDTH / 2.0;
    let cy = CANVAS_HEIGHT / 2.0;
    let n = clusters.len();

    let nodes = clusters
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let angle = (i as f64 / n as f64) * TAU;
            RadialNode {
                point: RadialPoint {
                    x: round_2dp(cx + RADIUS_X * angle.cos()),
                    y: round_2dp(cy + RADIUS_Y * angle.sin()),
                    label: cluster_label(c),
                },
                angle,
                score: c.score.unwrap_or(0.0),
                occurrences: c.occurrences.len(),
            }
        })
        .collect();

    RadialLayout {
        center: RadialPoint { x: cx, y: cy, label: query_label.to_string() },
        nodes,
    }
}

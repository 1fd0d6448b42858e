//! pf_core: Core types shared by every layer of the profile projection engine.
//!
//! This crate is **I/O-free**. It defines the stable types the other crates
//! (`pf_io`, `pf_algo`, `pf_pipeline`, `pf_report`, `pf_cli`) agree on:
//!
//! - Document identity: `DocumentId` (`DOC:` + 64-hex)
//! - Strict profile model (`Profile`, `ActorSignal`, `BreachRecord`, `Cluster`)
//! - Risk buckets (`RiskLevel`) and breach year keys (`YearKey`)
//! - Presentation rounding
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod errors {
    use core::fmt;

    /// Minimal error set for identifier parsing.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum CoreError {
        InvalidId,
        InvalidHex,
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::InvalidId => write!(f, "invalid id"),
                CoreError::InvalidHex => write!(f, "invalid hex"),
            }
        }
    }

    impl std::error::Error for CoreError {}
}

pub mod ids;
pub mod model;
pub mod risk;
pub mod rounding;
pub mod year;

pub use errors::CoreError;
pub use ids::DocumentId;
pub use model::{ActorSignal, BreachRecord, Cluster, Occurrence, Profile, Scores};
pub use risk::RiskLevel;
pub use year::YearKey;

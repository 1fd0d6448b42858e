//! pf_pipeline: load → convert → project, plus the single-slot view cache.
//! JSON, limits and hashing stay in `pf_io`; the math stays in `pf_algo`.

#![forbid(unsafe_code)]

use std::fmt;
use std::path::Path;

pub mod cache;
pub mod load;
pub mod project;

pub use cache::ViewCache;
pub use project::{project_document, project_profile, ClusterEvidence, ProfileViews};

/// Single error surface for the orchestration.
#[derive(Debug)]
pub enum PipelineError {
    /// Unreadable input or size limit.
    Io(String),
    /// No usable document: invalid JSON or a non-object root.
    Upstream(String),
    /// Identity computation failed.
    Build(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Io(m) => write!(f, "io: {m}"),
            PipelineError::Upstream(m) => write!(f, "upstream: {m}"),
            PipelineError::Build(m) => write!(f, "build: {m}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<pf_io::IoError> for PipelineError {
    fn from(e: pf_io::IoError) -> Self {
        use pf_io::IoError;
        match e {
            IoError::Read(err) => PipelineError::Io(format!("read: {err}")),
            IoError::Limit(m) => PipelineError::Io(format!("limit: {m}")),
            IoError::Json { pointer, msg } => PipelineError::Upstream(format!("json {pointer}: {msg}")),
            IoError::Shape(m) => PipelineError::Upstream(m),
            IoError::Hash(m) => PipelineError::Build(format!("hash: {m}")),
        }
    }
}

/// Convenience entry: load a local document and project it.
pub fn run_from_path<P: AsRef<Path>>(path: P) -> Result<ProfileViews, PipelineError> {
    let doc = load::load_from_path(path.as_ref())?;
    Ok(project_profile(&doc.id, &doc.profile))
}

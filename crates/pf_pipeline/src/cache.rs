//! Single-slot memo for projected views, keyed by document identity.
//!
//! A new document replaces the slot; the same document (same canonical bytes)
//! hands back the views already computed.

use std::sync::Arc;

use pf_core::ids::DocumentId;
use pf_io::ProfileDocument;

use crate::project::{project_profile, ProfileViews};

#[derive(Debug, Default)]
pub struct ViewCache {
    slot: Option<(DocumentId, Arc<ProfileViews>)>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Views for `doc`, recomputed only when its identity differs from the held one.
    pub fn project(&mut self, doc: &ProfileDocument) -> Arc<ProfileViews> {
        if let Some((id, views)) = &self.slot {
            if *id == doc.id {
                tracing::trace!(document = %id, "view cache hit");
                return Arc::clone(views);
            }
        }
        tracing::trace!(document = %doc.id, "view cache miss");
        let views = Arc::new(project_profile(&doc.id, &doc.profile));
        self.slot = Some((doc.id.clone(), Arc::clone(&views)));
        views
    }

    /// Views currently held, if any.
    pub fn current(&self) -> Option<Arc<ProfileViews>> {
        self.slot.as_ref().map(|(_, v)| Arc::clone(v))
    }

    pub fn current_id(&self) -> Option<&DocumentId> {
        self.slot.as_ref().map(|(id, _)| id)
    }

    /// Drop the held views (a new query was issued).
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

//! pf_io: the only crate that touches untrusted bytes.
//!
//! - `document`: partial-record view of the inbound profile document and its
//!   conversion into the strict `pf_core` model.
//! - `fields`: ordered field-resolution rules (one per attribute).
//! - `loader`: bounded reads from files / readers.
//! - `canonical_json` + `hasher`: canonical bytes and the `DocumentId`.
//!
//! Only boundary failures are errors here (unreadable input, size limit,
//! invalid JSON, non-object root). Malformed *content* is degraded, logged at
//! `debug`, and never raised.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for pf_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / reader errors.
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    /// Input exceeded the configured byte limit.
    #[error("limit exceeded: {0}")]
    Limit(String),

    /// JSON syntax errors with a best-effort pointer.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// Valid JSON whose root is not an object.
    #[error("document shape: {0}")]
    Shape(String),

    /// Hashing unavailable or failed.
    #[error("hash error: {0}")]
    Hash(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json keeps line/column, not a pointer; callers only need the message.
        IoError::Json {
            pointer: "/".to_string(),
            msg: e.to_string(),
        }
    }
}

pub mod canonical_json;
pub mod document;
pub mod fields;
pub mod hasher;
pub mod loader;

pub use document::{ProfileDocument, RawProfileDocument};

pub mod prelude {
    pub use crate::{IoError, IoResult};

    pub use crate::canonical_json::{to_canonical_bytes, write_canonical_file};
    pub use crate::document::{ProfileDocument, RawProfileDocument};
    pub use crate::loader::{load_document_from_path, load_document_from_reader, parse_document};
    #[cfg(feature = "hash")]
    pub use crate::hasher::{document_id, sha256_hex};
}

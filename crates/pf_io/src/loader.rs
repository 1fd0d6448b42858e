//! Loader: bounded reads of one profile document from a local file or a reader.
//! No network I/O; `scheme://` paths are refused.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::document::ProfileDocument;
use crate::{IoError, IoResult};

/// Hard cap on inbound document size.
pub const MAX_DOCUMENT_BYTES: u64 = 8 * 1024 * 1024;

/// Parse a document from bytes already in memory.
pub fn parse_document(bytes: &[u8]) -> IoResult<ProfileDocument> {
    if bytes.len() as u64 > MAX_DOCUMENT_BYTES {
        return Err(limit_error(bytes.len() as u64));
    }
    let value: Value = serde_json::from_slice(bytes)?;
    ProfileDocument::from_value(value)
}

/// Read at most `MAX_DOCUMENT_BYTES` from `reader` and parse.
pub fn load_document_from_reader<R: Read>(reader: R) -> IoResult<ProfileDocument> {
    let mut buf = Vec::new();
    // One extra byte tells "exactly at the limit" apart from "over it".
    reader.take(MAX_DOCUMENT_BYTES + 1).read_to_end(&mut buf)?;
    parse_document(&buf)
}

/// Open a local path and parse.
pub fn load_document_from_path(path: &Path) -> IoResult<ProfileDocument> {
    ensure_local_path(path)?;
    let f = File::open(path)?;
    if let Ok(meta) = f.metadata() {
        if meta.len() > MAX_DOCUMENT_BYTES {
            return Err(limit_error(meta.len()));
        }
    }
    tracing::debug!(path = %path.display(), "loading profile document");
    load_document_from_reader(f)
}

fn ensure_local_path(path: &Path) -> IoResult<()> {
    let s = path.to_string_lossy();
    if s.contains("://") {
        return Err(IoError::Read(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("non-local path refused: {s}"),
        )));
    }
    Ok(())
}

fn limit_error(len: u64) -> IoError {
    IoError::Limit(format!("document is {len} bytes; limit is {MAX_DOCUMENT_BYTES}"))
}

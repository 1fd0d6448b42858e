//! crates/pf_io/src/hasher.rs
//!
//! Deterministic hashing for documents.
//! - `sha256_hex(..)` for raw bytes.
//! - `sha256_canonical(..)` for JSON values (goes through canonical_json).
//! - `document_id(..)` builds the `DOC:` identity the projection cache keys on.
//!
//! Hex digests are **lowercase**.

use serde_json::Value;

use pf_core::ids::DocumentId;

use crate::canonical_json::to_canonical_bytes;
use crate::{IoError, IoResult};

/// SHA-256 of raw bytes as lowercase hex.
#[cfg(feature = "hash")]
pub fn sha256_hex(bytes: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    hex::encode(Sha256::digest(bytes))
}

/// SHA-256 of the canonical bytes of a JSON value.
#[cfg(feature = "hash")]
pub fn sha256_canonical(v: &Value) -> IoResult<String> {
    Ok(sha256_hex(&to_canonical_bytes(v)?))
}

/// Identity of a raw document: `DOC:` + sha256(canonical bytes).
#[cfg(feature = "hash")]
pub fn document_id(raw: &Value) -> IoResult<DocumentId> {
    let hex = sha256_canonical(raw)?;
    DocumentId::from_digest_hex(&hex).map_err(|e| IoError::Hash(e.to_string()))
}

#[cfg(not(feature = "hash"))]
pub fn document_id(_raw: &Value) -> IoResult<DocumentId> {
    Err(IoError::Hash("hash feature disabled".into()))
}

#[cfg(all(test, feature = "hash"))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn key_order_does_not_change_identity() {
        let a: Value = serde_json::from_str(r#"{"query":"x","scores":{"final_threat_score":10}}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{ "scores": { "final_threat_score": 10 }, "query": "x" }"#).unwrap();
        assert_eq!(document_id(&a).unwrap(), document_id(&b).unwrap());
    }

    #[test]
    fn content_changes_identity() {
        let a = json!({"query": "x"});
        let b = json!({"query": "y"});
        let ida = document_id(&a).unwrap();
        assert_ne!(ida, document_id(&b).unwrap());
        assert!(ida.as_str().starts_with("DOC:"));
        assert_eq!(ida.as_hex().len(), 64);
    }
}

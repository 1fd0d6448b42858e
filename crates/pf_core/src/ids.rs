//! crates/pf_core/src/ids.rs
//! Document identity: `DOC:` + 64 lowercase hex (sha256 of the canonical document bytes).
//! Deterministic, ASCII-only, strict shape; no I/O.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const HEX64_LEN: usize = 64;
const DOC_PREFIX: &str = "DOC:";

/// Lowercase hex (length must be exactly 64).
#[inline]
pub fn is_valid_sha256(s: &str) -> bool {
    s.len() == HEX64_LEN
        && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// "DOC:" + 64-hex (lowercase). Two documents with the same canonical bytes share an id.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct DocumentId(String);

impl DocumentId {
    /// Build from a bare 64-hex digest.
    pub fn from_digest_hex(hex: &str) -> Result<Self, CoreError> {
        if is_valid_sha256(hex) {
            Ok(Self(format!("{DOC_PREFIX}{hex}")))
        } else {
            Err(CoreError::InvalidHex)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digest part without the `DOC:` prefix.
    pub fn as_hex(&self) -> &str {
        &self.0[DOC_PREFIX.len()..]
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DocumentId {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix(DOC_PREFIX).ok_or(CoreError::InvalidId)?;
        if is_valid_sha256(rest) {
            Ok(Self(s.to_string()))
        } else {
            Err(CoreError::InvalidId)
        }
    }
}

impl TryFrom<String> for DocumentId {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    #[test]
    fn parse_and_display() {
        let s = format!("DOC:{HEX}");
        let id: DocumentId = s.parse().unwrap();
        assert_eq!(id.as_hex(), HEX);
        assert_eq!(format!("{id}"), s);
        assert_eq!(DocumentId::from_digest_hex(HEX).unwrap(), id);
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!("DOC:abc".parse::<DocumentId>(), Err(CoreError::InvalidId));
        assert_eq!(HEX.parse::<DocumentId>(), Err(CoreError::InvalidId));
        let upper = HEX.to_ascii_uppercase();
        assert!(format!("DOC:{upper}").parse::<DocumentId>().is_err());
        assert_eq!(DocumentId::from_digest_hex("xyz"), Err(CoreError::InvalidHex));
    }
}

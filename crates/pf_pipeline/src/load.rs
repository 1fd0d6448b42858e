//! LOAD stage: one profile document from a local path, a reader, or bytes.

use std::io::Read;
use std::path::Path;

use pf_io::loader;
use pf_io::ProfileDocument;

use crate::PipelineError;

pub fn load_from_path(path: &Path) -> Result<ProfileDocument, PipelineError> {
    Ok(loader::load_document_from_path(path)?)
}

pub fn load_from_reader<R: Read>(reader: R) -> Result<ProfileDocument, PipelineError> {
    Ok(loader::load_document_from_reader(reader)?)
}

pub fn load_from_bytes(bytes: &[u8]) -> Result<ProfileDocument, PipelineError> {
    Ok(loader::parse_document(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_json_is_upstream() {
        assert!(matches!(load_from_bytes(b"<html>"), Err(PipelineError::Upstream(_))));
        assert!(matches!(load_from_bytes(b"\"just a string\""), Err(PipelineError::Upstream(_))));
    }

    #[test]
    fn missing_file_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PipelineError::Io(_)));
    }

    #[test]
    fn reader_input() {
        let doc = load_from_reader(&br#"{"query":"q"}"#[..]).unwrap();
        assert_eq!(doc.profile.query, "q");
    }
}

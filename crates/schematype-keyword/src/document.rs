//! Size-limited reads of JSON documents from disk.

use std::io::Read;
use std::path::Path;

use crate::error::{KeywordError, Result};

/// Read a regular file as UTF-8, refusing anything larger than `max_bytes`.
///
/// The size is checked against metadata first, then enforced again while
/// reading in case the file grows in between.
pub fn read_document(path: &Path, max_bytes: usize) -> Result<String> {
    let io_error = |source| KeywordError::Io {
        path: path.display().to_string(),
        source,
    };

    let metadata = std::fs::metadata(path).map_err(io_error)?;
    if !metadata.is_file() {
        return Err(KeywordError::Refused(format!(
            "not a regular file: {}",
            path.display()
        )));
    }
    if metadata.len() > max_bytes as u64 {
        return Err(KeywordError::Refused(format!(
            "file too large ({} bytes, max {max_bytes}): {}",
            metadata.len(),
            path.display()
        )));
    }

    let file = std::fs::File::open(path).map_err(io_error)?;
    let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
    let mut content = String::new();
    file.take(read_limit)
        .read_to_string(&mut content)
        .map_err(io_error)?;
    if content.len() > max_bytes {
        return Err(KeywordError::Refused(format!(
            "file grew past {max_bytes} bytes while reading: {}",
            path.display()
        )));
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;
    use std::path::PathBuf;

    use super::*;

    fn make_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "schematype-document-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn reads_file_within_limit() {
        let dir = make_temp_dir("ok");
        let path = dir.join("doc.json");
        std::fs::write(&path, "{}").unwrap();

        assert_eq!(read_document(&path, 2).unwrap(), "{}");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn refuses_oversized_file_and_directories() {
        let dir = make_temp_dir("refused");
        let path = dir.join("doc.json");
        std::fs::write(&path, r#"{"a": 1}"#).unwrap();

        assert!(matches!(
            read_document(&path, 4),
            Err(KeywordError::Refused(msg)) if msg.starts_with("file too large (8 bytes, max 4)")
        ));
        assert!(matches!(
            read_document(&dir, 1024),
            Err(KeywordError::Refused(msg)) if msg.starts_with("not a regular file")
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_keeps_io_kind() {
        let dir = make_temp_dir("missing");

        match read_document(&dir.join("absent.json"), 1024) {
            Err(KeywordError::Io { source, .. }) => assert_eq!(source.kind(), ErrorKind::NotFound),
            other => panic!("expected io error, got {other:?}"),
        }

        let _ = std::fs::remove_dir_all(&dir);
    }
}

//! Source discovery and permissive reading.

use crate::config::DocgenConfig;
use crate::error::{DocgenError, Result};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Collect every source file under `config.source_dir` with an allowed extension.
///
/// Within a directory, files are listed before subdirectories and entries
/// are sorted by name, so repeated runs see the same order. Entries that
/// cannot be read are logged and skipped.
pub fn discover_sources(config: &DocgenConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(&config.source_dir)
        .follow_links(false)
        .sort_by(files_first)
    {
        match entry {
            Ok(entry) => {
                if is_source_file(&entry)
                    && config.matches_file_name(&entry.file_name().to_string_lossy())
                {
                    files.push(entry.into_path());
                }
            }
            Err(e) => warn!(error = %e, "Skipping unreadable entry"),
        }
    }

    debug!(count = files.len(), root = %config.source_dir.display(), "Discovered source files");
    files
}

/// Read a file, dropping byte sequences that are not valid UTF-8.
///
/// Line endings are normalized to `\n`.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| DocgenError::read(path, e))?;
    Ok(normalize_newlines(&decode_permissive(&bytes)))
}

/// Decode UTF-8, ignoring invalid bytes instead of failing.
pub fn decode_permissive(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Translate `\r\n` and lone `\r` to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

// Symlinked files are listed, symlinked directories are not followed.
fn is_source_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_permissive_drops_invalid_bytes() {
        assert_eq!(decode_permissive(b"ok \xff\xfe text"), "ok  text");
        assert_eq!(decode_permissive("héllo".as_bytes()), "héllo");
        assert_eq!(decode_permissive(b"cut \xe2\x82"), "cut ");
        assert_eq!(decode_permissive(b""), "");
    }

    #[test]
    fn test_discover_filters_and_orders() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("nested")).unwrap();
        for name in ["b.C", "a.py", "notes.txt", "nested/c.ts"] {
            fs::write(root.join(name), "").unwrap();
        }
        let config = DocgenConfig {
            source_dir: root.to_path_buf(),
            ..DocgenConfig::default()
        };

        let found: Vec<PathBuf> = discover_sources(&config)
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            found,
            vec![
                PathBuf::from("a.py"),
                PathBuf::from("b.C"),
                PathBuf::from("nested/c.ts")
            ]
        );
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_newlines("\r\r\n"), "\n\n");
    }

    #[test]
    fn test_read_source_normalizes_line_endings() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("crlf.c");
        fs::write(&path, b"/*\r\n A\r\n B\r\n*/\r\n// x\ry").unwrap();

        assert_eq!(read_source(&path).unwrap(), "/*\n A\n B\n*/\n// x\ny");
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = read_source(Path::new("/nonexistent/file.py")).unwrap_err();
        assert!(matches!(err, DocgenError::Read { .. }));
    }
}

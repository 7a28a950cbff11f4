//! Table-file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// File-name suffix of loadable tables. Matched case-sensitively.
pub const TABLE_EXTENSION: &str = ".csv";

/// Returns true when the file name ends in [`TABLE_EXTENSION`] exactly.
///
/// A file named just `.csv` qualifies and is profiled like any other.
pub fn is_table_file_name(name: &str) -> bool {
    name.ends_with(TABLE_EXTENSION)
}

/// Lists the table files directly inside a directory.
///
/// Returns regular files sorted by filename; subdirectories are not searched.
pub fn list_table_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(is_table_file_name);
        if matches {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in &["b.csv", "a.csv", ".csv", "notes.txt", "UPPER.CSV", "data.csv.bak"] {
            std::fs::write(dir.path().join(name), "A,B\n1,2\n").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.csv")).unwrap();
        dir
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        assert!(is_table_file_name("train.csv"));
        assert!(!is_table_file_name("train.CSV"));
        assert!(!is_table_file_name("train.csv.gz"));
        assert!(is_table_file_name(".csv"));
    }

    #[test]
    fn test_list_table_files() {
        let dir = create_test_dir();
        let files = list_table_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec![".csv", "a.csv", "b.csv"]);
    }

    #[test]
    fn test_missing_directory() {
        let err = list_table_files(Path::new("/no/such/dir")).unwrap_err();
        assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
    }
}

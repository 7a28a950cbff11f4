//! Input path resolution and per-file profiling.
//!
//! A file argument is profiled on its own; a directory argument profiles every
//! `.csv` file directly inside it. Reports go to an `analysis/` directory next
//! to the inputs as `analysis_<stem>_v2.xlsx`.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{error, info};

use dprof_ingest::{IngestError, TABLE_EXTENSION, list_table_files};
use dprof_model::ProfileOptions;
use dprof_report::profile_file;

use crate::types::{FileReport, FileStatus, RunReport};

/// Name of the output directory created beside the inputs.
pub const ANALYSIS_DIR: &str = "analysis";

#[derive(Debug, Error)]
pub enum RunError {
    #[error("{} is neither a file nor a directory", path.display())]
    InvalidPath { path: PathBuf },

    #[error("failed to create {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to list {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: IngestError,
    },
}

pub type Result<T> = std::result::Result<T, RunError>;

/// Report file name for an input: `analysis_<stem>_v2.xlsx`.
///
/// The stem is the file name without its `.csv` suffix, so `.csv` alone has an empty stem.
pub fn output_file_name(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = match name.strip_suffix(TABLE_EXTENSION) {
        Some(stem) => stem.to_string(),
        None => input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    format!("analysis_{stem}_v2.xlsx")
}

/// Creates `<base>/analysis` unless it already exists.
pub fn ensure_analysis_dir(base: &Path) -> Result<PathBuf> {
    let dir = base.join(ANALYSIS_DIR);
    match std::fs::create_dir(&dir) {
        Ok(()) => {
            info!(path = %dir.display(), "created analysis directory");
            Ok(dir)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(dir),
        Err(source) => Err(RunError::DirectoryCreation { path: dir, source }),
    }
}

/// Profiles `path` (a file or a directory of `.csv` files).
///
/// Failures of individual files are recorded in the returned report and do not
/// stop the run. Errors are returned only for an unusable path or output directory.
pub fn run(path: &Path, predictor: Option<&str>, options: &ProfileOptions) -> Result<RunReport> {
    let start = Instant::now();
    if let Some(predictor) = predictor {
        info!(predictor, "predictor variable recorded");
    }

    let (analysis_dir, inputs) = if path.is_file() {
        let base = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        (ensure_analysis_dir(base)?, vec![path.to_path_buf()])
    } else if path.is_dir() {
        let analysis_dir = ensure_analysis_dir(path)?;
        let inputs = list_table_files(path).map_err(|source| RunError::DirectoryRead {
            path: path.to_path_buf(),
            source,
        })?;
        (analysis_dir, inputs)
    } else {
        return Err(RunError::InvalidPath {
            path: path.to_path_buf(),
        });
    };

    info!(input = %path.display(), files = inputs.len(), "profiling started");

    let files: Vec<FileReport> = inputs
        .into_iter()
        .map(|input| {
            let output = analysis_dir.join(output_file_name(&input));
            let status = match profile_file(&input, &output, options) {
                Ok(outcome) => FileStatus::Written(outcome),
                Err(e) => {
                    error!(input = %input.display(), error = %e, "failed to profile file");
                    FileStatus::Failed(e.to_string())
                }
            };
            FileReport {
                input,
                output,
                status,
            }
        })
        .collect();

    let report = RunReport {
        input: path.to_path_buf(),
        analysis_dir,
        predictor: predictor.map(str::to_string),
        files,
    };
    info!(
        written = report.written_count(),
        failed = report.failed_count(),
        duration_ms = start.elapsed().as_millis(),
        "profiling finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_uses_file_stem() {
        assert_eq!(output_file_name(Path::new("data/train.csv")), "analysis_train_v2.xlsx");
        assert_eq!(
            output_file_name(Path::new("house.prices.csv")),
            "analysis_house.prices_v2.xlsx"
        );
        assert_eq!(output_file_name(Path::new("data/.csv")), "analysis__v2.xlsx");
    }

    #[test]
    fn analysis_dir_creation_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let first = ensure_analysis_dir(dir.path()).unwrap();
        let second = ensure_analysis_dir(dir.path()).unwrap();
        assert_eq!(first, second);
        assert!(first.is_dir());
    }

    #[test]
    fn analysis_path_taken_by_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ANALYSIS_DIR), "not a dir").unwrap();
        let err = ensure_analysis_dir(dir.path()).unwrap_err();
        assert!(matches!(err, RunError::DirectoryCreation { .. }));
    }
}

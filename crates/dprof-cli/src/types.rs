use std::path::PathBuf;

use dprof_report::ProfileOutcome;

/// Outcome of one `dataprof` invocation.
#[derive(Debug)]
pub struct RunReport {
    pub input: PathBuf,
    pub analysis_dir: PathBuf,
    pub predictor: Option<String>,
    pub files: Vec<FileReport>,
}

#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug)]
pub enum FileStatus {
    Written(ProfileOutcome),
    Failed(String),
}

impl FileReport {
    pub fn is_written(&self) -> bool {
        matches!(self.status, FileStatus::Written(_))
    }
}

impl RunReport {
    pub fn written_count(&self) -> usize {
        self.files.iter().filter(|file| file.is_written()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.files.len() - self.written_count()
    }

    pub fn has_errors(&self) -> bool {
        self.failed_count() > 0
    }
}

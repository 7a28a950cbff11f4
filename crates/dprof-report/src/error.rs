use std::path::PathBuf;

use thiserror::Error;

use dprof_ingest::IngestError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;

use std::path::PathBuf;

/// Why a study sheet could not be turned into a dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("failed to read worksheet '{sheet}': {source}")]
    Worksheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),
    #[error("file has no extension")]
    MissingExtension,
}

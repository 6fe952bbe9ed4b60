use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog JSON")]
    Parse(#[from] serde_json::Error),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Section {index} out of range (course has {count} sections)")]
    SectionOutOfRange { index: usize, count: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimingError {
    #[error("Invalid range {start}..={end} for {len} lectures")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("Time must be positive")]
    NonPositiveChunk,
}

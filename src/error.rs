// Fri Oct 16 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Cannot find {} ({source})", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not find resolution limits in {}", path.display())]
    PatternNotFound { path: PathBuf },
    #[error("Cannot write to {} ({source})", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PatchError {
    pub fn path(&self) -> &PathBuf {
        match self {
            PatchError::InputNotFound { path, .. } => path,
            PatchError::PatternNotFound { path } => path,
            PatchError::OutputWriteFailed { path, .. } => path,
        }
    }

    /// Short machine-friendly status used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            PatchError::InputNotFound { .. } => "input_not_found",
            PatchError::PatternNotFound { .. } => "pattern_not_found",
            PatchError::OutputWriteFailed { .. } => "output_write_failed",
        }
    }
}

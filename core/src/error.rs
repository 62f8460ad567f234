use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

/// Failures of the collaborators that feed the index. Any of these aborts a build.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("source unavailable: {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("document is not valid UTF-8: {}", path.display())]
    NotUtf8 { path: PathBuf },

    #[error("cannot walk document directory {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl IndexError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::InvalidData {
            IndexError::NotUtf8 { path }
        } else {
            IndexError::SourceUnavailable { path, source }
        }
    }
}

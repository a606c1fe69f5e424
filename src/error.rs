use std::path::PathBuf;
use thiserror::Error;

/// Failure while rotating a single face file.
#[derive(Debug, Error)]
pub enum RotateError {
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot write {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("path has no file name: {}", .0.display())]
    InvalidPath(PathBuf),
}

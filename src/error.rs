use std::path::PathBuf;
use thiserror::Error;

/// Reasons a rotation controller cannot be built.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationError {
    #[error("cannot rotate over an empty sequence")]
    EmptySequence,

    #[error("auto-advance period must be greater than zero")]
    ZeroPeriod,
}

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error(transparent)]
    Rotation(#[from] RotationError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content file {path}: {source}")]
    Content {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode local store: {0}")]
    Store(#[from] serde_json::Error),

    #[error("no image files found in {0}")]
    NoImages(PathBuf),

    #[error("failed to load image {path}: {reason}")]
    Image { path: PathBuf, reason: String },

    #[error("invalid interval {0}s")]
    Interval(f32),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;

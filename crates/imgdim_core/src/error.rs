//! Error taxonomy for format probing.

use crate::format::ImageFormat;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    /// No known signature matched the input
    #[error("unknown image format")]
    UnknownFormat,

    /// Signature matched but the container is malformed, truncated, or uses
    /// a variant this crate does not handle
    #[error("error parsing {0} image")]
    Parse(ImageFormat),

    /// The underlying reader failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImageError>;

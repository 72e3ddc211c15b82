//! Per-format header parsers.
//!
//! Every parser takes a reader (it seeks to what it needs, starting from
//! absolute offsets) and returns `(width, height)` without touching pixel
//! data. Structural failures come back as [`ImageError::Parse`] with the
//! parser's format tag; short reads surface as I/O errors and are wrapped by
//! the dispatcher.
//!
//! [`ImageError::Parse`]: crate::error::ImageError::Parse

pub mod bmp;
pub(crate) mod boxes;
pub mod dds;
pub mod exr;
pub mod gif;
pub mod ico;
pub mod isobmff;
pub mod jp2;
pub mod jpeg;
pub mod pcx;
pub mod png;
pub mod psd;
pub mod qoi;
pub mod tga;
pub mod tiff;
pub mod vtf;
pub mod webp;
pub mod xcf;

/// Hard ceiling on bytes a parser may scan before giving up.
pub(crate) const SCAN_BYTE_LIMIT: u64 = 64 * 1024;

/// Hard ceiling on boxes, markers, attributes, or directory entries visited.
pub(crate) const SCAN_ITEM_LIMIT: usize = 1024;

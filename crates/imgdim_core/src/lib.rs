//! Header-only image dimension probing.
//!
//! Identifies the container format of a seekable byte stream from its magic
//! numbers and reads the pixel dimensions out of the header, without decoding
//! any pixel data. Every probe is synchronous, re-entrant, and bounded: a
//! parser never scans more than 64 KiB or visits more than 1024
//! boxes/markers/entries before giving up.

pub mod detect;
pub mod error;
pub mod format;
pub mod parse;
pub mod probe;
pub mod reader;

pub use detect::detect;
pub use error::{ImageError, Result};
pub use format::ImageFormat;
pub use probe::{probe, ImageInfo};
pub use reader::{Endian, SeekRead};

//! imgdim - read image dimensions without decoding pixels.
//!
//! Identifies ~19 container formats from their magic numbers and pulls the
//! pixel dimensions straight out of the header. Intended for tooling that
//! triages or indexes image assets, where decoding a full image is wasted
//! work.
//!
//! ```no_run
//! let info = imgdim::get_image_size("photo.webp")?;
//! println!("{}x{} {}", info.width, info.height, info.format);
//! # Ok::<(), imgdim::ImageError>(())
//! ```

pub use imgdim_core::{detect, probe, Endian, ImageError, ImageFormat, ImageInfo, Result, SeekRead};
pub use imgdim_io::{FileReader, MmapReader, Reader};

use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};

/// Anything [`get_image_size`] can measure: a file path, an in-memory
/// buffer, or an already-open seekable reader.
pub enum ImageSource<'a> {
    Path(&'a Path),
    Buffer(&'a [u8]),
    Reader(&'a mut dyn SeekRead),
}

impl<'a> From<&'a Path> for ImageSource<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for ImageSource<'a> {
    fn from(path: &'a PathBuf) -> Self {
        Self::Path(path.as_path())
    }
}

impl<'a> From<&'a str> for ImageSource<'a> {
    fn from(path: &'a str) -> Self {
        Self::Path(Path::new(path))
    }
}

impl<'a> From<&'a [u8]> for ImageSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Buffer(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for ImageSource<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Buffer(bytes)
    }
}

impl<'a, R: Read + Seek> From<&'a mut R> for ImageSource<'a> {
    fn from(reader: &'a mut R) -> Self {
        Self::Reader(reader)
    }
}

/// Adapter that lets the generic probe run over a borrowed trait object.
struct DynReader<'a>(&'a mut dyn SeekRead);

impl Read for DynReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.0.read(buf)
    }
}

impl Seek for DynReader<'_> {
    fn seek(&mut self, pos: std::io::SeekFrom) -> std::io::Result<u64> {
        self.0.seek(pos)
    }
}

/// Reads `(width, height, format)` from a path, buffer, or open reader.
pub fn get_image_size<'a>(source: impl Into<ImageSource<'a>>) -> Result<ImageInfo> {
    match source.into() {
        ImageSource::Path(path) => get_image_size_from_path(path),
        ImageSource::Buffer(bytes) => get_image_size_from_buffer(bytes),
        ImageSource::Reader(reader) => probe(&mut DynReader(reader)),
    }
}

/// Opens the file read-only and probes it.
pub fn get_image_size_from_path(path: impl AsRef<Path>) -> Result<ImageInfo> {
    let mut reader = Reader::open(path)?;
    probe(&mut reader)
}

/// Probes an in-memory buffer.
pub fn get_image_size_from_buffer(bytes: &[u8]) -> Result<ImageInfo> {
    probe(&mut Cursor::new(bytes))
}

/// Probes an already-open seekable reader. The reader is borrowed for the
/// duration of the call and left wherever the parser stopped.
pub fn get_image_size_from_reader<R: Read + Seek>(reader: &mut R) -> Result<ImageInfo> {
    probe(reader)
}

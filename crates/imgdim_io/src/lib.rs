//! File-backed seekable readers for image probing.

mod file;
mod mmap;

pub use file::FileReader;
pub use mmap::MmapReader;

use imgdim_core::Result;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Read-only file source. Memory-mapped when the platform allows it, plain
/// file I/O otherwise.
pub enum Reader {
    Mmap(MmapReader),
    File(FileReader),
}

impl Reader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match MmapReader::open(path) {
            Ok(reader) => Ok(Self::Mmap(reader)),
            Err(_) => Ok(Self::File(FileReader::open(path)?)),
        }
    }

    #[inline]
    pub fn is_mmap(&self) -> bool {
        matches!(self, Self::Mmap(_))
    }

    #[must_use]
    pub fn len(&self) -> u64 {
        match self {
            Self::Mmap(reader) => reader.len(),
            Self::File(reader) => reader.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Read for Reader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Self::Mmap(reader) => reader.read(buf),
            Self::File(reader) => reader.read(buf),
        }
    }
}

impl Seek for Reader {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        match self {
            Self::Mmap(reader) => reader.seek(pos),
            Self::File(reader) => reader.seek(pos),
        }
    }
}

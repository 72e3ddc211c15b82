//! Memory-mapped read-only file reader.

use imgdim_core::{ImageError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Seekable view over a memory-mapped file. Header probes touch a handful
/// of scattered offsets, which a mapping serves without syscalls per read.
pub struct MmapReader {
    mmap: Mmap,
    pos: u64,
}

impl MmapReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let size = file.metadata()?.len();
        if size == 0 {
            return Err(ImageError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot mmap an empty file",
            )));
        }

        let mmap = unsafe { Mmap::map(&file) }?;
        Ok(Self { mmap, pos: 0 })
    }

    #[must_use]
    pub fn len(&self) -> u64 {
        self.mmap.len() as u64
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }
}

impl Read for MmapReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = self.mmap.len();
        let start = usize::try_from(self.pos).unwrap_or(len).min(len);
        let n = (len - start).min(buf.len());
        buf[..n].copy_from_slice(&self.mmap[start..start + n]);
        self.pos += n as u64;
        Ok(n)
    }
}

impl Seek for MmapReader {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let next = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::End(delta) => offset_by(self.len(), delta),
            SeekFrom::Current(delta) => offset_by(self.pos, delta),
        };
        match next {
            Some(position) => {
                self.pos = position;
                Ok(position)
            }
            None => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "seek before the start of the file",
            )),
        }
    }
}

fn offset_by(base: u64, delta: i64) -> Option<u64> {
    if delta >= 0 {
        base.checked_add(delta as u64)
    } else {
        base.checked_sub(delta.unsigned_abs())
    }
}

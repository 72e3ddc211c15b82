//! Endian-aware primitive reads over any seekable byte source.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

use crate::error::Result;

/// The capability every probe operates on. Blanket-implemented for anything
/// that can read and seek; exists so callers can hand over a trait object.
pub trait SeekRead: Read + Seek {}

impl<T: Read + Seek + ?Sized> SeekRead for T {}

/// Byte order carried as a runtime value. TIFF selects it from the header
/// mark and every later read in the file follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    pub fn read_u16<R: Read>(self, r: &mut R) -> Result<u16> {
        Ok(match self {
            Self::Little => r.read_u16::<LittleEndian>()?,
            Self::Big => r.read_u16::<BigEndian>()?,
        })
    }

    pub fn read_u32<R: Read>(self, r: &mut R) -> Result<u32> {
        Ok(match self {
            Self::Little => r.read_u32::<LittleEndian>()?,
            Self::Big => r.read_u32::<BigEndian>()?,
        })
    }
}

/// Reads exactly `N` bytes from the current position.
pub fn read_bytes<const N: usize, R: Read>(r: &mut R) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    r.read_exact(&mut buf)?;
    Ok(buf)
}

/// Reads up to `limit` bytes starting at offset 0. The returned buffer is
/// shorter when the source ends early.
pub fn peek_prefix<R: Read + Seek>(r: &mut R, limit: usize) -> Result<Vec<u8>> {
    r.seek(SeekFrom::Start(0))?;
    let mut buf = vec![0u8; limit];
    let mut filled = 0;
    while filled < limit {
        let n = r.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    buf.truncate(filled);
    Ok(buf)
}

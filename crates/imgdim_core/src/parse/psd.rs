//! PSD: big-endian file header, height stored before width.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{ImageError, Result};
use crate::format::ImageFormat;
use crate::reader::read_bytes;

pub fn read_size<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(4))?;
    let version = r.read_u16::<BigEndian>()?;
    let reserved: [u8; 6] = read_bytes(r)?;
    if version != 1 || reserved != [0; 6] {
        return Err(ImageError::Parse(ImageFormat::Psd));
    }
    r.seek(SeekFrom::Start(14))?;
    let height = r.read_u32::<BigEndian>()?;
    let width = r.read_u32::<BigEndian>()?;
    Ok((width, height))
}

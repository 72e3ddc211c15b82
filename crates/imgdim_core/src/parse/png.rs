//! PNG: dimensions open the IHDR chunk directly after the signature.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{ImageError, Result};
use crate::format::ImageFormat;
use crate::reader::read_bytes;

pub fn read_size<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(12))?;
    let chunk_type: [u8; 4] = read_bytes(r)?;
    if &chunk_type != b"IHDR" {
        return Err(ImageError::Parse(ImageFormat::Png));
    }
    let width = r.read_u32::<BigEndian>()?;
    let height = r.read_u32::<BigEndian>()?;
    Ok((width, height))
}

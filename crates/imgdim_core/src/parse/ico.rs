//! ICO: the first directory entry is reported; a zero byte encodes 256.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{ImageError, Result};
use crate::format::ImageFormat;

pub fn read_size<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(4))?;
    let entry_count = r.read_u16::<LittleEndian>()?;
    if entry_count == 0 {
        return Err(ImageError::Parse(ImageFormat::Ico));
    }
    let width = r.read_u8()?;
    let height = r.read_u8()?;
    Ok((dimension(width), dimension(height)))
}

fn dimension(byte: u8) -> u32 {
    if byte == 0 {
        256
    } else {
        u32::from(byte)
    }
}

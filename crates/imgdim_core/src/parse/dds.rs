//! DDS: little-endian surface header, height stored before width.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::Result;

pub fn read_size<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(12))?;
    let height = r.read_u32::<LittleEndian>()?;
    let width = r.read_u32::<LittleEndian>()?;
    Ok((width, height))
}

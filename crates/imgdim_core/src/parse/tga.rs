//! TGA: dimensions sit at a fixed header offset whether or not the file
//! carries the optional footer.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::Result;

pub fn read_size<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(12))?;
    let width = r.read_u16::<LittleEndian>()?;
    let height = r.read_u16::<LittleEndian>()?;
    Ok((u32::from(width), u32::from(height)))
}

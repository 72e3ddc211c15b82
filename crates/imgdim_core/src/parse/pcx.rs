//! PCX: the window rectangle encodes inclusive pixel bounds.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{ImageError, Result};
use crate::format::ImageFormat;

pub fn read_size<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(4))?;
    let x_min = r.read_u16::<LittleEndian>()?;
    let y_min = r.read_u16::<LittleEndian>()?;
    let x_max = r.read_u16::<LittleEndian>()?;
    let y_max = r.read_u16::<LittleEndian>()?;

    let width = x_max
        .checked_sub(x_min)
        .ok_or(ImageError::Parse(ImageFormat::Pcx))?;
    let height = y_max
        .checked_sub(y_min)
        .ok_or(ImageError::Parse(ImageFormat::Pcx))?;
    Ok((u32::from(width) + 1, u32::from(height) + 1))
}

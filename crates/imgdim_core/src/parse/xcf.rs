//! XCF: canvas dimensions follow the NUL-terminated version magic.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{ImageError, Result};
use crate::format::ImageFormat;

pub fn read_size<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(13))?;
    if r.read_u8()? != 0 {
        return Err(ImageError::Parse(ImageFormat::Xcf));
    }
    let width = r.read_u32::<BigEndian>()?;
    let height = r.read_u32::<BigEndian>()?;
    Ok((width, height))
}

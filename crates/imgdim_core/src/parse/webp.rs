//! WEBP: a RIFF container whose first chunk decides the layout.
//!
//! `VP8 ` is a lossy frame with 14-bit dimensions behind a start code,
//! `VP8L` packs both dimensions into one bitfield, `VP8X` is the extended
//! header with 24-bit minus-one dimensions. Any other leading chunk is a
//! variant this crate does not handle.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{ImageError, Result};
use crate::format::ImageFormat;
use crate::reader::read_bytes;

/// VP8 key frame start code, directly after the 3-byte frame tag.
const VP8_START_CODE: [u8; 3] = [0x9D, 0x01, 0x2A];

/// VP8L stream signature byte.
const VP8L_SIGNATURE: u8 = 0x2F;

pub fn read_size<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(12))?;
    let fourcc: [u8; 4] = read_bytes(r)?;
    match &fourcc {
        b"VP8 " => read_vp8(r),
        b"VP8L" => read_vp8l(r),
        b"VP8X" => read_vp8x(r),
        _ => Err(ImageError::Parse(ImageFormat::Webp)),
    }
}

fn read_vp8<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    // chunk payload starts at 20: 3 bytes of frame tag, the start code, then
    // 14-bit dimensions in the low bits of two little-endian words
    r.seek(SeekFrom::Start(23))?;
    let start_code: [u8; 3] = read_bytes(r)?;
    if start_code != VP8_START_CODE {
        return Err(ImageError::Parse(ImageFormat::Webp));
    }
    let width = r.read_u16::<LittleEndian>()? & 0x3FFF;
    let height = r.read_u16::<LittleEndian>()? & 0x3FFF;
    Ok((u32::from(width), u32::from(height)))
}

fn read_vp8l<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(20))?;
    if r.read_u8()? != VP8L_SIGNATURE {
        return Err(ImageError::Parse(ImageFormat::Webp));
    }
    let bits = r.read_u32::<LittleEndian>()?;
    let width = (bits & 0x3FFF) + 1;
    let height = ((bits >> 14) & 0x3FFF) + 1;
    Ok((width, height))
}

fn read_vp8x<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    // skip the chunk byte count, the flags byte, and 3 reserved bytes
    r.seek(SeekFrom::Start(24))?;
    let width = r.read_u24::<LittleEndian>()? + 1;
    let height = r.read_u24::<LittleEndian>()? + 1;
    Ok((width, height))
}

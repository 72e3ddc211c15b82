//! OpenEXR: dimensions come from the `box2i` bounds of the `dataWindow`
//! attribute.
//!
//! The header is a sequence of attributes: NUL-terminated name,
//! NUL-terminated type, a little-endian byte count, and the payload. An
//! empty name ends the header.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{ImageError, Result};
use crate::format::ImageFormat;
use crate::parse::{SCAN_BYTE_LIMIT, SCAN_ITEM_LIMIT};

/// Attribute names are short; anything longer is a corrupt header.
const MAX_NAME_LEN: usize = 255;

pub fn read_size<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(4))?;
    let version = r.read_u8()?;
    if version != 1 && version != 2 {
        return Err(ImageError::Parse(ImageFormat::Exr));
    }

    r.seek(SeekFrom::Start(8))?;
    for _ in 0..SCAN_ITEM_LIMIT {
        let name = read_text(r)?;
        if name.is_empty() {
            // end of header without a dataWindow
            break;
        }
        let attr_type = read_text(r)?;
        let size = r.read_u32::<LittleEndian>()?;

        if name == b"dataWindow" {
            if attr_type != b"box2i" || size != 16 {
                return Err(ImageError::Parse(ImageFormat::Exr));
            }
            let x_min = r.read_i32::<LittleEndian>()?;
            let y_min = r.read_i32::<LittleEndian>()?;
            let x_max = r.read_i32::<LittleEndian>()?;
            let y_max = r.read_i32::<LittleEndian>()?;
            return window_extent(x_min, y_min, x_max, y_max);
        }

        if u64::from(size) > SCAN_BYTE_LIMIT {
            return Err(ImageError::Parse(ImageFormat::Exr));
        }
        r.seek(SeekFrom::Current(i64::from(size)))?;
        if r.stream_position()? > SCAN_BYTE_LIMIT {
            return Err(ImageError::Parse(ImageFormat::Exr));
        }
    }

    Err(ImageError::Parse(ImageFormat::Exr))
}

fn window_extent(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Result<(u32, u32)> {
    let width = i64::from(x_max) - i64::from(x_min) + 1;
    let height = i64::from(y_max) - i64::from(y_min) + 1;
    if width <= 0 || height <= 0 || width > i64::from(u32::MAX) || height > i64::from(u32::MAX) {
        return Err(ImageError::Parse(ImageFormat::Exr));
    }
    Ok((width as u32, height as u32))
}

/// Reads a NUL-terminated byte string, bounded to keep corrupt headers from
/// turning into unbounded scans.
fn read_text<R: Read>(r: &mut R) -> Result<Vec<u8>> {
    let mut text = Vec::new();
    loop {
        let byte = r.read_u8()?;
        if byte == 0 {
            return Ok(text);
        }
        if text.len() >= MAX_NAME_LEN {
            return Err(ImageError::Parse(ImageFormat::Exr));
        }
        text.push(byte);
    }
}

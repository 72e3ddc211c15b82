//! TIFF: byte order comes from the header mark, dimensions from the first
//! IFD's tag table.
//!
//! Each 12-byte entry is tag, value type, value count, and a 4-byte slot
//! that holds the value itself when it fits. Only SHORT (3) and LONG (4)
//! values are meaningful for the dimension tags.

use std::io::{Read, Seek, SeekFrom};

use crate::error::{ImageError, Result};
use crate::format::ImageFormat;
use crate::parse::SCAN_ITEM_LIMIT;
use crate::reader::{read_bytes, Endian};

const TAG_IMAGE_WIDTH: u16 = 0x0100;
const TAG_IMAGE_LENGTH: u16 = 0x0101;

const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;

pub fn read_size<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(0))?;
    let mark: [u8; 2] = read_bytes(r)?;
    let endian = match &mark {
        b"II" => Endian::Little,
        b"MM" => Endian::Big,
        _ => return Err(ImageError::Parse(ImageFormat::Tiff)),
    };
    if endian.read_u16(r)? != 42 {
        return Err(ImageError::Parse(ImageFormat::Tiff));
    }

    let ifd_offset = endian.read_u32(r)?;
    r.seek(SeekFrom::Start(u64::from(ifd_offset)))?;
    let entry_count = endian.read_u16(r)?;
    if usize::from(entry_count) > SCAN_ITEM_LIMIT {
        return Err(ImageError::Parse(ImageFormat::Tiff));
    }

    let mut width = None;
    let mut height = None;
    for _ in 0..entry_count {
        let tag = endian.read_u16(r)?;
        let value_type = endian.read_u16(r)?;
        let _count = endian.read_u32(r)?;

        let wanted = tag == TAG_IMAGE_WIDTH || tag == TAG_IMAGE_LENGTH;
        // the 4-byte slot holds the value itself for SHORT and LONG
        let value = match value_type {
            TYPE_SHORT => {
                let value = u32::from(endian.read_u16(r)?);
                r.seek(SeekFrom::Current(2))?;
                value
            }
            TYPE_LONG => endian.read_u32(r)?,
            _ if wanted => return Err(ImageError::Parse(ImageFormat::Tiff)),
            _ => {
                r.seek(SeekFrom::Current(4))?;
                continue;
            }
        };

        match tag {
            TAG_IMAGE_WIDTH => width = Some(value),
            TAG_IMAGE_LENGTH => height = Some(value),
            _ => {}
        }
        if let (Some(width), Some(height)) = (width, height) {
            return Ok((width, height));
        }
    }

    Err(ImageError::Parse(ImageFormat::Tiff))
}

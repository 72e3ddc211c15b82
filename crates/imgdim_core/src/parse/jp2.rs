//! JPEG 2000: either a JP2 box wrapper or a raw codestream.
//!
//! Wrapped files carry an `ihdr` box inside the `jp2h` superbox. A raw
//! codestream opens with SOC followed by the SIZ segment, which describes
//! the reference grid and the image offset within it.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};

use crate::detect::JP2_CODESTREAM_MAGIC;
use crate::error::{ImageError, Result};
use crate::format::ImageFormat;
use crate::parse::boxes::find_box;
use crate::parse::SCAN_ITEM_LIMIT;
use crate::reader::read_bytes;

pub fn read_size<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(0))?;
    let magic: [u8; 4] = read_bytes(r)?;
    if magic == JP2_CODESTREAM_MAGIC {
        return read_codestream(r);
    }

    let file_size = r.seek(SeekFrom::End(0))?;
    r.seek(SeekFrom::Start(0))?;
    let mut budget = SCAN_ITEM_LIMIT;

    let jp2h = find_box(r, file_size, b"jp2h", &mut budget, ImageFormat::Jp2)?;
    let jp2h_end = jp2h.payload_end.min(file_size);
    r.seek(SeekFrom::Start(jp2h.payload_start))?;

    let ihdr = find_box(r, jp2h_end, b"ihdr", &mut budget, ImageFormat::Jp2)?;
    r.seek(SeekFrom::Start(ihdr.payload_start))?;
    let height = r.read_u32::<BigEndian>()?;
    let width = r.read_u32::<BigEndian>()?;
    Ok((width, height))
}

/// SOC and the SIZ marker were consumed with the magic; the segment body
/// follows.
fn read_codestream<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    let _length = r.read_u16::<BigEndian>()?;
    let _rsiz = r.read_u16::<BigEndian>()?;
    let x_size = r.read_u32::<BigEndian>()?;
    let y_size = r.read_u32::<BigEndian>()?;
    let x_offset = r.read_u32::<BigEndian>()?;
    let y_offset = r.read_u32::<BigEndian>()?;

    let width = x_size
        .checked_sub(x_offset)
        .ok_or(ImageError::Parse(ImageFormat::Jp2))?;
    let height = y_size
        .checked_sub(y_offset)
        .ok_or(ImageError::Parse(ImageFormat::Jp2))?;
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn boxed(kind: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(8 + payload.len() as u32).to_be_bytes());
        bytes.extend_from_slice(kind);
        bytes.extend_from_slice(payload);
        bytes
    }

    fn jp2_file(width: u32, height: u32) -> Vec<u8> {
        let mut ihdr = Vec::new();
        ihdr.extend_from_slice(&height.to_be_bytes());
        ihdr.extend_from_slice(&width.to_be_bytes());
        ihdr.extend_from_slice(&[0x00, 0x03, 0x07, 0x07, 0x00, 0x00]);

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&[
            0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A,
        ]);
        bytes.extend_from_slice(&boxed(b"ftyp", b"jp2 \x00\x00\x00\x00jp2 "));
        bytes.extend_from_slice(&boxed(b"jp2h", &boxed(b"ihdr", &ihdr)));
        bytes
    }

    #[test]
    fn wrapped_header_box() {
        let bytes = jp2_file(320, 240);
        assert_eq!(read_size(&mut Cursor::new(bytes)).unwrap(), (320, 240));
    }

    #[test]
    fn raw_codestream_grid_offsets() {
        let mut bytes = JP2_CODESTREAM_MAGIC.to_vec();
        bytes.extend_from_slice(&41u16.to_be_bytes());
        bytes.extend_from_slice(&0u16.to_be_bytes());
        bytes.extend_from_slice(&1000u32.to_be_bytes());
        bytes.extend_from_slice(&500u32.to_be_bytes());
        bytes.extend_from_slice(&100u32.to_be_bytes());
        bytes.extend_from_slice(&50u32.to_be_bytes());
        assert_eq!(read_size(&mut Cursor::new(bytes)).unwrap(), (900, 450));
    }

    #[test]
    fn missing_header_superbox_rejected() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&[
            0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A,
        ]);
        bytes.extend_from_slice(&boxed(b"ftyp", b"jp2 \x00\x00\x00\x00jp2 "));
        assert!(read_size(&mut Cursor::new(bytes)).is_err());
    }

    #[test]
    fn offset_beyond_grid_rejected() {
        let mut bytes = JP2_CODESTREAM_MAGIC.to_vec();
        bytes.extend_from_slice(&41u16.to_be_bytes());
        bytes.extend_from_slice(&0u16.to_be_bytes());
        bytes.extend_from_slice(&100u32.to_be_bytes());
        bytes.extend_from_slice(&100u32.to_be_bytes());
        bytes.extend_from_slice(&200u32.to_be_bytes());
        bytes.extend_from_slice(&0u32.to_be_bytes());
        assert!(read_size(&mut Cursor::new(bytes)).is_err());
    }
}

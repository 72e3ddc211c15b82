//! BMP files and raw DIB headers.
//!
//! A BMP is a 14-byte file header in front of a DIB header; a raw DIB starts
//! with the header size directly. BITMAPCOREHEADER (size 12) stores 16-bit
//! dimensions; BITMAPINFOHEADER and its successors store signed 32-bit ones,
//! where a negative height marks top-down row order.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{ImageError, Result};
use crate::format::ImageFormat;

pub fn read_size<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(14))?;
    dib_dimensions(r, ImageFormat::Bmp)
}

/// Raw DIB: the bitmap header starts at byte 0.
pub fn read_dib_size<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(0))?;
    dib_dimensions(r, ImageFormat::Dib)
}

fn dib_dimensions<R: Read + Seek>(r: &mut R, format: ImageFormat) -> Result<(u32, u32)> {
    let header_size = r.read_u32::<LittleEndian>()?;
    match header_size {
        12 => {
            let width = r.read_u16::<LittleEndian>()?;
            let height = r.read_u16::<LittleEndian>()?;
            Ok((u32::from(width), u32::from(height)))
        }
        size if size >= 40 => {
            let width = r.read_i32::<LittleEndian>()?;
            let height = r.read_i32::<LittleEndian>()?;
            if width < 0 {
                return Err(ImageError::Parse(format));
            }
            Ok((width as u32, height.unsigned_abs()))
        }
        _ => Err(ImageError::Parse(format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn bmp_with_info_header(width: i32, height: i32) -> Vec<u8> {
        let mut bytes = b"BM".to_vec();
        bytes.extend_from_slice(&[0; 12]);
        bytes.extend_from_slice(&40u32.to_le_bytes());
        bytes.extend_from_slice(&width.to_le_bytes());
        bytes.extend_from_slice(&height.to_le_bytes());
        bytes.extend_from_slice(&[0; 8]);
        bytes
    }

    #[test]
    fn bottom_up_info_header() {
        let bytes = bmp_with_info_header(4, 4);
        assert_eq!(read_size(&mut Cursor::new(bytes)).unwrap(), (4, 4));
    }

    #[test]
    fn top_down_height_reported_positive() {
        let bytes = bmp_with_info_header(4, -4);
        assert_eq!(read_size(&mut Cursor::new(bytes)).unwrap(), (4, 4));
    }

    #[test]
    fn negative_width_rejected() {
        let bytes = bmp_with_info_header(-4, 4);
        assert!(read_size(&mut Cursor::new(bytes)).is_err());
    }

    #[test]
    fn core_header_dimensions() {
        let mut bytes = b"BM".to_vec();
        bytes.extend_from_slice(&[0; 12]);
        bytes.extend_from_slice(&12u32.to_le_bytes());
        bytes.extend_from_slice(&64u16.to_le_bytes());
        bytes.extend_from_slice(&32u16.to_le_bytes());
        assert_eq!(read_size(&mut Cursor::new(bytes)).unwrap(), (64, 32));
    }

    #[test]
    fn raw_dib_parses_from_zero() {
        let mut bytes = 108u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&640i32.to_le_bytes());
        bytes.extend_from_slice(&480i32.to_le_bytes());
        assert_eq!(read_dib_size(&mut Cursor::new(bytes)).unwrap(), (640, 480));
    }

    #[test]
    fn undersized_header_rejected() {
        let mut bytes = b"BM".to_vec();
        bytes.extend_from_slice(&[0; 12]);
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&[0; 8]);
        assert!(read_size(&mut Cursor::new(bytes)).is_err());
    }
}

//! JPEG: scan the marker stream for a start-of-frame segment.
//!
//! Markers are `FF`-prefixed; fill `FF` bytes may run before the marker
//! byte. Frame dimensions live in the SOF segment. Hitting start-of-scan
//! first means the frame header is missing and dimensions are not
//! recoverable without entropy decoding.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{ImageError, Result};
use crate::format::ImageFormat;
use crate::parse::{SCAN_BYTE_LIMIT, SCAN_ITEM_LIMIT};

/// SOF0..SOF15 excluding DHT (C4), the reserved C8, and DAC (CC).
fn is_sof(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC)
}

pub fn read_size<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(2))?;
    let mut scanned: u64 = 0;

    for _ in 0..SCAN_ITEM_LIMIT {
        // resync to the next FF, then skip fill bytes
        let mut byte = r.read_u8()?;
        while byte != 0xFF {
            scanned += 1;
            if scanned > SCAN_BYTE_LIMIT {
                return Err(ImageError::Parse(ImageFormat::Jpeg));
            }
            byte = r.read_u8()?;
        }
        let mut marker = r.read_u8()?;
        while marker == 0xFF {
            scanned += 1;
            if scanned > SCAN_BYTE_LIMIT {
                return Err(ImageError::Parse(ImageFormat::Jpeg));
            }
            marker = r.read_u8()?;
        }

        if is_sof(marker) {
            // segment length, then precision, then the frame rectangle
            r.seek(SeekFrom::Current(3))?;
            let height = r.read_u16::<BigEndian>()?;
            let width = r.read_u16::<BigEndian>()?;
            return Ok((u32::from(width), u32::from(height)));
        }

        match marker {
            0xDA => return Err(ImageError::Parse(ImageFormat::Jpeg)),
            0x01 | 0xD0..=0xD9 => {}
            _ => {
                let length = r.read_u16::<BigEndian>()?;
                if length < 2 {
                    return Err(ImageError::Parse(ImageFormat::Jpeg));
                }
                r.seek(SeekFrom::Current(i64::from(length) - 2))?;
            }
        }

        if r.stream_position()? > SCAN_BYTE_LIMIT {
            return Err(ImageError::Parse(ImageFormat::Jpeg));
        }
    }

    Err(ImageError::Parse(ImageFormat::Jpeg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn segment(marker: u8, payload: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0xFF, marker];
        bytes.extend_from_slice(&(payload.len() as u16 + 2).to_be_bytes());
        bytes.extend_from_slice(payload);
        bytes
    }

    fn sof0(width: u16, height: u16) -> Vec<u8> {
        let mut payload = vec![0x08];
        payload.extend_from_slice(&height.to_be_bytes());
        payload.extend_from_slice(&width.to_be_bytes());
        payload.extend_from_slice(&[0x03, 0x01, 0x11, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
        segment(0xC0, &payload)
    }

    #[test]
    fn baseline_frame_after_app_segments() {
        let mut bytes = vec![0xFF, 0xD8];
        bytes.extend_from_slice(&segment(0xE0, b"JFIF\0\x01\x01\x00\x00\x01\x00\x01\x00\x00"));
        bytes.extend_from_slice(&segment(0xDB, &[0x00; 65]));
        bytes.extend_from_slice(&sof0(100, 50));
        assert_eq!(read_size(&mut Cursor::new(bytes)).unwrap(), (100, 50));
    }

    #[test]
    fn progressive_frame_found() {
        let mut bytes = vec![0xFF, 0xD8];
        let mut payload = vec![0x08];
        payload.extend_from_slice(&600u16.to_be_bytes());
        payload.extend_from_slice(&800u16.to_be_bytes());
        payload.push(0x03);
        bytes.extend_from_slice(&segment(0xC2, &payload));
        assert_eq!(read_size(&mut Cursor::new(bytes)).unwrap(), (800, 600));
    }

    #[test]
    fn dht_is_not_a_frame() {
        let mut bytes = vec![0xFF, 0xD8];
        bytes.extend_from_slice(&segment(0xC4, &[0x00; 20]));
        bytes.extend_from_slice(&sof0(32, 16));
        assert_eq!(read_size(&mut Cursor::new(bytes)).unwrap(), (32, 16));
    }

    #[test]
    fn fill_bytes_before_marker() {
        let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xFF, 0xFF];
        bytes.extend_from_slice(&sof0(8, 8)[1..]);
        assert_eq!(read_size(&mut Cursor::new(bytes)).unwrap(), (8, 8));
    }

    #[test]
    fn scan_before_frame_rejected() {
        let mut bytes = vec![0xFF, 0xD8];
        bytes.extend_from_slice(&segment(0xDA, &[0x01, 0x01, 0x00, 0x00, 0x3F, 0x00]));
        bytes.extend_from_slice(&[0x55; 32]);
        assert!(read_size(&mut Cursor::new(bytes)).is_err());
    }

    #[test]
    fn truncated_stream_rejected() {
        let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        assert!(read_size(&mut Cursor::new(bytes)).is_err());
    }
}

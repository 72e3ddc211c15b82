//! ISO-style box records, shared by the BMFF and JP2 walkers.
//!
//! A box is a 32-bit big-endian length followed by a FourCC type. A length of
//! 1 signals a 64-bit extended length after the type; a length of 0 means the
//! box runs to the end of the file.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{ImageError, Result};
use crate::format::ImageFormat;
use crate::parse::SCAN_BYTE_LIMIT;
use crate::reader::read_bytes;

/// Marks a box that runs to the end of the file.
pub(crate) const TO_END: u64 = u64::MAX;

pub(crate) struct BoxHeader {
    pub kind: [u8; 4],
    pub payload_start: u64,
    /// Absolute end offset, or [`TO_END`] for a run-to-EOF box.
    pub payload_end: u64,
}

pub(crate) fn read_box_header<R: Read + Seek>(
    r: &mut R,
    format: ImageFormat,
) -> Result<BoxHeader> {
    let start = r.stream_position()?;
    let size = r.read_u32::<BigEndian>()?;
    let kind: [u8; 4] = read_bytes(r)?;

    let (payload_start, payload_end) = match size {
        0 => (start + 8, TO_END),
        1 => {
            let extended = r.read_u64::<BigEndian>()?;
            if extended < 16 {
                return Err(ImageError::Parse(format));
            }
            let end = start
                .checked_add(extended)
                .ok_or(ImageError::Parse(format))?;
            (start + 16, end)
        }
        2..=7 => return Err(ImageError::Parse(format)),
        _ => (start + 8, start + u64::from(size)),
    };

    Ok(BoxHeader {
        kind,
        payload_start,
        payload_end,
    })
}

/// Scans sibling boxes from the current position until `end`, returning the
/// first box of the wanted type. `budget` bounds the total boxes visited
/// across one parse call.
pub(crate) fn find_box<R: Read + Seek>(
    r: &mut R,
    end: u64,
    wanted: &[u8; 4],
    budget: &mut usize,
    format: ImageFormat,
) -> Result<BoxHeader> {
    loop {
        let pos = r.stream_position()?;
        if pos >= end || pos >= SCAN_BYTE_LIMIT || *budget == 0 {
            return Err(ImageError::Parse(format));
        }
        *budget -= 1;

        let header = read_box_header(r, format)?;
        if &header.kind == wanted {
            return Ok(header);
        }

        // only a wanted box may run to EOF; anything else must be skippable
        if header.payload_end == TO_END || header.payload_end > end {
            return Err(ImageError::Parse(format));
        }
        r.seek(SeekFrom::Start(header.payload_end))?;
    }
}

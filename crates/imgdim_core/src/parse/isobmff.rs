//! AVIF/HEIC/HEIF: dimensions come from the `ispe` property box nested
//! under `meta` > `iprp` > `ipco`.
//!
//! The walk is iterative over a fixed chain, one budget covering every box
//! visited. The first `ispe` wins; multi-image files may carry one per item.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::Result;
use crate::format::ImageFormat;
use crate::parse::boxes::find_box;
use crate::parse::SCAN_ITEM_LIMIT;

pub fn read_size<R: Read + Seek>(r: &mut R, format: ImageFormat) -> Result<(u32, u32)> {
    let file_size = r.seek(SeekFrom::End(0))?;
    r.seek(SeekFrom::Start(0))?;
    let mut budget = SCAN_ITEM_LIMIT;

    let meta = find_box(r, file_size, b"meta", &mut budget, format)?;
    let meta_end = meta.payload_end.min(file_size);
    // meta is a full box: skip version and flags
    r.seek(SeekFrom::Start(meta.payload_start + 4))?;

    let iprp = find_box(r, meta_end, b"iprp", &mut budget, format)?;
    let iprp_end = iprp.payload_end.min(meta_end);
    r.seek(SeekFrom::Start(iprp.payload_start))?;

    let ipco = find_box(r, iprp_end, b"ipco", &mut budget, format)?;
    let ipco_end = ipco.payload_end.min(iprp_end);
    r.seek(SeekFrom::Start(ipco.payload_start))?;

    let ispe = find_box(r, ipco_end, b"ispe", &mut budget, format)?;
    r.seek(SeekFrom::Start(ispe.payload_start + 4))?;
    let width = r.read_u32::<BigEndian>()?;
    let height = r.read_u32::<BigEndian>()?;
    Ok((width, height))
}

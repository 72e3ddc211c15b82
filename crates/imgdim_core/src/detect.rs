//! Signature-based container detection.
//!
//! Tests run in a fixed priority order: prefixed magics first, then the
//! ISO-BMFF brand sniff, then the prefix-ambiguous families (JPEG 2000 before
//! TIFF), and last the two formats with no leading magic at all, TGA (probed
//! via its optional footer) and raw DIB.

use std::io::{Read, Seek, SeekFrom};

use crate::error::{ImageError, Result};
use crate::format::ImageFormat;
use crate::reader::{peek_prefix, read_bytes};

/// Longest prefix any signature test needs.
const PREFIX_LEN: usize = 32;

pub(crate) const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
pub(crate) const EXR_MAGIC: [u8; 4] = [0x76, 0x2F, 0x31, 0x01];
pub(crate) const JP2_SIGNATURE: [u8; 12] = [
    0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A,
];
pub(crate) const JP2_CODESTREAM_MAGIC: [u8; 4] = [0xFF, 0x4F, 0xFF, 0x51];

/// Header sizes accepted by the raw-DIB fallback; parsers are more lenient.
const DIB_HEADER_SIZES: [u32; 7] = [12, 40, 52, 56, 64, 108, 124];

const TGA_FOOTER: [u8; 18] = *b"TRUEVISION-XFILE.\0";

/// Most compatible brands an `ftyp` box is allowed to carry.
const MAX_COMPATIBLE_BRANDS: u64 = 64;

/// Classifies the stream into a format tag from its first bytes, or returns
/// [`ImageError::UnknownFormat`] when no signature matches.
pub fn detect<R: Read + Seek>(r: &mut R) -> Result<ImageFormat> {
    let p = peek_prefix(r, PREFIX_LEN)?;

    if p.starts_with(&PNG_MAGIC) {
        return Ok(ImageFormat::Png);
    }
    if p.starts_with(b"qoif") {
        return Ok(ImageFormat::Qoi);
    }
    if p.starts_with(b"GIF87a") || p.starts_with(b"GIF89a") {
        return Ok(ImageFormat::Gif);
    }
    if p.starts_with(b"BM") {
        return Ok(ImageFormat::Bmp);
    }
    if p.starts_with(b"8BPS") {
        return Ok(ImageFormat::Psd);
    }
    if p.starts_with(b"gimp xcf ") {
        return Ok(ImageFormat::Xcf);
    }
    if p.starts_with(&EXR_MAGIC) {
        return Ok(ImageFormat::Exr);
    }
    if p.starts_with(b"VTF\0") {
        return Ok(ImageFormat::Vtf);
    }
    if p.starts_with(b"DDS ") {
        return Ok(ImageFormat::Dds);
    }
    if p.len() >= 12 && &p[4..8] == b"ftyp" {
        return classify_brand(r, &p);
    }
    if p.len() >= 12 && p.starts_with(b"RIFF") && &p[8..12] == b"WEBP" {
        return Ok(ImageFormat::Webp);
    }
    if p.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Ok(ImageFormat::Jpeg);
    }
    if p.starts_with(&JP2_SIGNATURE) || p.starts_with(&JP2_CODESTREAM_MAGIC) {
        return Ok(ImageFormat::Jp2);
    }
    if p.starts_with(b"II\x2A\x00") || p.starts_with(b"MM\x00\x2A") {
        return Ok(ImageFormat::Tiff);
    }
    if p.len() >= 3 && p[0] == 0x0A && matches!(p[1], 0 | 2 | 3 | 4 | 5) && p[2] <= 5 {
        return Ok(ImageFormat::Pcx);
    }
    if p.starts_with(&[0x00, 0x00, 0x01, 0x00]) {
        return Ok(ImageFormat::Ico);
    }
    if has_tga_footer(r)? {
        return Ok(ImageFormat::Tga);
    }
    if p.len() >= 4 {
        let header_size = u32::from_le_bytes([p[0], p[1], p[2], p[3]]);
        if DIB_HEADER_SIZES.contains(&header_size) {
            return Ok(ImageFormat::Dib);
        }
    }

    Err(ImageError::UnknownFormat)
}

/// Maps an ISO-BMFF brand to a format tag.
fn brand_format(brand: &[u8]) -> Option<ImageFormat> {
    match brand {
        b"avif" | b"avis" => Some(ImageFormat::Avif),
        b"heic" | b"heix" | b"heim" | b"heis" => Some(ImageFormat::Heic),
        b"mif1" | b"msf1" | b"heif" => Some(ImageFormat::Heif),
        _ => None,
    }
}

/// Classifies an `ftyp` stream by its major brand, falling back to the
/// compatible-brands list that runs to the end of the box.
fn classify_brand<R: Read + Seek>(r: &mut R, prefix: &[u8]) -> Result<ImageFormat> {
    if let Some(format) = brand_format(&prefix[8..12]) {
        return Ok(format);
    }

    let box_len = u32::from_be_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]);
    if box_len < 16 {
        return Err(ImageError::UnknownFormat);
    }

    let count = (u64::from(box_len) - 16) / 4;
    r.seek(SeekFrom::Start(16))?;
    for _ in 0..count.min(MAX_COMPATIBLE_BRANDS) {
        let brand: [u8; 4] = match read_bytes(r) {
            Ok(brand) => brand,
            Err(_) => break,
        };
        if let Some(format) = brand_format(&brand) {
            return Ok(format);
        }
    }

    Err(ImageError::UnknownFormat)
}

/// TGA carries no leading magic; the optional footer is the only signature.
fn has_tga_footer<R: Read + Seek>(r: &mut R) -> Result<bool> {
    let end = r.seek(SeekFrom::End(0))?;
    if end < TGA_FOOTER.len() as u64 {
        return Ok(false);
    }
    r.seek(SeekFrom::Start(end - TGA_FOOTER.len() as u64))?;
    let tail: [u8; 18] = read_bytes(r)?;
    Ok(tail == TGA_FOOTER)
}

//! Detect-then-parse dispatch.

use std::io::{Read, Seek};

use crate::detect::detect;
use crate::error::{ImageError, Result};
use crate::format::ImageFormat;
use crate::parse;

/// Pixel dimensions and the container they were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

/// Identifies the stream's format and reads its dimensions out of the
/// header. The reader is borrowed for the duration of the call; parsers
/// seek from absolute offsets, so probing the same reader twice returns the
/// same result.
pub fn probe<R: Read + Seek>(r: &mut R) -> Result<ImageInfo> {
    let format = detect(r)?;
    let (width, height) = dimensions(r, format).map_err(|err| match err {
        // once a format is identified, every failure is a parse failure
        failure @ ImageError::Parse(_) => failure,
        ImageError::UnknownFormat | ImageError::Io(_) => ImageError::Parse(format),
    })?;
    if width == 0 || height == 0 {
        return Err(ImageError::Parse(format));
    }
    Ok(ImageInfo {
        width,
        height,
        format,
    })
}

fn dimensions<R: Read + Seek>(r: &mut R, format: ImageFormat) -> Result<(u32, u32)> {
    match format {
        ImageFormat::Avif | ImageFormat::Heic | ImageFormat::Heif => {
            parse::isobmff::read_size(r, format)
        }
        ImageFormat::Bmp => parse::bmp::read_size(r),
        ImageFormat::Dds => parse::dds::read_size(r),
        ImageFormat::Dib => parse::bmp::read_dib_size(r),
        ImageFormat::Exr => parse::exr::read_size(r),
        ImageFormat::Gif => parse::gif::read_size(r),
        ImageFormat::Ico => parse::ico::read_size(r),
        ImageFormat::Jp2 => parse::jp2::read_size(r),
        ImageFormat::Jpeg => parse::jpeg::read_size(r),
        ImageFormat::Pcx => parse::pcx::read_size(r),
        ImageFormat::Png => parse::png::read_size(r),
        ImageFormat::Psd => parse::psd::read_size(r),
        ImageFormat::Qoi => parse::qoi::read_size(r),
        ImageFormat::Tga => parse::tga::read_size(r),
        ImageFormat::Tiff => parse::tiff::read_size(r),
        ImageFormat::Vtf => parse::vtf::read_size(r),
        ImageFormat::Webp => parse::webp::read_size(r),
        ImageFormat::Xcf => parse::xcf::read_size(r),
    }
}

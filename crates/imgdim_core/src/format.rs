//! Recognized container formats.

use std::fmt;

/// Container formats this crate can identify and measure.
///
/// AVIF, HEIC, and HEIF are distinct tags derived from the ISO-BMFF major
/// brand; `Jp2` covers both the JP2 file wrapper and the raw codestream;
/// `Dib` is a raw bitmap header without the `BM` file header in front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Avif,
    Bmp,
    Dds,
    Dib,
    Exr,
    Gif,
    Heic,
    Heif,
    Ico,
    Jp2,
    Jpeg,
    Pcx,
    Png,
    Psd,
    Qoi,
    Tga,
    Tiff,
    Vtf,
    Webp,
    Xcf,
}

impl ImageFormat {
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Avif => "AVIF",
            Self::Bmp => "BMP",
            Self::Dds => "DDS",
            Self::Dib => "DIB",
            Self::Exr => "OpenEXR",
            Self::Gif => "GIF",
            Self::Heic => "HEIC",
            Self::Heif => "HEIF",
            Self::Ico => "ICO",
            Self::Jp2 => "JPEG 2000",
            Self::Jpeg => "JPEG",
            Self::Pcx => "PCX",
            Self::Png => "PNG",
            Self::Psd => "PSD",
            Self::Qoi => "QOI",
            Self::Tga => "TGA",
            Self::Tiff => "TIFF",
            Self::Vtf => "VTF",
            Self::Webp => "WebP",
            Self::Xcf => "XCF",
        }
    }

    /// Primary file extension for the format.
    #[must_use]
    #[inline]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Avif => "avif",
            Self::Bmp => "bmp",
            Self::Dds => "dds",
            Self::Dib => "dib",
            Self::Exr => "exr",
            Self::Gif => "gif",
            Self::Heic => "heic",
            Self::Heif => "heif",
            Self::Ico => "ico",
            Self::Jp2 => "jp2",
            Self::Jpeg => "jpg",
            Self::Pcx => "pcx",
            Self::Png => "png",
            Self::Psd => "psd",
            Self::Qoi => "qoi",
            Self::Tga => "tga",
            Self::Tiff => "tiff",
            Self::Vtf => "vtf",
            Self::Webp => "webp",
            Self::Xcf => "xcf",
        }
    }

    /// IANA media type, or the conventional `x-` type where none is
    /// registered.
    #[must_use]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::Avif => "image/avif",
            Self::Bmp | Self::Dib => "image/bmp",
            Self::Dds => "image/vnd-ms.dds",
            Self::Exr => "image/x-exr",
            Self::Gif => "image/gif",
            Self::Heic => "image/heic",
            Self::Heif => "image/heif",
            Self::Ico => "image/vnd.microsoft.icon",
            Self::Jp2 => "image/jp2",
            Self::Jpeg => "image/jpeg",
            Self::Pcx => "image/x-pcx",
            Self::Png => "image/png",
            Self::Psd => "image/vnd.adobe.photoshop",
            Self::Qoi => "image/x-qoi",
            Self::Tga => "image/x-tga",
            Self::Tiff => "image/tiff",
            Self::Vtf => "image/vnd.valve.source.texture",
            Self::Webp => "image/webp",
            Self::Xcf => "image/x-xcf",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

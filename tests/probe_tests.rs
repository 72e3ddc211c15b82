use imgdim::{get_image_size_from_buffer, ImageError, ImageFormat};

fn png_chunk(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut chunk = Vec::new();
    chunk.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    chunk.extend_from_slice(chunk_type);
    chunk.extend_from_slice(payload);
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(payload);
    chunk.extend_from_slice(&hasher.finalize().to_be_bytes());
    chunk
}

fn make_png(width: u32, height: u32) -> Vec<u8> {
    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);

    let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(&png_chunk(b"IHDR", &ihdr));
    data.extend_from_slice(&png_chunk(b"IEND", &[]));
    data
}

#[test]
fn png_2x3() {
    let info = get_image_size_from_buffer(&make_png(2, 3)).unwrap();
    assert_eq!((info.width, info.height, info.format), (2, 3, ImageFormat::Png));
}

#[test]
fn gif89a_16x8() {
    let data = [
        0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x10, 0x00, 0x08, 0x00, 0xF7, 0x00, 0x00,
    ];
    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!((info.width, info.height, info.format), (16, 8, ImageFormat::Gif));
}

#[test]
fn bmp_4x4_bottom_up() {
    let mut data = b"BM".to_vec();
    data.extend_from_slice(&[0; 12]);
    data.extend_from_slice(&[
        0x28, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00,
    ]);
    data.extend_from_slice(&[0x01, 0x00, 0x18, 0x00]);
    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!((info.width, info.height, info.format), (4, 4, ImageFormat::Bmp));
}

#[test]
fn bmp_4x4_top_down() {
    let mut data = b"BM".to_vec();
    data.extend_from_slice(&[0; 12]);
    data.extend_from_slice(&[
        0x28, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0xFC, 0xFF, 0xFF, 0xFF,
    ]);
    data.extend_from_slice(&[0x01, 0x00, 0x18, 0x00]);
    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!((info.width, info.height, info.format), (4, 4, ImageFormat::Bmp));
}

#[test]
fn jpeg_baseline_100x50() {
    let mut data = vec![
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00,
        0x00, 0x01, 0x00, 0x01, 0x00, 0x00,
    ];
    data.extend_from_slice(&[
        0xFF, 0xC0, 0x00, 0x11, 0x08, 0x00, 0x32, 0x00, 0x64, 0x03, 0x01, 0x11, 0x00, 0x02,
        0x11, 0x01, 0x03, 0x11, 0x01,
    ]);
    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(
        (info.width, info.height, info.format),
        (100, 50, ImageFormat::Jpeg)
    );
}

#[test]
fn webp_vp8x_1920x1080() {
    let mut data = b"RIFF".to_vec();
    data.extend_from_slice(&22u32.to_le_bytes());
    data.extend_from_slice(b"WEBPVP8X");
    data.extend_from_slice(&[
        0x0A, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x7F, 0x07, 0x00, 0x37, 0x04, 0x00,
    ]);
    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(
        (info.width, info.height, info.format),
        (1920, 1080, ImageFormat::Webp)
    );
}

#[test]
fn truncated_prefixes_never_give_a_wrong_answer() {
    let data = make_png(640, 480);
    for cut in 0..24 {
        assert!(
            get_image_size_from_buffer(&data[..cut]).is_err(),
            "prefix of {cut} bytes should not parse"
        );
    }
}

#[test]
fn unknown_signature_reported_without_format() {
    let data = [0x13, 0x37, 0x00, 0x42, 0x99, 0xAB, 0xCD, 0xEF];
    assert!(matches!(
        get_image_size_from_buffer(&data),
        Err(ImageError::UnknownFormat)
    ));
}

/// Counts bytes handed out, to pin down the bounded-work guarantee.
struct MeteredReader {
    inner: std::io::Cursor<Vec<u8>>,
    bytes_read: u64,
}

impl std::io::Read for MeteredReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.bytes_read += n as u64;
        Ok(n)
    }
}

impl std::io::Seek for MeteredReader {
    fn seek(&mut self, pos: std::io::SeekFrom) -> std::io::Result<u64> {
        self.inner.seek(pos)
    }
}

#[test]
fn jpeg_scan_is_bounded() {
    // a megabyte of comment segments and never a frame header
    let mut data = vec![0xFF, 0xD8];
    for _ in 0..2048 {
        data.extend_from_slice(&[0xFF, 0xFE, 0x02, 0x00]);
        data.extend_from_slice(&[0x55; 0x1FE]);
    }

    let mut reader = MeteredReader {
        inner: std::io::Cursor::new(data),
        bytes_read: 0,
    };
    assert!(imgdim::get_image_size_from_reader(&mut reader).is_err());
    assert!(
        reader.bytes_read < 96 * 1024,
        "parser read {} bytes",
        reader.bytes_read
    );
}

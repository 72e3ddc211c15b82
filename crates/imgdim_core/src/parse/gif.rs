//! GIF: logical screen descriptor follows the 6-byte version magic.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::Result;

pub fn read_size<R: Read + Seek>(r: &mut R) -> Result<(u32, u32)> {
    r.seek(SeekFrom::Start(6))?;
    let width = r.read_u16::<LittleEndian>()?;
    let height = r.read_u16::<LittleEndian>()?;
    Ok((u32::from(width), u32::from(height)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_screen_descriptor() {
        let bytes = *b"GIF89a\x10\x00\x08\x00\xF7\x00\x00";
        assert_eq!(read_size(&mut Cursor::new(bytes)).unwrap(), (16, 8));
    }

    #[test]
    fn truncated_header_rejected() {
        assert!(read_size(&mut Cursor::new(b"GIF89a\x10")).is_err());
    }
}

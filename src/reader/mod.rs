#![doc = r#"
A positioned cursor over an in-memory byte buffer.

All four parsers in this crate walk a fully loaded buffer through a
[`Reader`]: primitive little/big-endian integer reads, four-character tags,
MIDI variable-length quantities, plus `peek` and a relative seek. The seek
exists for one caller in particular — MIDI running status rewinds the cursor
exactly one byte when a data byte arrives where a status byte was expected.

Reads never panic; running past the end of the buffer yields a
[`ReaderError`] carrying the position at which the read began.
"#]

mod error;
pub use error::*;

use crate::FourCC;

/// A forward cursor over a byte slice, tracking its own position.
#[derive(Debug, Clone)]
pub struct Reader<'slc> {
    bytes: &'slc [u8],
    pos: usize,
}

impl<'slc> Reader<'slc> {
    /// Create a reader over a byte slice, positioned at the start.
    pub const fn from_byte_slice(bytes: &'slc [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// The current position in the buffer.
    pub const fn buffer_position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub const fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// True if the cursor has reached the end of the buffer.
    pub const fn is_empty(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Look at the next byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> ReadResult<u8> {
        let byte = *self.bytes.get(self.pos).ok_or(ReaderError::oob(self.pos))?;
        self.pos += 1;
        Ok(byte)
    }

    /// Borrow the next `n` bytes and advance past them.
    pub fn read_exact(&mut self, n: usize) -> ReadResult<&'slc [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(ReaderError::oob(self.pos))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Read a fixed-size byte array.
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let slice = self.read_exact(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    /// Read a four-character tag.
    pub fn read_fourcc(&mut self) -> ReadResult<FourCC> {
        self.read_exact_size::<4>().map(FourCC::new)
    }

    /// Read a little-endian `u16`.
    pub fn read_u16_le(&mut self) -> ReadResult<u16> {
        self.read_exact_size::<2>().map(u16::from_le_bytes)
    }

    /// Read a little-endian `u32`.
    pub fn read_u32_le(&mut self) -> ReadResult<u32> {
        self.read_exact_size::<4>().map(u32::from_le_bytes)
    }

    /// Read a big-endian `u16`.
    pub fn read_u16_be(&mut self) -> ReadResult<u16> {
        self.read_exact_size::<2>().map(u16::from_be_bytes)
    }

    /// Read a big-endian `u32`.
    pub fn read_u32_be(&mut self) -> ReadResult<u32> {
        self.read_exact_size::<4>().map(u32::from_be_bytes)
    }

    /// Read a MIDI variable-length quantity.
    ///
    /// Seven payload bits per byte, most significant group first; the high
    /// bit of each byte marks continuation. The encoding caps at four bytes
    /// (28 payload bits); a fifth continuation byte is malformed.
    pub fn read_vlq(&mut self) -> ReadResult<u32> {
        let start = self.pos;
        let mut value: u32 = 0;
        for _ in 0..4 {
            let byte = self.read_u8()?;
            value = (value << 7) | u32::from(byte & 0x7F);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(ReaderError::new(start, ReaderErrorKind::OverlongVlq))
    }

    /// Advance past `n` bytes without inspecting them.
    pub fn skip(&mut self, n: usize) -> ReadResult<()> {
        self.read_exact(n).map(|_| ())
    }

    /// Move the cursor by a signed offset from its current position.
    ///
    /// The destination must stay within `0..=len`; a seek outside the
    /// buffer fails without moving the cursor.
    pub fn seek_relative(&mut self, offset: i64) -> ReadResult<()> {
        let dest = (self.pos as i64)
            .checked_add(offset)
            .filter(|&d| d >= 0 && d as usize <= self.bytes.len())
            .ok_or(ReaderError::oob(self.pos))?;
        self.pos = dest as usize;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn endian_reads() {
        let mut reader = Reader::from_byte_slice(&[0x01, 0x02, 0x01, 0x02]);
        assert_eq!(reader.read_u16_le().unwrap(), 0x0201);
        assert_eq!(reader.read_u16_be().unwrap(), 0x0102);
        assert!(reader.is_empty());
    }

    #[test]
    fn vlq_single_byte() {
        let mut reader = Reader::from_byte_slice(&[0x00, 0x40, 0x7F]);
        assert_eq!(reader.read_vlq().unwrap(), 0x00);
        assert_eq!(reader.read_vlq().unwrap(), 0x40);
        assert_eq!(reader.read_vlq().unwrap(), 0x7F);
    }

    #[test]
    fn vlq_multi_byte() {
        // canonical examples from the SMF specification
        let mut reader = Reader::from_byte_slice(&[0x81, 0x00, 0xC0, 0x00, 0xFF, 0xFF, 0xFF, 0x7F]);
        assert_eq!(reader.read_vlq().unwrap(), 0x80);
        assert_eq!(reader.read_vlq().unwrap(), 0x2000);
        assert_eq!(reader.read_vlq().unwrap(), 0x0FFF_FFFF);
    }

    #[test]
    fn vlq_overlong_is_rejected() {
        let mut reader = Reader::from_byte_slice(&[0x80, 0x80, 0x80, 0x80, 0x00]);
        let err = reader.read_vlq().unwrap_err();
        assert_eq!(err.error_kind(), &ReaderErrorKind::OverlongVlq);
    }

    #[test]
    fn seek_relative_rewinds_one_byte() {
        let mut reader = Reader::from_byte_slice(&[1, 2, 3]);
        reader.read_u8().unwrap();
        reader.read_u8().unwrap();
        reader.seek_relative(-1).unwrap();
        assert_eq!(reader.read_u8().unwrap(), 2);
    }

    #[test]
    fn seek_out_of_bounds_does_not_move() {
        let mut reader = Reader::from_byte_slice(&[1, 2, 3]);
        reader.read_u8().unwrap();
        assert!(reader.seek_relative(-2).is_err());
        assert_eq!(reader.buffer_position(), 1);
        assert!(reader.seek_relative(10).is_err());
        assert_eq!(reader.buffer_position(), 1);
    }

    #[test]
    fn read_past_end() {
        let mut reader = Reader::from_byte_slice(&[1]);
        assert!(reader.read_u32_le().is_err());
        // a failed read leaves the cursor where the read began
        assert_eq!(reader.buffer_position(), 0);
    }
}

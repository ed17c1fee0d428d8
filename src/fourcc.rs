use core::fmt;

#[doc = r#"
A four-character code: the 4-byte ASCII tag that identifies a chunk's type.

Every chunk in a RIFF-family container, and both MIDI chunk ids, are tagged
with one of these. Tags are compared byte-for-byte; note that RIFF tags may
carry significant trailing spaces (`AVI `, `fmt `).

# Example
```rust
use chunkix::FourCC;

let tag = FourCC::new(*b"WAVE");
assert_eq!(tag, FourCC::WAVE);
assert_eq!(tag.to_string(), "WAVE");
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// The outermost RIFF container tag.
    pub const RIFF: Self = Self(*b"RIFF");
    /// A nested list container.
    pub const LIST: Self = Self(*b"LIST");
    /// An info container.
    pub const INFO: Self = Self(*b"INFO");
    /// The WAVE form type.
    pub const WAVE: Self = Self(*b"WAVE");
    /// The AVI form type (trailing space is significant).
    pub const AVI: Self = Self(*b"AVI ");
    /// WAV format descriptor subchunk (trailing space is significant).
    pub const FMT: Self = Self(*b"fmt ");
    /// WAV sample data subchunk.
    pub const DATA: Self = Self(*b"data");
    /// WAV fact subchunk.
    pub const FACT: Self = Self(*b"fact");
    /// AVI header list form.
    pub const HDRL: Self = Self(*b"hdrl");
    /// AVI frame data list form.
    pub const MOVI: Self = Self(*b"movi");
    /// AVI main header subchunk.
    pub const AVIH: Self = Self(*b"avih");
    /// Padding chunk, ignorable.
    pub const JUNK: Self = Self(*b"JUNK");
    /// MIDI file header chunk id.
    pub const MTHD: Self = Self(*b"MThd");
    /// MIDI track chunk id.
    pub const MTRK: Self = Self(*b"MTrk");

    /// Create a tag from four bytes.
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// The raw tag bytes.
    pub const fn bytes(&self) -> [u8; 4] {
        self.0
    }
}

impl From<[u8; 4]> for FourCC {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl PartialEq<[u8; 4]> for FourCC {
    fn eq(&self, other: &[u8; 4]) -> bool {
        &self.0 == other
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{b:02x}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCC(\"{self}\")")
    }
}

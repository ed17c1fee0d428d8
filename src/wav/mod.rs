#![doc = r#"
WAVE audio decoding on top of the RIFF container layer.

A WAV file is a single `RIFF` chunk whose form type is `WAVE`; the form's
payload is its own sequence of `{tag, length}` subchunks. The decoder scans
them in whatever order they appear — `fmt ` and `data` are located by tag,
never by position — and keeps:

- `fmt ` → a fixed [`WavFormat`] record describing the PCM stream
- `data` → the raw sample bytes, copied verbatim into a [`WavData`]
- `fact` → the sample-frame count some encoders write

Any other tag is skipped with a logged warning. A `WAVE` form with no
subchunks at all decodes successfully to an empty [`WavFile`]; consumers
must check [`format`](WavFile::format) and [`data`](WavFile::data) before
submitting anything to a playback voice.
"#]

mod format;
pub use format::*;

use std::{io, path::Path};

use log::warn;
use thiserror::Error;

use crate::{
    FourCC,
    reader::Reader,
    riff::{RiffError, RiffFile},
};

/// An error produced while decoding a WAVE file.
#[derive(Debug, Error)]
pub enum WavError {
    /// The RIFF parse failed, or the container's form type is not `WAVE`.
    #[error("not a WAVE file")]
    NotAWav,
    /// A subchunk's declared length ran past the end of the buffer.
    #[error("truncated {0} chunk")]
    BadFile(FourCC),
    /// The input bytes could not be obtained in the first place.
    #[error("could not read input")]
    InvalidArgument(#[from] io::Error),
}

impl From<RiffError> for WavError {
    fn from(err: RiffError) -> Self {
        match err {
            RiffError::NotARiff => Self::NotAWav,
            RiffError::InvalidArgument(e) => Self::InvalidArgument(e),
        }
    }
}

/// A decoded WAVE file.
///
/// Every part is optional: a well-framed file may omit any subchunk, and
/// the decoder never invents one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WavFile {
    format: Option<WavFormat>,
    data: Option<WavData>,
    fact: Option<WavFact>,
}

impl WavFile {
    /// Read a whole file into memory and decode it as WAVE.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WavError> {
        let riff = RiffFile::load(path)?;
        Self::from_riff(riff)
    }

    /// Decode an in-memory buffer as WAVE.
    pub fn parse(bytes: &[u8]) -> Result<Self, WavError> {
        let riff = RiffFile::parse(bytes)?;
        Self::from_riff(riff)
    }

    /// Decode an already-parsed RIFF container as WAVE.
    pub fn from_riff(mut riff: RiffFile) -> Result<Self, WavError> {
        let form = riff
            .next_chunk()
            .and_then(|chunk| chunk.form())
            .ok_or(WavError::NotAWav)?;
        if form.form_type != FourCC::WAVE {
            return Err(WavError::NotAWav);
        }
        Self::scan_subchunks(&form.data)
    }

    fn scan_subchunks(data: &[u8]) -> Result<Self, WavError> {
        let mut reader = Reader::from_byte_slice(data);
        let mut wav = Self::default();

        while !reader.is_empty() {
            let Ok(fourcc) = reader.read_fourcc() else {
                warn!("trailing bytes after last WAVE subchunk, ignoring");
                break;
            };
            let Ok(length) = reader.read_u32_le() else {
                warn!("truncated header for WAVE subchunk {fourcc}, ignoring");
                break;
            };

            match fourcc {
                FourCC::FMT => wav.format = Some(WavFormat::read(&mut reader, length)?),
                FourCC::DATA => {
                    let bytes = reader
                        .read_exact(length as usize)
                        .map_err(|_| WavError::BadFile(FourCC::DATA))?;
                    wav.data = Some(WavData {
                        length,
                        data: bytes.to_vec(),
                    });
                }
                FourCC::FACT => wav.fact = Some(WavFact::read(&mut reader, length)?),
                _ => {
                    warn!("unknown WAVE subchunk {fourcc}, skipping {length} bytes");
                    if reader.skip(length as usize).is_err() {
                        warn!("unknown WAVE subchunk {fourcc} overran the buffer");
                        break;
                    }
                }
            }

            if length % 2 == 1 && !reader.is_empty() {
                let _ = reader.skip(1);
            }
        }

        Ok(wav)
    }

    /// The decoded `fmt ` record, if the file carried one.
    pub const fn format(&self) -> Option<&WavFormat> {
        self.format.as_ref()
    }

    /// The raw PCM payload, if the file carried a `data` chunk.
    pub const fn data(&self) -> Option<&WavData> {
        self.data.as_ref()
    }

    /// The `fact` record, if the file carried one.
    pub const fn fact(&self) -> Option<&WavFact> {
        self.fact.as_ref()
    }
}

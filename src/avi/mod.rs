#![doc = r#"
AVI video decoding on top of the RIFF container layer.

An AVI file is a `RIFF` chunk with form type `AVI ` (trailing space). The
decoder walks the form's payload headers and dispatches `LIST` chunks by
their *inner* form tag:

- `hdrl` → the nested `avih` subchunk is read into the fixed [`AviHeader`]
  record, and frame storage is reserved for its declared `total_frames`
- `movi` → the list payload becomes one [`AviFrame`], appended in file order

`JUNK` and `INFO` chunks are skipped quietly, anything else with a logged
warning; chunk order is never assumed, and `total_frames` is a reservation
hint rather than a bound. A truncated stream may capture fewer frames than
the header declares — [`frame_count`](AviFile::frame_count) reports the
declaration, [`frames_captured`](AviFile::frames_captured) the reality, and
[`frame`](AviFile::frame) returns `None` rather than indexing out of range.

This is a deliberately flattened reader: a `movi` list is captured as one
payload buffer, not descended into `00dc`-style stream subchunks.
"#]

mod header;
pub use header::*;

use std::{io, path::Path};

use log::{debug, warn};
use thiserror::Error;

use crate::{
    FourCC,
    reader::Reader,
    riff::{RiffError, RiffFile},
};

/// An error produced while decoding an AVI file.
#[derive(Debug, Error)]
pub enum AviError {
    /// The RIFF parse failed, or the container's form type is not `AVI `.
    #[error("not an AVI file")]
    NotAnAvi,
    /// A declared-length read underran the buffer for the named chunk.
    #[error("truncated {0} chunk")]
    BadFile(FourCC),
    /// The input bytes could not be obtained in the first place.
    #[error("could not read input")]
    InvalidArgument(#[from] io::Error),
}

impl From<RiffError> for AviError {
    fn from(err: RiffError) -> Self {
        match err {
            RiffError::NotARiff => Self::NotAnAvi,
            RiffError::InvalidArgument(e) => Self::InvalidArgument(e),
        }
    }
}

/// A decoded AVI file: the main header record plus captured frame payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AviFile {
    header: Option<AviHeader>,
    frames: Vec<AviFrame>,
}

impl AviFile {
    /// Read a whole file into memory and decode it as AVI.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AviError> {
        let riff = RiffFile::load(path)?;
        Self::from_riff(riff)
    }

    /// Decode an in-memory buffer as AVI.
    pub fn parse(bytes: &[u8]) -> Result<Self, AviError> {
        let riff = RiffFile::parse(bytes)?;
        Self::from_riff(riff)
    }

    /// Decode an already-parsed RIFF container as AVI.
    pub fn from_riff(mut riff: RiffFile) -> Result<Self, AviError> {
        let form = riff
            .next_chunk()
            .and_then(|chunk| chunk.form())
            .ok_or(AviError::NotAnAvi)?;
        if form.form_type != FourCC::AVI {
            return Err(AviError::NotAnAvi);
        }
        Self::scan_subchunks(&form.data)
    }

    fn scan_subchunks(data: &[u8]) -> Result<Self, AviError> {
        let mut reader = Reader::from_byte_slice(data);
        let mut avi = Self::default();

        while !reader.is_empty() {
            let Ok(fourcc) = reader.read_fourcc() else {
                warn!("trailing bytes after last AVI chunk, ignoring");
                break;
            };
            let Ok(length) = reader.read_u32_le() else {
                warn!("truncated header for AVI chunk {fourcc}, ignoring");
                break;
            };

            match fourcc {
                FourCC::LIST => avi.read_list(&mut reader, length)?,
                FourCC::JUNK | FourCC::INFO => {
                    debug!("skipping {fourcc} chunk ({length} bytes)");
                    if reader.skip(length as usize).is_err() {
                        warn!("{fourcc} chunk overran the buffer");
                        break;
                    }
                }
                _ => {
                    warn!("unknown AVI chunk {fourcc}, skipping {length} bytes");
                    if reader.skip(length as usize).is_err() {
                        warn!("unknown AVI chunk {fourcc} overran the buffer");
                        break;
                    }
                }
            }

            if length % 2 == 1 && !reader.is_empty() {
                let _ = reader.skip(1);
            }
        }

        Ok(avi)
    }

    /// Dispatch a `LIST` chunk by its inner form tag.
    fn read_list(&mut self, reader: &mut Reader, length: u32) -> Result<(), AviError> {
        if length < 4 {
            return Err(AviError::BadFile(FourCC::LIST));
        }
        let inner = reader
            .read_fourcc()
            .map_err(|_| AviError::BadFile(FourCC::LIST))?;
        let rest = length as usize - 4;

        match inner {
            FourCC::HDRL => {
                let data = reader
                    .read_exact(rest)
                    .map_err(|_| AviError::BadFile(FourCC::HDRL))?;
                let header = AviHeader::from_hdrl(data)?;
                self.frames.reserve(header.total_frames as usize);
                self.header = Some(header);
            }
            FourCC::MOVI => {
                let data = reader
                    .read_exact(rest)
                    .map_err(|_| AviError::BadFile(FourCC::MOVI))?;
                self.frames.push(AviFrame {
                    length: rest as u32,
                    data: data.to_vec(),
                });
            }
            _ => {
                warn!("unknown LIST form {inner}, skipping {rest} bytes");
                if reader.skip(rest).is_err() {
                    return Err(AviError::BadFile(inner));
                }
            }
        }
        Ok(())
    }

    /// The decoded `avih` record, if an `hdrl` list was present.
    pub const fn header(&self) -> Option<&AviHeader> {
        self.header.as_ref()
    }

    /// The frame count *declared* by the header (zero without one).
    ///
    /// A truncated stream may have captured fewer; see
    /// [`frames_captured`](Self::frames_captured).
    pub fn frame_count(&self) -> u32 {
        self.header.as_ref().map_or(0, |h| h.total_frames)
    }

    /// The number of frames actually captured from `movi` lists.
    pub fn frames_captured(&self) -> usize {
        self.frames.len()
    }

    /// The `i`th captured frame, or `None` when `i` is out of range.
    pub fn frame(&self, i: usize) -> Option<&AviFrame> {
        self.frames.get(i)
    }
}

use crate::{FourCC, reader::Reader};

use super::WavError;

/// The fixed 16-byte `fmt ` record describing a PCM stream.
///
/// Field layout matches the on-disk WAVEFORMAT structure, all fields
/// little-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WavFormat {
    /// Encoding tag; `1` is uncompressed PCM.
    pub format_tag: u16,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample frames per second.
    pub samples_per_second: u32,
    /// Average byte rate, `samples_per_second * block_align` for PCM.
    pub bytes_per_second: u32,
    /// Bytes per sample frame across all channels.
    pub block_align: u16,
    /// Bits per sample in a single channel.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// The `format_tag` value for uncompressed PCM.
    pub const PCM: u16 = 1;

    /// True if the stream is uncompressed PCM.
    pub const fn is_pcm(&self) -> bool {
        self.format_tag == Self::PCM
    }

    pub(super) fn read(reader: &mut Reader, length: u32) -> Result<Self, WavError> {
        // 16 bytes is the baseline record; extension bytes (cbSize and
        // friends) are skipped, a shorter declaration cannot fill it
        if length < 16 {
            return Err(WavError::BadFile(FourCC::FMT));
        }
        let mut fields = Reader::from_byte_slice(
            reader
                .read_exact(length as usize)
                .map_err(|_| WavError::BadFile(FourCC::FMT))?,
        );
        Ok(Self {
            format_tag: fields.read_u16_le().map_err(|_| WavError::BadFile(FourCC::FMT))?,
            channels: fields.read_u16_le().map_err(|_| WavError::BadFile(FourCC::FMT))?,
            samples_per_second: fields.read_u32_le().map_err(|_| WavError::BadFile(FourCC::FMT))?,
            bytes_per_second: fields.read_u32_le().map_err(|_| WavError::BadFile(FourCC::FMT))?,
            block_align: fields.read_u16_le().map_err(|_| WavError::BadFile(FourCC::FMT))?,
            bits_per_sample: fields.read_u16_le().map_err(|_| WavError::BadFile(FourCC::FMT))?,
        })
    }
}

/// The raw sample payload of a `data` chunk, copied verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WavData {
    /// Declared byte length of the payload.
    pub length: u32,
    /// The payload bytes.
    pub data: Vec<u8>,
}

/// The `fact` record: sample-frame count written by some encoders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WavFact {
    /// Number of sample frames in the stream.
    pub sample_frames: u32,
}

impl WavFact {
    pub(super) fn read(reader: &mut Reader, length: u32) -> Result<Self, WavError> {
        if length < 4 {
            return Err(WavError::BadFile(FourCC::FACT));
        }
        let mut fields = Reader::from_byte_slice(
            reader
                .read_exact(length as usize)
                .map_err(|_| WavError::BadFile(FourCC::FACT))?,
        );
        Ok(Self {
            sample_frames: fields
                .read_u32_le()
                .map_err(|_| WavError::BadFile(FourCC::FACT))?,
        })
    }
}

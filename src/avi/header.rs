use log::warn;

use crate::{FourCC, reader::Reader};

use super::AviError;

/// The fixed `avih` record from an AVI `hdrl` list.
///
/// Fourteen little-endian 32-bit fields, read verbatim from disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AviHeader {
    /// Frame display duration in microseconds.
    pub us_per_frame: u32,
    /// Approximate maximum data rate of the file.
    pub max_bytes_per_second: u32,
    /// Pad the file's data to multiples of this size.
    pub padding_granularity: u32,
    /// AVIF_* flag bits.
    pub flags: u32,
    /// The number of frames the file declares it holds.
    pub total_frames: u32,
    /// Audio skew ahead of video in interleaved files.
    pub initial_frames: u32,
    /// Number of streams in the file.
    pub streams: u32,
    /// Suggested buffer size for reading the file.
    pub suggested_buffer_size: u32,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Reserved, zero on disk.
    pub reserved: [u32; 4],
}

impl AviHeader {
    /// On-disk size of the `avih` record in bytes.
    pub const SIZE: u32 = 56;

    /// Locate the `avih` subchunk inside an `hdrl` list payload and read it.
    pub(super) fn from_hdrl(data: &[u8]) -> Result<Self, AviError> {
        let mut reader = Reader::from_byte_slice(data);
        while !reader.is_empty() {
            let Ok(fourcc) = reader.read_fourcc() else {
                break;
            };
            let Ok(length) = reader.read_u32_le() else {
                break;
            };
            if fourcc == FourCC::AVIH {
                if length < Self::SIZE {
                    return Err(AviError::BadFile(FourCC::AVIH));
                }
                let bytes = reader
                    .read_exact(length as usize)
                    .map_err(|_| AviError::BadFile(FourCC::AVIH))?;
                return Self::read(bytes);
            }
            // stream headers (strl/strf and friends) are not decoded here
            if reader.skip(length as usize).is_err() {
                break;
            }
            if length % 2 == 1 && !reader.is_empty() {
                let _ = reader.skip(1);
            }
        }
        warn!("hdrl list without an avih subchunk");
        Err(AviError::BadFile(FourCC::AVIH))
    }

    fn read(bytes: &[u8]) -> Result<Self, AviError> {
        let mut fields = Reader::from_byte_slice(bytes);
        let mut next = || {
            fields
                .read_u32_le()
                .map_err(|_| AviError::BadFile(FourCC::AVIH))
        };
        Ok(Self {
            us_per_frame: next()?,
            max_bytes_per_second: next()?,
            padding_granularity: next()?,
            flags: next()?,
            total_frames: next()?,
            initial_frames: next()?,
            streams: next()?,
            suggested_buffer_size: next()?,
            width: next()?,
            height: next()?,
            reserved: [next()?, next()?, next()?, next()?],
        })
    }
}

/// One captured frame payload from a `movi` list, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AviFrame {
    /// Byte length of the payload.
    pub length: u32,
    /// The raw payload bytes.
    pub data: Vec<u8>,
}

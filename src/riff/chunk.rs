use crate::FourCC;

/// The 8-byte on-disk header of every RIFF chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkHeader {
    /// The chunk's type tag.
    pub fourcc: FourCC,
    /// Byte count of the payload that follows the header.
    pub length: u32,
}

/// The payload of a container chunk (`RIFF`/`LIST`/`INFO`).
///
/// The form type says what the container holds (`WAVE`, `AVI `, `hdrl`,
/// ...); `data` is the remaining `length - 4` payload bytes, left raw for a
/// decoder to re-scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubChunk {
    /// The container's form type.
    pub form_type: FourCC,
    /// The container's payload, after the form type.
    pub data: Vec<u8>,
}

/// What a chunk carries after its header.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChunkPayload {
    /// A plain (or unrecognized) chunk's raw bytes.
    Data(Vec<u8>),
    /// A container chunk's form type and sub-payload.
    Form(SubChunk),
}

/// One parsed chunk: header plus exclusively-owned payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    /// The on-disk header.
    pub header: ChunkHeader,
    /// The owned payload.
    pub payload: ChunkPayload,
}

impl Chunk {
    /// The chunk's type tag.
    pub const fn fourcc(&self) -> FourCC {
        self.header.fourcc
    }

    /// The declared payload length in bytes.
    pub const fn length(&self) -> u32 {
        self.header.length
    }

    /// The container sub-chunk, if this is a `RIFF`/`LIST`/`INFO` chunk.
    pub const fn form(&self) -> Option<&SubChunk> {
        match &self.payload {
            ChunkPayload::Form(sub) => Some(sub),
            ChunkPayload::Data(_) => None,
        }
    }

    /// The raw payload bytes, whichever shape the chunk has.
    pub fn data(&self) -> &[u8] {
        match &self.payload {
            ChunkPayload::Data(data) => data,
            ChunkPayload::Form(sub) => &sub.data,
        }
    }
}

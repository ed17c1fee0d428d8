#![doc = r#"
Generic RIFF container parsing.

# Overview

RIFF-family files are organized into chunks, each identified by a
four-character ASCII tag followed by a little-endian 32-bit length and then
the chunk data. Container tags (`RIFF`, `LIST`, `INFO`) carry a further
4-byte *form type* (`WAVE`, `AVI `, `hdrl`, ...) identifying what their
payload holds; every other tag is a plain data chunk.

The parser walks a fully loaded buffer into an iteration-ordered sequence of
[`Chunk`]s. Chunks with tags it does not recognize are kept as raw payloads
and skipped over cleanly — an unknown tag never fails the parse, only a
truncated header or a declared length that runs past the end of the buffer
does. Odd-length chunks are followed by a pad byte per the RIFF convention;
the parser consumes it so sibling chunks stay aligned.

Decoders ([`WavFile`](crate::wav::WavFile), [`AviFile`](crate::avi::AviFile))
take the parsed container and re-scan the form's payload for the subchunks
they understand.
"#]

mod chunk;
pub use chunk::*;

use std::{fs, io, path::Path};

use log::warn;
use thiserror::Error;

use crate::{FourCC, reader::Reader};

/// An error produced while parsing a RIFF container.
#[derive(Debug, Error)]
pub enum RiffError {
    /// The buffer does not hold a well-framed RIFF chunk sequence: a chunk
    /// header was truncated or a declared length overran the buffer.
    #[error("not a RIFF stream")]
    NotARiff,
    /// The input bytes could not be obtained in the first place.
    #[error("could not read input")]
    InvalidArgument(#[from] io::Error),
}

/// A parsed RIFF container: its top-level chunks in file order.
///
/// [`next_chunk`](Self::next_chunk) is a single-pass forward cursor over the
/// parsed chunks. Once it has been exhausted it returns `None` indefinitely;
/// consume the container, then discard it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiffFile {
    chunks: Vec<Chunk>,
    next: usize,
}

impl RiffFile {
    /// Read a whole file into memory and parse it as a RIFF container.
    ///
    /// An I/O failure maps to [`RiffError::InvalidArgument`]; path
    /// resolution and existence checks are the caller's concern.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RiffError> {
        let bytes = fs::read(path)?;
        Self::parse(&bytes)
    }

    /// Parse an in-memory buffer into a chunk sequence.
    pub fn parse(bytes: &[u8]) -> Result<Self, RiffError> {
        let mut reader = Reader::from_byte_slice(bytes);
        if reader.is_empty() {
            return Err(RiffError::NotARiff);
        }
        let mut chunks = Vec::new();
        while !reader.is_empty() {
            chunks.push(read_chunk(&mut reader)?);
        }
        Ok(Self { chunks, next: 0 })
    }

    /// Pull the next top-level chunk, advancing the cursor.
    pub fn next_chunk(&mut self) -> Option<&Chunk> {
        let chunk = self.chunks.get(self.next)?;
        self.next += 1;
        Some(chunk)
    }

    /// All top-level chunks in file order, ignoring the cursor.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }
}

fn read_chunk(reader: &mut Reader) -> Result<Chunk, RiffError> {
    let fourcc = reader.read_fourcc().map_err(|_| RiffError::NotARiff)?;
    let length = reader.read_u32_le().map_err(|_| RiffError::NotARiff)?;

    let payload = match fourcc {
        FourCC::RIFF | FourCC::LIST | FourCC::INFO => {
            // container forms spend the first 4 payload bytes on a form type
            if length < 4 {
                return Err(RiffError::NotARiff);
            }
            let form_type = reader.read_fourcc().map_err(|_| RiffError::NotARiff)?;
            let data = reader
                .read_exact(length as usize - 4)
                .map_err(|_| RiffError::NotARiff)?
                .to_vec();
            ChunkPayload::Form(SubChunk { form_type, data })
        }
        _ => {
            let data = reader
                .read_exact(length as usize)
                .map_err(|_| RiffError::NotARiff)?
                .to_vec();
            warn!("unknown chunk {fourcc}, skipping {length} bytes");
            ChunkPayload::Data(data)
        }
    };

    // odd-length chunks carry a pad byte; a truncated final pad is tolerated
    if length % 2 == 1 && !reader.is_empty() {
        let _ = reader.skip(1);
    }

    Ok(Chunk {
        header: ChunkHeader { fourcc, length },
        payload,
    })
}

#![doc = r#"
Standard MIDI File parsing.

# Overview

MIDI files are organized into chunks, each identified by a 4-character ASCII
id followed by a big-endian 32-bit length. A file opens with the `MThd`
header chunk (format, track count, division), followed by one `MTrk` track
chunk per declared track. Track payloads are event streams: a variable-length
delta-time, a status byte, then status-dependent data.

The parser makes a single forward pass and produces a [`MidiFile`]:

- every track's events in order, note-on/note-off typed with key, velocity
  and delta-ticks, everything else collapsed to
  [`EventKind::Other`] (its delta still counts toward elapsed time)
- the track's copyright / name / instrument strings, when the corresponding
  meta events appear
- a 16-entry channel index recording which tracks addressed which channel

# Conventions honored at parse time

- **Running status**: a data byte where a status byte belongs reuses the
  previous event's status; the cursor is rewound one byte and the event
  re-read under that status.
- **Velocity-zero note-on**: recorded as a note-off, per MIDI convention.

# Failure policy

A bad `MThd` or `MTrk` id aborts the whole parse. Inside a track, a
malformed or truncated event ends that track's event loop with a logged
warning; each track parses from a cursor bounded to its declared payload,
so the surrounding cursor stays aligned on the next track header and
parsing proceeds. Partial documents accumulate rather than vanish.
"#]

mod timing;
pub use timing::*;

mod meta;
pub use meta::*;

mod event;
pub use event::*;

mod track;
pub use track::*;

mod channel;
pub use channel::*;

use log::warn;
use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::{FourCC, reader::Reader};

/// An error produced while parsing a MIDI file.
///
/// Both magic failures carry the tag actually found, so callers can surface
/// it. Either aborts the whole document; everything below the chunk frame
/// recovers locally instead of erroring.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MidiError {
    /// The stream does not open with `MThd`.
    #[error("not a MIDI file: expected MThd, found {0}")]
    NotAMidiFile(FourCC),
    /// A track chunk does not open with `MTrk`.
    #[error("not a MIDI track: expected MTrk, found {0}")]
    NotAMidiTrack(FourCC),
    /// The stream ended inside the file or track header.
    #[error("unexpected end of stream at position {0}")]
    UnexpectedEof(usize),
}

impl From<crate::reader::ReaderError> for MidiError {
    fn from(err: crate::reader::ReaderError) -> Self {
        Self::UnexpectedEof(err.position())
    }
}

/// The `MThd` header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiHeader {
    /// The SMF format word (0, 1 or 2).
    pub format: u16,
    /// The number of track chunks the file declares.
    pub track_count: u16,
    /// The raw division word; see [`timing`](Self::timing).
    pub division: u16,
}

impl MidiHeader {
    /// The decoded division word.
    pub const fn timing(&self) -> Timing {
        Timing::from_division(self.division)
    }

    /// The format word mapped to its defined layout, if it has one.
    pub fn format_type(&self) -> Option<FormatType> {
        u8::try_from(self.format)
            .ok()
            .and_then(|b| FormatType::try_from(b).ok())
    }
}

/// How the tracks of a file relate to each other (the SMF format word).
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FormatType {
    /// Format 0: one track carrying all channels.
    SingleMultiChannel = 0,
    /// Format 1: simultaneous tracks of one song.
    Simultaneous = 1,
    /// Format 2: sequentially independent patterns.
    SequentiallyIndependent = 2,
}

/// A parsed MIDI document: header, tracks, and the channel→track index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFile {
    header: MidiHeader,
    tracks: Vec<Track>,
    channels: [Channel; 16],
}

impl MidiFile {
    /// Number of MIDI channels.
    pub const CHANNELS: usize = 16;

    /// Parse a byte buffer into a MIDI document in a single forward pass.
    pub fn parse(bytes: &[u8]) -> Result<Self, MidiError> {
        let mut reader = Reader::from_byte_slice(bytes);

        let id = reader.read_fourcc()?;
        if id != FourCC::MTHD {
            return Err(MidiError::NotAMidiFile(id));
        }
        let header_length = reader.read_u32_be()?;
        let format = reader.read_u16_be()?;
        let track_count = reader.read_u16_be()?;
        let division = reader.read_u16_be()?;
        // honor the declared header length; future revisions may grow it
        if header_length > 6 {
            reader.skip(header_length as usize - 6)?;
        }
        let header = MidiHeader {
            format,
            track_count,
            division,
        };

        let mut tracks = Vec::with_capacity(track_count as usize);
        let mut channels: [Channel; 16] = core::array::from_fn(|_| Channel::default());

        for n in 0..track_count {
            if reader.is_empty() {
                // a truncated tail keeps what was parsed so far
                warn!("stream exhausted after {n} of {track_count} declared tracks");
                break;
            }
            let id = reader.read_fourcc()?;
            if id != FourCC::MTRK {
                return Err(MidiError::NotAMidiTrack(id));
            }
            let track_length = reader.read_u32_be()? as usize;

            // hand the track its own bounded cursor; a declared length
            // overrunning the buffer parses what is actually there
            let available = track_length.min(reader.remaining());
            if available < track_length {
                warn!(
                    "track {n} declares {track_length} bytes but only {available} remain, \
                     parsing the truncated payload"
                );
            }
            let mut track_reader = Reader::from_byte_slice(reader.read_exact(available)?);
            let track_index = tracks.len();
            tracks.push(Track::read_events(
                &mut track_reader,
                track_index,
                &mut channels,
            ));
        }

        Ok(Self {
            header,
            tracks,
            channels,
        })
    }

    /// The `MThd` header fields.
    pub const fn header(&self) -> &MidiHeader {
        &self.header
    }

    /// All parsed tracks, in file order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// The channel→track index.
    ///
    /// Entry `n` lists (by index into [`tracks`](Self::tracks)) every track
    /// whose events addressed channel `n`.
    pub const fn channels(&self) -> &[Channel; 16] {
        &self.channels
    }

    /// The index entry for a single channel number (`0..16`).
    pub fn channel(&self, n: usize) -> Option<&Channel> {
        self.channels.get(n)
    }
}

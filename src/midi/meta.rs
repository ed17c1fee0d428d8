#![doc = r#"
Meta event types (`FF <type> <length> <data>`).

Only a few meta events change the parsed document — the copyright, track
name and instrument name strings land on the track, and End-Of-Track closes
the track's event loop. The remaining recognized types are decoded and
validated here so malformed payloads surface in the logs, then recorded as
[`EventKind::Other`](super::EventKind). An unrecognized type byte is skipped
by its declared length without disturbing the events that follow it.
"#]

use num_enum::TryFromPrimitive;
use thiserror::Error;

use super::SmpteFps;

/// The meta event types defined by the SMF specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum MetaKind {
    /// Pattern/sequence number.
    SequenceNumber = 0x00,
    /// Free text.
    Text = 0x01,
    /// Copyright notice, stored on the track.
    Copyright = 0x02,
    /// Track name, stored on the track.
    TrackName = 0x03,
    /// Instrument name, stored on the track.
    InstrumentName = 0x04,
    /// Lyric syllable.
    Lyric = 0x05,
    /// Rehearsal/section marker.
    Marker = 0x06,
    /// Cue point.
    CuePoint = 0x07,
    /// Channel prefix for following meta events.
    ChannelPrefix = 0x20,
    /// Terminates the track's event stream.
    EndOfTrack = 0x2F,
    /// Tempo in microseconds per quarter note.
    SetTempo = 0x51,
    /// SMPTE start time of the track.
    SmpteOffset = 0x54,
    /// Time signature.
    TimeSignature = 0x58,
    /// Key signature.
    KeySignature = 0x59,
    /// Sequencer-specific payload.
    SequencerSpecific = 0x7F,
}

/// A tempo: microseconds per quarter note, from a 3-byte big-endian payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo(u32);

impl Tempo {
    /// Decode the `FF 51 03` payload; `None` if it is shorter than 3 bytes.
    pub fn parse(data: &[u8]) -> Option<Self> {
        let &[a, b, c] = data.get(..3)? else {
            return None;
        };
        Some(Self(u32::from_be_bytes([0, a, b, c])))
    }

    /// Microseconds per quarter note.
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// Beats per minute.
    pub const fn beats_per_minute(&self) -> f64 {
        60_000_000. / self.0 as f64
    }
}

/// A time signature from the 4-byte `FF 58` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature {
    /// Beats per bar.
    pub numerator: u8,
    /// Denominator as a power of two (3 means eighth notes).
    pub denominator: u8,
    /// MIDI clocks per metronome click.
    pub clocks_per_click: u8,
    /// Notated 32nd notes per MIDI quarter note.
    pub thirty_seconds_per_quarter: u8,
}

impl TimeSignature {
    /// Decode the payload; `None` if it is shorter than 4 bytes.
    pub fn parse(data: &[u8]) -> Option<Self> {
        let &[numerator, denominator, clocks_per_click, thirty_seconds_per_quarter] =
            data.get(..4)?
        else {
            return None;
        };
        Some(Self {
            numerator,
            denominator,
            clocks_per_click,
            thirty_seconds_per_quarter,
        })
    }
}

/// A key signature from the 2-byte `FF 59` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySignature {
    /// Position on the circle of fifths: negative counts flats, positive
    /// counts sharps.
    pub accidentals: i8,
    /// True for a minor key.
    pub minor: bool,
}

impl KeySignature {
    /// Decode the payload; `None` if it is shorter than 2 bytes.
    pub fn parse(data: &[u8]) -> Option<Self> {
        let &[accidentals, minor] = data.get(..2)? else {
            return None;
        };
        Some(Self {
            accidentals: accidentals as i8,
            minor: minor != 0,
        })
    }
}

/// Validation failures for the SMPTE offset meta payload.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SmpteError {
    /// The payload was not exactly 5 bytes.
    #[error("smpte offset payload is {0} bytes, expected 5")]
    Length(usize),
    /// The frame-rate bits were out of range.
    #[error("invalid smpte frame rate type {0}")]
    FrameRate(u8),
    /// Hours above 23.
    #[error("smpte hour {0} out of range")]
    Hour(u8),
    /// Minutes above 59.
    #[error("smpte minute {0} out of range")]
    Minute(u8),
    /// Seconds above 59.
    #[error("smpte second {0} out of range")]
    Second(u8),
    /// Subframes above 99.
    #[error("smpte subframe {0} out of range")]
    Subframe(u8),
}

/// A track's starting position in SMPTE time code (`FF 54 05`).
///
/// Five bytes: `0rrhhhhh` packing the frame rate and hours, then minutes,
/// seconds, frames, and fractional frames in 100ths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteOffset {
    /// The frame rate encoded in the offset itself.
    pub fps: SmpteFps,
    /// Hour component (0-23).
    pub hour: u8,
    /// Minute component (0-59).
    pub minute: u8,
    /// Second component (0-59).
    pub second: u8,
    /// Frame within the current second; valid range depends on `fps`.
    pub frame: u8,
    /// Fractional frame in 100ths (0-99).
    pub subframe: u8,
}

impl SmpteOffset {
    /// Parse the 5-byte payload, validating every component's range.
    pub const fn parse(data: &[u8]) -> Result<Self, SmpteError> {
        if data.len() != 5 {
            return Err(SmpteError::Length(data.len()));
        }

        // 0 rr hhhhh
        let fps = match data[0] >> 5 {
            0 => SmpteFps::TwentyFour,
            1 => SmpteFps::TwentyFive,
            2 => SmpteFps::TwentyNine,
            3 => SmpteFps::Thirty,
            v => return Err(SmpteError::FrameRate(v)),
        };
        let hour = data[0] & 0b0001_1111;
        if hour > 23 {
            return Err(SmpteError::Hour(hour));
        }
        let minute = data[1];
        if minute > 59 {
            return Err(SmpteError::Minute(minute));
        }
        let second = data[2];
        if second > 59 {
            return Err(SmpteError::Second(second));
        }
        let frame = data[3];
        // always 1/100 of a frame
        let subframe = data[4];
        if subframe > 99 {
            return Err(SmpteError::Subframe(subframe));
        }
        Ok(Self {
            fps,
            hour,
            minute,
            second,
            frame,
            subframe,
        })
    }

    /// The absolute offset in microseconds.
    pub const fn as_micros(&self) -> f64 {
        ((((self.hour as u64 * 3600) + (self.minute as u64) * 60 + self.second as u64) * 1_000_000)
            as f64)
            + ((self.frame as u64) * 1_000_000) as f64 / self.fps.as_f64()
            + ((self.subframe as u32) * 10_000) as f64 / self.fps.as_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tempo_three_byte_big_endian() {
        // 500_000 µs per quarter note = 120 bpm
        let tempo = Tempo::parse(&[0x07, 0xA1, 0x20]).unwrap();
        assert_eq!(tempo.micros_per_quarter_note(), 500_000);
        assert_eq!(tempo.beats_per_minute(), 120.);
    }

    #[test]
    fn short_payloads_decode_to_none() {
        assert_eq!(Tempo::parse(&[0x07, 0xA1]), None);
        assert_eq!(TimeSignature::parse(&[6, 3, 36]), None);
        assert_eq!(KeySignature::parse(&[0xFD]), None);
    }

    #[test]
    fn key_signature_flats_and_minor() {
        let key = KeySignature::parse(&[0xFD, 0x01]).unwrap();
        assert_eq!(key.accidentals, -3);
        assert!(key.minor);
    }

    #[test]
    fn unknown_meta_type_byte() {
        assert!(MetaKind::try_from(0x60).is_err());
        assert_eq!(MetaKind::try_from(0x2F), Ok(MetaKind::EndOfTrack));
    }
}

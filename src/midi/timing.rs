/// The header timing type.
///
/// The `MThd` division word either gives a tick rate per quarter note
/// (leading bit clear) or an SMPTE frame rate plus ticks per frame (leading
/// bit set, frame rate stored as a negative byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// Delta-times count ticks of a quarter note (1-32767).
    TicksPerQuarterNote(u16),
    /// Delta-times count subdivisions of an SMPTE frame.
    Smpte {
        /// Frames per second.
        fps: SmpteFps,
        /// Ticks within a single frame.
        ticks_per_frame: u8,
    },
    /// An SMPTE division whose frame-rate byte is none of the four defined
    /// values; kept raw rather than failing the parse.
    Unrecognized(u16),
}

impl Timing {
    /// Decode the raw division word.
    pub const fn from_division(division: u16) -> Self {
        if division & 0x8000 == 0 {
            return Self::TicksPerQuarterNote(division & 0x7FFF);
        }
        let fps = match (division >> 8) as u8 as i8 {
            -24 => SmpteFps::TwentyFour,
            -25 => SmpteFps::TwentyFive,
            -29 => SmpteFps::TwentyNine, // drop frame, 29.97
            -30 => SmpteFps::Thirty,
            _ => return Self::Unrecognized(division),
        };
        Self::Smpte {
            fps,
            ticks_per_frame: (division & 0x00FF) as u8,
        }
    }

    /// Returns Some if the timing is defined as ticks per quarter note.
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(*t),
            _ => None,
        }
    }
}

/// The SMPTE frame rates a MIDI file can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmpteFps {
    /// 24 fps (film).
    TwentyFour,
    /// 25 fps (PAL).
    TwentyFive,
    /// 29.97 fps drop-frame (NTSC).
    TwentyNine,
    /// 30 fps.
    Thirty,
}

impl SmpteFps {
    /// The frame rate as a float (29.97 for the drop-frame rate).
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::TwentyFour => 24.,
            Self::TwentyFive => 25.,
            Self::TwentyNine => 29.97,
            Self::Thirty => 30.,
        }
    }
}

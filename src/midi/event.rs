use num_enum::TryFromPrimitive;

/// One event in a track's stream, tagged with its delta-time.
///
/// `delta_ticks` is the time since the *previous* event on the same track,
/// in the units the header's [`Timing`](super::Timing) defines — never an
/// absolute time. Events that carry no note data still carry their delta,
/// so summing deltas over a track stays correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackEvent {
    /// Ticks since the previous event on this track.
    pub delta_ticks: u32,
    /// What the event was.
    pub kind: EventKind,
}

/// The decoded shape of a track event.
///
/// Only note-on and note-off are decoded into typed variants; every other
/// channel-voice, system-exclusive or meta event is recorded as [`Other`]
/// (after being validated and skipped at the byte level). A note-on with
/// velocity zero is recorded as [`NoteOff`], per MIDI convention.
///
/// [`Other`]: EventKind::Other
/// [`NoteOff`]: EventKind::NoteOff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A key was released.
    NoteOff {
        /// The key number (0-127).
        key: u8,
        /// The release velocity.
        velocity: u8,
    },
    /// A key was struck with nonzero velocity.
    NoteOn {
        /// The key number (0-127).
        key: u8,
        /// The strike velocity (1-127 after the velocity-zero rewrite).
        velocity: u8,
    },
    /// Any other event; present for its delta-time.
    Other,
}

/// Channel-voice message kinds, keyed by the status byte's high nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub(super) enum VoiceKind {
    NoteOff = 0x80,
    NoteOn = 0x90,
    Aftertouch = 0xA0,
    ControlChange = 0xB0,
    ProgramChange = 0xC0,
    ChannelPressure = 0xD0,
    PitchBend = 0xE0,
}

impl VoiceKind {
    /// How many data bytes follow the status byte.
    pub(super) const fn data_len(&self) -> usize {
        match self {
            Self::ProgramChange | Self::ChannelPressure => 1,
            _ => 2,
        }
    }
}

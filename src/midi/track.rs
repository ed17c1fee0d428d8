use log::{trace, warn};
use thiserror::Error;

use crate::reader::{Reader, ReaderError};

use super::{
    Channel, EventKind, KeySignature, MetaKind, SmpteOffset, Tempo, TimeSignature, TrackEvent,
    VoiceKind,
};

/// One parsed `MTrk` chunk: its meta strings and its event stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    copyright: String,
    name: String,
    instrument: String,
    events: Vec<TrackEvent>,
}

impl Track {
    /// The copyright notice, empty if the track carried none.
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// The track name, empty if the track carried none.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The instrument name, empty if the track carried none.
    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    /// The track's events in stream order.
    pub fn events(&self) -> &[TrackEvent] {
        &self.events
    }

    /// Parse one track chunk's event stream.
    ///
    /// The reader must cover exactly the track chunk's payload, so event
    /// reads can never stray into the next track's header. Runs until an
    /// End-Of-Track meta event, the payload's end, or a malformed event —
    /// the last of which ends this track with a warning rather than failing
    /// the document.
    pub(super) fn read_events(
        reader: &mut Reader,
        track_index: usize,
        channels: &mut [Channel; 16],
    ) -> Self {
        let mut track = Self::default();
        let mut running_status: Option<u8> = None;

        while !reader.is_empty() {
            match read_event(reader, &mut track, &mut running_status, track_index, channels) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::EndOfTrack) => break,
                Err(e) => {
                    warn!("track {track_index}: {e}, dropping the rest of the track");
                    break;
                }
            }
        }

        track
    }
}

#[derive(Debug, Error)]
enum EventError {
    #[error(transparent)]
    Reader(#[from] ReaderError),
    #[error("data byte {0:#04x} with no status to run under")]
    OrphanDataByte(u8),
    #[error("unexpected status byte {0:#04x}")]
    UnexpectedStatus(u8),
}

enum Outcome {
    Continue,
    EndOfTrack,
}

fn read_event(
    reader: &mut Reader,
    track: &mut Track,
    running_status: &mut Option<u8>,
    track_index: usize,
    channels: &mut [Channel; 16],
) -> Result<Outcome, EventError> {
    let delta_ticks = reader.read_vlq()?;
    let mut status = reader.read_u8()?;

    if status & 0x80 == 0 {
        // running status: a data byte where a status byte belongs means the
        // previous status repeats; rewind so the byte is re-read as data
        let Some(prev) = *running_status else {
            return Err(EventError::OrphanDataByte(status));
        };
        reader.seek_relative(-1)?;
        status = prev;
    }

    match status {
        0xFF => {
            *running_status = None;
            read_meta(reader, track, delta_ticks)
        }
        0xF0 | 0xF7 => {
            *running_status = None;
            let len = reader.read_vlq()? as usize;
            reader.skip(len)?;
            trace!("track {track_index}: skipped {len}-byte sysex");
            track.events.push(TrackEvent {
                delta_ticks,
                kind: EventKind::Other,
            });
            Ok(Outcome::Continue)
        }
        0x80..=0xEF => {
            *running_status = Some(status);
            let Ok(voice) = VoiceKind::try_from(status & 0xF0) else {
                return Err(EventError::UnexpectedStatus(status));
            };
            let channel = (status & 0x0F) as usize;

            let kind = match voice {
                VoiceKind::NoteOff => {
                    let key = reader.read_u8()?;
                    let velocity = reader.read_u8()?;
                    EventKind::NoteOff { key, velocity }
                }
                VoiceKind::NoteOn => {
                    let key = reader.read_u8()?;
                    let velocity = reader.read_u8()?;
                    if velocity == 0 {
                        // velocity-zero note-on is a note-off
                        EventKind::NoteOff { key, velocity }
                    } else {
                        EventKind::NoteOn { key, velocity }
                    }
                }
                other => {
                    reader.skip(other.data_len())?;
                    EventKind::Other
                }
            };

            channels[channel].associate(track_index);
            track.events.push(TrackEvent { delta_ticks, kind });
            Ok(Outcome::Continue)
        }
        // system common / realtime bytes have no place in a track stream
        other => Err(EventError::UnexpectedStatus(other)),
    }
}

fn read_meta(
    reader: &mut Reader,
    track: &mut Track,
    delta_ticks: u32,
) -> Result<Outcome, EventError> {
    let ty = reader.read_u8()?;
    let len = reader.read_vlq()? as usize;
    let data = reader.read_exact(len)?;

    match MetaKind::try_from(ty) {
        Ok(MetaKind::EndOfTrack) => return Ok(Outcome::EndOfTrack),
        Ok(MetaKind::Copyright) => track.copyright = text(data),
        Ok(MetaKind::TrackName) => track.name = text(data),
        Ok(MetaKind::InstrumentName) => track.instrument = text(data),
        Ok(MetaKind::SetTempo) => match Tempo::parse(data) {
            Some(tempo) => trace!(
                "tempo change: {} µs per quarter note",
                tempo.micros_per_quarter_note()
            ),
            None => warn!("set-tempo payload shorter than 3 bytes"),
        },
        Ok(MetaKind::SmpteOffset) => {
            if let Err(e) = SmpteOffset::parse(data) {
                warn!("bad smpte offset: {e}");
            }
        }
        Ok(MetaKind::TimeSignature) => {
            if TimeSignature::parse(data).is_none() {
                warn!("time-signature payload shorter than 4 bytes");
            }
        }
        Ok(MetaKind::KeySignature) => {
            if KeySignature::parse(data).is_none() {
                warn!("key-signature payload shorter than 2 bytes");
            }
        }
        Ok(
            MetaKind::SequenceNumber
            | MetaKind::Text
            | MetaKind::Lyric
            | MetaKind::Marker
            | MetaKind::CuePoint
            | MetaKind::ChannelPrefix
            | MetaKind::SequencerSpecific,
        ) => {}
        Err(_) => warn!("unknown meta event type {ty:#04x}, skipping {len} bytes"),
    }

    track.events.push(TrackEvent {
        delta_ticks,
        kind: EventKind::Other,
    });
    Ok(Outcome::Continue)
}

fn text(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn channels() -> [Channel; 16] {
        core::array::from_fn(|_| Channel::default())
    }

    fn read(bytes: &[u8], channels: &mut [Channel; 16]) -> Track {
        let mut reader = Reader::from_byte_slice(bytes);
        Track::read_events(&mut reader, 0, channels)
    }

    #[test]
    fn running_status_reuses_previous_status() {
        let mut chans = channels();
        let track = read(
            &[
                0x00, 0x90, 60, 100, // explicit note-on
                0x10, 62, 101, // running status note-on
                0x00, 0xFF, 0x2F, 0x00, // end of track
            ],
            &mut chans,
        );
        assert_eq!(
            track.events(),
            &[
                TrackEvent {
                    delta_ticks: 0,
                    kind: EventKind::NoteOn {
                        key: 60,
                        velocity: 100
                    }
                },
                TrackEvent {
                    delta_ticks: 0x10,
                    kind: EventKind::NoteOn {
                        key: 62,
                        velocity: 101
                    }
                },
            ]
        );
    }

    #[test]
    fn orphan_data_byte_ends_the_track() {
        let mut chans = channels();
        let track = read(&[0x00, 0x42, 0x42], &mut chans);
        assert!(track.events().is_empty());
    }

    #[test]
    fn truncated_event_keeps_earlier_events() {
        let mut chans = channels();
        // full note-on, then a note-on cut off after its key byte
        let track = read(&[0x00, 0x90, 60, 100, 0x00, 0x90, 61], &mut chans);
        assert_eq!(track.events().len(), 1);
    }

    #[test]
    fn meta_strings_land_on_the_track() {
        let mut chans = channels();
        let track = read(
            &[
                0x00, 0xFF, 0x02, 0x03, b'(', b'c', b')', // copyright
                0x00, 0xFF, 0x03, 0x04, b'l', b'e', b'a', b'd', // name
                0x00, 0xFF, 0x04, 0x05, b'p', b'i', b'a', b'n', b'o', // instrument
                0x00, 0xFF, 0x2F, 0x00,
            ],
            &mut chans,
        );
        assert_eq!(track.copyright(), "(c)");
        assert_eq!(track.name(), "lead");
        assert_eq!(track.instrument(), "piano");
        // meta events are present for their deltas
        assert_eq!(track.events().len(), 3);
    }

    #[test]
    fn channel_association_dedupes() {
        let mut chans = channels();
        let track = read(
            &[
                0x00, 0x93, 60, 100, // channel 3
                0x00, 0x93, 60, 0, // channel 3 again
                0x00, 0x85, 60, 0, // channel 5
                0x00, 0xFF, 0x2F, 0x00,
            ],
            &mut chans,
        );
        assert_eq!(track.events().len(), 3);
        assert_eq!(chans[3].tracks(), &[0]);
        assert_eq!(chans[5].tracks(), &[0]);
        assert!(chans[0].is_empty());
    }
}

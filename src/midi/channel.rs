/// The tracks observed addressing one MIDI channel.
///
/// This is an observational index, not ownership: entries are indices into
/// [`MidiFile::tracks`](super::MidiFile::tracks), so the document can be
/// moved or cloned without dangling references. A track appears at most
/// once per channel, and under several channels if its events address
/// several channel numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    tracks: Vec<usize>,
}

impl Channel {
    /// Indices of the tracks that addressed this channel, in first-seen order.
    pub fn tracks(&self) -> &[usize] {
        &self.tracks
    }

    /// True if no track addressed this channel.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub(super) fn associate(&mut self, track_index: usize) {
        if !self.tracks.contains(&track_index) {
            self.tracks.push(track_index);
        }
    }
}

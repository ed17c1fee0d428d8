use thiserror::Error;

use crate::{
    avi::AviError, midi::MidiError, reader::ReaderError, riff::RiffError, wav::WavError,
};

#[doc = r#"
The union of every error the crate's parsers can produce.

Each parser returns its own error type; this umbrella exists for callers
that route several formats through one code path.
"#]
#[derive(Debug, Error)]
pub enum ParseError {
    /// RIFF container structure errors.
    #[error(transparent)]
    Riff(#[from] RiffError),
    /// WAVE decoding errors.
    #[error(transparent)]
    Wav(#[from] WavError),
    /// AVI decoding errors.
    #[error(transparent)]
    Avi(#[from] AviError),
    /// MIDI stream errors.
    #[error(transparent)]
    Midi(#[from] MidiError),
    /// Raw cursor errors.
    #[error(transparent)]
    Reader(#[from] ReaderError),
}

#![doc = r#"
Re-exports the types most consumers need.

```rust
use chunkix::prelude::*;
```
"#]

pub use crate::{
    FourCC, ParseError,
    avi::{AviError, AviFile, AviFrame, AviHeader},
    midi::{
        Channel, EventKind, MidiError, MidiFile, MidiHeader, SmpteFps, Timing, Track, TrackEvent,
    },
    reader::{ReadResult, Reader, ReaderError},
    riff::{Chunk, ChunkHeader, ChunkPayload, RiffError, RiffFile, SubChunk},
    wav::{WavData, WavError, WavFact, WavFile, WavFormat},
};

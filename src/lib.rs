#![doc = r#"
Chunked media container parsing.

`chunkix` parses the structural layer of four related binary formats into
addressable in-memory representations:

- [`riff`]: the generic RIFF chunk container (little-endian tagged,
  length-prefixed blocks, with `RIFF`/`LIST`/`INFO` sub-forms)
- [`wav`]: WAVE audio payloads inside a RIFF container
- [`avi`]: AVI video payloads inside a RIFF container
- [`midi`]: the Standard MIDI File chunk/event stream (`MThd`/`MTrk`,
  big-endian, running status, variable-length delta-times)

The crate stops at the structural parse: it hands a playback layer typed
chunk trees, format records, raw PCM/frame buffers and event lists. It does
not resample, decode codecs, or schedule playback.

# Tolerance model

Structural failures at the frame of a container (bad magic, truncated
header) abort the parse with a typed error. *Interior* surprises — unknown
chunk tags, unrecognized meta event types, a track that ends mid-event — are
logged through the [`log`] facade and skipped, and the rest of the document
still parses. Consumers therefore must check which parts were actually
populated before use.

# Example

```rust
use chunkix::prelude::*;

let bytes = [
    b'R', b'I', b'F', b'F', 8, 0, 0, 0, // RIFF, 8 payload bytes
    b'W', b'A', b'V', b'E', // form type
    b'x', b'y', b'z', b'w', // one unknown subchunk, skipped
];
let wav = WavFile::parse(&bytes).unwrap();
assert!(wav.format().is_none());
assert!(wav.data().is_none());
```
"#]
#![warn(missing_docs)]

pub mod reader;

mod fourcc;
pub use fourcc::*;

mod error;
pub use error::*;

pub mod riff;

pub mod wav;

pub mod avi;

pub mod midi;

pub mod prelude;

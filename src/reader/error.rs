use thiserror::Error;

#[doc = r#"
A positioned error produced while pulling bytes through a [`Reader`](super::Reader).
"#]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("reading at position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReaderErrorKind {
    /// Reading out of bounds.
    #[error("read out of bounds")]
    OutOfBounds,
    /// A variable-length quantity ran past its four-byte maximum.
    #[error("overlong variable-length quantity")]
    OverlongVlq,
}

impl ReaderError {
    /// Create a reader error from a position and kind.
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }

    /// Create a new out of bounds error.
    pub const fn oob(position: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::OutOfBounds,
        }
    }

    /// True if the read ran past the end of the buffer.
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::OutOfBounds)
    }

    /// Returns the error kind of the reader.
    pub const fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }

    /// Returns the position where the read error occurred.
    pub const fn position(&self) -> usize {
        self.position
    }
}

/// The Read Result type (see [`ReaderError`]).
pub type ReadResult<T> = Result<T, ReaderError>;

use thiserror::Error;

/// Malformed data found while scanning a list value.
///
/// The offset is relative to the start of the scanned value. List iterators
/// never return this error; they stop at the offset instead.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[error("malformed data at offset {offset}: {reason}")]
#[non_exhaustive]
pub struct MalformedError {
    pub offset: usize,
    pub reason: &'static str,
}

impl MalformedError {
    #[inline]
    pub(crate) fn new(offset: usize, reason: &'static str) -> Self {
        Self { offset, reason }
    }

    /// Re-bases the offset of an error raised on a sub-slice.
    #[inline]
    pub(crate) fn shift(self, base: usize) -> Self {
        Self {
            offset: self.offset + base,
            reason: self.reason,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum HeaderError {
    #[error("bad format: {0}")]
    BadFormat(String),
    #[error("too many headers")]
    TooManyHeaders,
}

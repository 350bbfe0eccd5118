use std::{borrow::Cow, fmt};

/// Borrowed byte range of a header value.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct View<'b>(&'b [u8]);

/// A [`View`] made of `tchar` bytes only.
pub type Token<'b> = View<'b>;

impl<'b> View<'b> {
    #[inline]
    pub(crate) fn new(bytes: &'b [u8]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn as_bytes<'s>(&'s self) -> &'b [u8]
    where
        'b: 's,
    {
        self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lossy UTF-8 rendering, borrowed when the bytes are valid UTF-8.
    #[inline]
    pub fn to_str_lossy(&self) -> Cow<'b, str> {
        String::from_utf8_lossy(self.0)
    }

    #[inline]
    pub fn eq_ignore_ascii_case<N: AsRef<[u8]> + ?Sized>(&self, other: &N) -> bool {
        self.0.eq_ignore_ascii_case(other.as_ref())
    }
}

impl<'b> AsRef<[u8]> for View<'b> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.0
    }
}

impl<'a, 'b> PartialEq<&'a str> for View<'b> {
    #[inline]
    fn eq(&self, other: &&'a str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl<'a, 'b> PartialEq<&'a [u8]> for View<'b> {
    #[inline]
    fn eq(&self, other: &&'a [u8]) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_str_lossy())
    }
}

impl fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "View({:?})", self.to_str_lossy())
    }
}

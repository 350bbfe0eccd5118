use std::fmt;

/// Header field name. Comparisons ignore ASCII case.
#[derive(Debug, Copy, Clone, Eq)]
pub struct HeaderName<'b>(pub(crate) &'b [u8]);

impl<'b> HeaderName<'b> {
    #[inline]
    pub(crate) fn new(name: &'b [u8]) -> Self {
        Self(name)
    }

    #[inline]
    pub fn as_bytes<'s>(&'s self) -> &'b [u8]
    where
        'b: 's,
    {
        self.0
    }
}

impl<'a, 'b> PartialEq<HeaderName<'a>> for HeaderName<'b> {
    #[inline]
    fn eq(&self, other: &HeaderName<'a>) -> bool {
        self.0.eq_ignore_ascii_case(other.0)
    }
}

impl<'a, 'b> PartialEq<&'a str> for HeaderName<'b> {
    #[inline]
    fn eq(&self, other: &&'a str) -> bool {
        self.0.eq_ignore_ascii_case(other.as_bytes())
    }
}

impl<'a, 'b> PartialEq<&'a [u8]> for HeaderName<'b> {
    #[inline]
    fn eq(&self, other: &&'a [u8]) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for HeaderName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&String::from_utf8_lossy(self.0))
    }
}

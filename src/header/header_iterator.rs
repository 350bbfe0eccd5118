use crate::header::{Header, HeaderIndices, HeaderName, HeaderValue};
use std::slice::Iter;

#[derive(Debug, Clone)]
pub struct HeaderIterator<'b> {
    pub(crate) buf: &'b [u8],
    pub(crate) iter: Iter<'b, HeaderIndices>,
}

impl<'b> Iterator for HeaderIterator<'b> {
    type Item = Header<'b>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        Some(Header {
            name: HeaderName::new(&self.buf[item.name.0..item.name.1]),
            value: HeaderValue::new(&self.buf[item.value.0..item.value.1]),
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for HeaderIterator<'_> {}

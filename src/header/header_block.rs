use crate::{
    errors::HeaderError,
    header::{Header, HeaderIndices, HeaderIterator, HeaderValue},
};
use tracing::{debug, error, instrument, trace};

const MAX_HEADERS: usize = 128;

/// Header fields of a message, split out of a raw `name: value` block
/// terminated by an empty line.
///
/// Only positions are stored; names and values are views into the block.
#[derive(Debug, Clone)]
pub struct HeaderBlock<'b> {
    buf: &'b [u8],
    indices: Vec<HeaderIndices>,
    parsed_len: usize,
}

impl<'b> HeaderBlock<'b> {
    /// Returns `Ok(None)` if the terminating empty line has not been seen yet.
    #[instrument(err, skip(buf), fields(len = buf.len()))]
    pub fn parse(buf: &'b [u8]) -> Result<Option<Self>, HeaderError> {
        let mut headers = [httparse::EMPTY_HEADER; MAX_HEADERS];

        let (parsed_len, parsed) = match httparse::parse_headers(buf, &mut headers) {
            Ok(httparse::Status::Complete(v)) => v,
            Ok(httparse::Status::Partial) => {
                trace!("partial");
                return Ok(None);
            }
            Err(httparse::Error::TooManyHeaders) => {
                error!(max = MAX_HEADERS, "too many headers");
                return Err(HeaderError::TooManyHeaders);
            }
            Err(e) => return Err(HeaderError::BadFormat(e.to_string())),
        };

        let indices = parsed
            .iter()
            .map(|h| HeaderIndices::locate(buf, h.name.as_bytes(), h.value))
            .collect::<Vec<_>>();
        debug!(parsed_len, n_headers = indices.len(), "parsed header block");

        Ok(Some(Self {
            buf,
            indices,
            parsed_len,
        }))
    }

    /// Number of bytes of the block, terminating empty line included.
    #[inline]
    pub fn parsed_len(&self) -> usize {
        self.parsed_len
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> HeaderIterator<'_> {
        HeaderIterator {
            buf: self.buf,
            iter: self.indices.iter(),
        }
    }

    /// First value of the field `name`, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<HeaderValue<'b>> {
        self.get_all(name).next()
    }

    /// All values of the field `name` in order of appearance.
    pub fn get_all<'s>(&'s self, name: &'s str) -> impl Iterator<Item = HeaderValue<'b>> + 's {
        let buf = self.buf;
        self.indices
            .iter()
            .filter(move |hi| buf[hi.name.0..hi.name.1].eq_ignore_ascii_case(name.as_bytes()))
            .map(move |hi| HeaderValue::new(&buf[hi.value.0..hi.value.1]))
    }
}

impl<'s, 'b> IntoIterator for &'s HeaderBlock<'b> {
    type Item = Header<'s>;
    type IntoIter = HeaderIterator<'s>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

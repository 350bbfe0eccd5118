use crate::{
    decoder::{scan_list_element, scan_token},
    header::HeaderValue,
    list::{ListCfg, Token, View},
};
use bytes::{BufMut, BytesMut};
use std::{fmt, iter::FusedIterator};
use tracing::trace;

/// Comma separated list of bare tokens, as in `Connection: keep-alive, Upgrade`.
#[derive(Debug, Copy, Clone, Default)]
pub struct TokenList<'b> {
    value: &'b [u8],
    cfg: ListCfg,
}

impl<'b> TokenList<'b> {
    #[inline]
    pub fn new(value: &'b [u8]) -> Self {
        Self::with_cfg(value, ListCfg::default())
    }

    #[inline]
    pub fn with_cfg(value: &'b [u8], cfg: ListCfg) -> Self {
        Self { value, cfg }
    }

    #[inline]
    pub fn as_bytes<'s>(&'s self) -> &'b [u8]
    where
        'b: 's,
    {
        self.value
    }

    #[inline]
    pub fn iter(&self) -> TokenIter<'b> {
        TokenIter {
            buf: self.value,
            pos: 0,
            need_comma: false,
            remaining: self.cfg.max_elements,
            done: false,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Checks for `name`, compared case-insensitively.
    #[inline]
    pub fn exists<N: AsRef<[u8]> + ?Sized>(&self, name: &N) -> bool {
        self.iter().any(|t| t.eq_ignore_ascii_case(name))
    }

    pub fn encode(&self, wbuf: &mut BytesMut) {
        for (i, t) in self.iter().enumerate() {
            if i > 0 {
                wbuf.put_u8(b',');
            }
            wbuf.extend_from_slice(t.as_bytes());
        }
    }
}

impl<'b> From<&'b [u8]> for TokenList<'b> {
    #[inline]
    fn from(value: &'b [u8]) -> Self {
        Self::new(value)
    }
}

impl<'b> From<&'b str> for TokenList<'b> {
    #[inline]
    fn from(value: &'b str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl<'b> From<HeaderValue<'b>> for TokenList<'b> {
    #[inline]
    fn from(value: HeaderValue<'b>) -> Self {
        Self::new(value.as_bytes())
    }
}

impl<'b> IntoIterator for TokenList<'b> {
    type Item = Token<'b>;
    type IntoIter = TokenIter<'b>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'b> IntoIterator for &'a TokenList<'b> {
    type Item = Token<'b>;
    type IntoIter = TokenIter<'b>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TokenList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, t) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", t)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct TokenIter<'b> {
    buf: &'b [u8],
    pos: usize,
    need_comma: bool,
    remaining: usize,
    done: bool,
}

impl<'b> Iterator for TokenIter<'b> {
    type Item = Token<'b>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.remaining == 0 {
            trace!(pos = self.pos, "token limit reached");
            self.done = true;
            return None;
        }

        match scan_list_element(self.buf, self.pos, self.need_comma) {
            Ok(Some(start)) => {
                let end = start + scan_token(self.buf, start);
                self.pos = end;
                self.need_comma = true;
                self.remaining -= 1;
                Some(View::new(&self.buf[start..end]))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                trace!(err = %e, "token list truncated");
                self.done = true;
                None
            }
        }
    }
}

impl FusedIterator for TokenIter<'_> {}

use crate::{
    decoder::scan_param,
    header::HeaderValue,
    list::{ListCfg, Token},
};
use bytes::{BufMut, Bytes, BytesMut};
use std::{fmt, iter::FusedIterator};
use tracing::trace;

/// Value of a parameter.
///
/// A token value borrows from the header value. A quoted-string value is
/// decoded into its own buffer since removing the quoted-pair backslashes
/// changes its length.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum ParamValue<'b> {
    Token(Token<'b>),
    Quoted(Bytes),
}

impl<'b> ParamValue<'b> {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Token(t) => t.as_bytes(),
            Self::Quoted(q) => q,
        }
    }

    #[inline]
    pub fn is_quoted(&self) -> bool {
        matches!(self, Self::Quoted(_))
    }
}

impl fmt::Display for ParamValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&String::from_utf8_lossy(self.as_bytes()))
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub struct Param<'b> {
    pub name: Token<'b>,
    pub value: ParamValue<'b>,
}

impl<'b> Param<'b> {
    #[inline]
    pub fn encode(&self, wbuf: &mut BytesMut) {
        wbuf.put_u8(b';');
        wbuf.extend_from_slice(self.name.as_bytes());
        wbuf.put_u8(b'=');
        wbuf.extend_from_slice(self.value.as_bytes());
    }
}

impl fmt::Display for Param<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ";{}={}", self.name, self.value)
    }
}

/// `*( OWS ";" OWS param )` over a borrowed header value.
#[derive(Debug, Copy, Clone, Default)]
pub struct ParamList<'b> {
    value: &'b [u8],
    cfg: ListCfg,
}

impl<'b> ParamList<'b> {
    #[inline]
    pub fn new(value: &'b [u8]) -> Self {
        Self::with_cfg(value, ListCfg::default())
    }

    #[inline]
    pub fn with_cfg(value: &'b [u8], cfg: ListCfg) -> Self {
        Self { value, cfg }
    }

    /// The raw bytes the list is parsed from.
    #[inline]
    pub fn as_bytes<'s>(&'s self) -> &'b [u8]
    where
        'b: 's,
    {
        self.value
    }

    #[inline]
    pub fn iter(&self) -> ParamIter<'b> {
        ParamIter {
            buf: self.value,
            pos: 0,
            remaining: self.cfg.max_params,
            done: false,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns the first parameter named `name`, compared case-insensitively.
    pub fn get<N: AsRef<[u8]> + ?Sized>(&self, name: &N) -> Option<Param<'b>> {
        self.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn encode(&self, wbuf: &mut BytesMut) {
        for p in self.iter() {
            p.encode(wbuf);
        }
    }
}

impl<'b> From<&'b [u8]> for ParamList<'b> {
    #[inline]
    fn from(value: &'b [u8]) -> Self {
        Self::new(value)
    }
}

impl<'b> From<&'b str> for ParamList<'b> {
    #[inline]
    fn from(value: &'b str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl<'b> From<HeaderValue<'b>> for ParamList<'b> {
    #[inline]
    fn from(value: HeaderValue<'b>) -> Self {
        Self::new(value.as_bytes())
    }
}

impl<'b> IntoIterator for ParamList<'b> {
    type Item = Param<'b>;
    type IntoIter = ParamIter<'b>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'b> IntoIterator for &'a ParamList<'b> {
    type Item = Param<'b>;
    type IntoIter = ParamIter<'b>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ParamList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.iter() {
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ParamIter<'b> {
    buf: &'b [u8],
    pos: usize,
    remaining: usize,
    done: bool,
}

impl<'b> Iterator for ParamIter<'b> {
    type Item = Param<'b>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.remaining == 0 {
            trace!(pos = self.pos, "parameter limit reached");
            self.done = true;
            return None;
        }

        match scan_param(self.buf, self.pos) {
            Ok(Some((pos, param))) => {
                self.pos = pos;
                self.remaining -= 1;
                Some(param)
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                trace!(err = %e, "parameter list truncated");
                self.done = true;
                None
            }
        }
    }
}

impl FusedIterator for ParamIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn render(s: &str) -> String {
        ParamList::from(s).to_string()
    }

    /// `s` parses and renders as `good`, and `good` is stable.
    fn check(s: &str, good: &str) {
        assert_eq!(render(good), good, "{:?}", good);
        let got = render(s);
        assert_eq!(got, good, "{:?}", s);
        assert_eq!(render(&got), got);
    }

    #[test]
    fn test_canonical() {
        for s in ["", ";i=1", ";i=1;j=2", ";a-b=c.d;x=~"] {
            assert_eq!(render(s), s);
        }
    }

    #[test]
    fn test_ows() {
        check(" ;\t i =\t 1 \t", ";i=1");
        check(";i=1 ; j = 2", ";i=1;j=2");
        check("\t;i=1\t", ";i=1");
    }

    #[test]
    fn test_quoted() {
        assert_eq!(
            render("\t; \t xyz=1 ; ijk=\"q\\\"t\""),
            ";xyz=1;ijk=q\"t"
        );
        assert_eq!(render(";x=\"\""), ";x=");
        assert_eq!(render(";x=\"a b\";y=c"), ";x=a b;y=c");

        let list = ParamList::from(";a=\"q\\\"t\";b=tok");
        let params: Vec<_> = list.iter().collect();
        assert_eq!(params.len(), 2);
        assert!(params[0].value.is_quoted());
        assert_eq!(params[0].value.as_bytes(), b"q\"t");
        assert_eq!(params[1].value, ParamValue::Token(Token::new(b"tok")));
    }

    #[test]
    #[traced_test]
    fn test_invalid() {
        let invalid = vec![";", ";,", ";xy", ";xy ", ";xy,"];
        for s in invalid {
            check(s, "");
        }

        let quoted_invalid = vec![
            ";x=,",
            ";xy=\"",
            ";xy=\"\x7f",
            ";xy=\"\\",
            ";xy=\"\\\x01\"",
        ];
        for s in quoted_invalid {
            assert_eq!(render(s), "", "{:?}", s);
        }

        assert!(logs_contain("parameter list truncated"));
    }

    #[test]
    fn test_truncation_keeps_prefix() {
        assert_eq!(render(";a=1;b=2;c"), ";a=1;b=2");
        assert_eq!(render(";a=1;b=\"2"), ";a=1");
        assert_eq!(render(";a=1 x;b=2"), ";a=1");
        assert_eq!(render("x;a=1"), "");
    }

    #[test]
    fn test_duplicates_and_order() {
        let list = ParamList::from(";q=1;Q=2;q=3");
        let values: Vec<_> = list.iter().map(|p| p.value.to_string()).collect();
        assert_eq!(values, vec!["1", "2", "3"]);
        assert_eq!(list.get("Q").unwrap().value.as_bytes(), b"1");
        assert!(list.get("z").is_none());
    }

    #[test]
    fn test_restartable() {
        let list = ParamList::from(";a=1;b=\"x\"");
        let first: Vec<_> = list.iter().collect();
        let second: Vec<_> = (&list).into_iter().collect();
        assert_eq!(first, second);
        assert!(!list.is_empty());
        assert!(ParamList::from(" ; ").is_empty());
        assert!(ParamList::default().is_empty());
    }

    #[test]
    fn test_fused() {
        let mut it = ParamList::from(";a=1;").iter();
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_max_params() {
        let cfg = ListCfg::builder().max_params(2).build();
        let list = ParamList::with_cfg(b";a=1;b=2;c=3", cfg);
        assert_eq!(list.to_string(), ";a=1;b=2");

        let cfg = ListCfg::builder().max_params(0).build();
        assert!(ParamList::with_cfg(b";a=1", cfg).is_empty());
    }

    #[test]
    fn test_encode() {
        let mut wbuf = BytesMut::new();
        ParamList::from(&b" ; a = \"\x80\" ;b=c"[..]).encode(&mut wbuf);
        assert_eq!(&wbuf[..], b";a=\x80;b=c");
    }
}

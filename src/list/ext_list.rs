use crate::{
    decoder::{param_list_end, scan_list_element, scan_token},
    header::HeaderValue,
    list::{ListCfg, ParamList, Token, View},
};
use bytes::{BufMut, BytesMut};
use std::{fmt, iter::FusedIterator};
use tracing::trace;

/// `token param-list`, as in `Transfer-Encoding: gzip;level=1`.
#[derive(Debug, Copy, Clone)]
#[non_exhaustive]
pub struct Extension<'b> {
    pub name: Token<'b>,
    /// Covers exactly the parameters that parsed cleanly.
    pub params: ParamList<'b>,
}

impl<'b> Extension<'b> {
    #[inline]
    pub fn encode(&self, wbuf: &mut BytesMut) {
        wbuf.extend_from_slice(self.name.as_bytes());
        self.params.encode(wbuf);
    }
}

impl fmt::Display for Extension<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.params)
    }
}

/// Comma separated list of extensions.
#[derive(Debug, Copy, Clone, Default)]
pub struct ExtList<'b> {
    value: &'b [u8],
    cfg: ListCfg,
}

impl<'b> ExtList<'b> {
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
    pub fn iter(&self) -> ExtIter<'b> {
        ExtIter {
            buf: self.value,
            pos: 0,
            need_comma: false,
            remaining: self.cfg.max_elements,
            cfg: self.cfg,
            done: false,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns the first extension named `name`, compared case-insensitively.
    pub fn find<N: AsRef<[u8]> + ?Sized>(&self, name: &N) -> Option<Extension<'b>> {
        self.iter().find(|e| e.name.eq_ignore_ascii_case(name))
    }

    #[inline]
    pub fn exists<N: AsRef<[u8]> + ?Sized>(&self, name: &N) -> bool {
        self.find(name).is_some()
    }

    pub fn encode(&self, wbuf: &mut BytesMut) {
        for (i, e) in self.iter().enumerate() {
            if i > 0 {
                wbuf.put_u8(b',');
            }
            e.encode(wbuf);
        }
    }
}

impl<'b> From<&'b [u8]> for ExtList<'b> {
    #[inline]
    fn from(value: &'b [u8]) -> Self {
        Self::new(value)
    }
}

impl<'b> From<&'b str> for ExtList<'b> {
    #[inline]
    fn from(value: &'b str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl<'b> From<HeaderValue<'b>> for ExtList<'b> {
    #[inline]
    fn from(value: HeaderValue<'b>) -> Self {
        Self::new(value.as_bytes())
    }
}

impl<'b> IntoIterator for ExtList<'b> {
    type Item = Extension<'b>;
    type IntoIter = ExtIter<'b>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'b> IntoIterator for &'a ExtList<'b> {
    type Item = Extension<'b>;
    type IntoIter = ExtIter<'b>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ExtList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", e)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ExtIter<'b> {
    buf: &'b [u8],
    pos: usize,
    need_comma: bool,
    remaining: usize,
    cfg: ListCfg,
    done: bool,
}

impl<'b> Iterator for ExtIter<'b> {
    type Item = Extension<'b>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.remaining == 0 {
            trace!(pos = self.pos, "extension limit reached");
            self.done = true;
            return None;
        }

        let start = match scan_list_element(self.buf, self.pos, self.need_comma) {
            Ok(Some(start)) => start,
            Ok(None) => {
                self.done = true;
                return None;
            }
            Err(e) => {
                trace!(err = %e, "extension list truncated");
                self.done = true;
                return None;
            }
        };

        let name_end = start + scan_token(self.buf, start);
        let params_end = param_list_end(self.buf, name_end, self.cfg.max_params);

        self.pos = params_end;
        self.need_comma = true;
        self.remaining -= 1;

        Some(Extension {
            name: View::new(&self.buf[start..name_end]),
            params: ParamList::with_cfg(&self.buf[name_end..params_end], self.cfg),
        })
    }
}

impl FusedIterator for ExtIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::ParamValue;
    use tracing_test::traced_test;

    fn render(s: &str) -> String {
        ExtList::from(s).to_string()
    }

    fn check(s: &str, good: &str) {
        assert_eq!(render(good), good, "{:?}", good);
        let got = render(s);
        assert_eq!(got, good, "{:?}", s);
        assert_eq!(render(&got), got);
    }

    #[test]
    fn test_empty_elements() {
        let empty = vec![
            "", ",", ", ", ",\t", ", \t", " ", " ,", "\t,", "\t , \t", ",,", " , \t,, \t,",
        ];
        for s in empty {
            check(s, "");
        }
    }

    #[test]
    fn test_canonical() {
        let canonical = vec![
            "a",
            "ab",
            "a,b",
            "a;i=1;j=2;k=3",
            "a;i=1;j=2;k=3,b;i=4;j=5;k=6",
        ];
        for s in canonical {
            assert_eq!(render(s), s);
        }
    }

    #[test]
    fn test_ows() {
        check(" a ", "a");
        check("\t a, b\t  ,  c\t", "a,b,c");
        check("a; \t i\t=\t \t1\t ", "a;i=1");
        check(",,gzip ;level=9 , ,chunked", "gzip;level=9,chunked");
    }

    #[test]
    fn test_quoted() {
        assert_eq!(render("ab;x=\" \""), "ab;x= ");
        assert_eq!(render("ab;x=\"\\\"\""), "ab;x=\"");
        assert_eq!(render("a;x=\"1,2\",b"), "a;x=1,2,b");
    }

    #[test]
    fn test_exists() {
        let list = ExtList::from("a,b;i=1,c;j=2;k=3");
        assert!(list.exists("A"));
        assert!(list.exists("b"));
        assert!(list.exists(b"C"));
        assert!(!list.exists("d"));
        assert!(!list.exists("i"));

        let c = list.find("C").unwrap();
        assert_eq!(c.name, "c");
        assert_eq!(c.params.to_string(), ";j=2;k=3");
    }

    #[test]
    #[traced_test]
    fn test_invalid() {
        check("i j", "i");
        check(";", "");
        check("a;", "a");
        check("a;i=1;j,b", "a;i=1");
        check("a,b c,d", "a,b");
        assert!(logs_contain("extension list truncated"));
    }

    #[test]
    fn test_params_view_into_value() {
        let value = b"gzip; q = 1 ,br;x=\"y\";mode=fast";
        let list = ExtList::new(value);
        let first = list.iter().next().unwrap();
        assert_eq!(first.params.as_bytes(), b"; q = 1");

        let base = value.as_ptr() as usize;
        let in_bounds = |b: &[u8]| {
            let p = b.as_ptr() as usize;
            p >= base && p + b.len() <= base + value.len()
        };

        let mut token_values = 0;
        for e in list.iter() {
            assert!(in_bounds(e.name.as_bytes()));
            assert!(in_bounds(e.params.as_bytes()));
            for p in e.params {
                assert!(in_bounds(p.name.as_bytes()));
                if let ParamValue::Token(v) = &p.value {
                    assert!(in_bounds(v.as_bytes()));
                    token_values += 1;
                }
            }
        }
        assert_eq!(token_values, 2);
    }

    #[test]
    fn test_limits() {
        let cfg = ListCfg::builder().max_elements(2).build();
        assert_eq!(ExtList::with_cfg(b"a,b,c", cfg).to_string(), "a,b");
        assert!(!ExtList::with_cfg(b"a,b,c", cfg).exists("c"));

        // the parameter past the limit ends the whole list
        let cfg = ListCfg::builder().max_params(1).build();
        assert_eq!(
            ExtList::with_cfg(b"a;i=1;j=2,b", cfg).to_string(),
            "a;i=1"
        );
        assert_eq!(
            ExtList::with_cfg(b"a;i=1,b;j=2", cfg).to_string(),
            "a;i=1,b;j=2"
        );
    }

    #[test]
    fn test_restartable() {
        let list = ExtList::from("a;i=1, b");
        assert_eq!(list.iter().count(), 2);
        assert_eq!((&list).into_iter().count(), 2);
        assert_eq!(list.into_iter().count(), 2);
        assert!(ExtList::from(" , ").is_empty());
    }

    #[test]
    fn test_encode() {
        let mut wbuf = BytesMut::new();
        ExtList::from(" a ; x = \"y z\" ,\tb").encode(&mut wbuf);
        assert_eq!(&wbuf[..], b"a;x=y z,b");
    }
}

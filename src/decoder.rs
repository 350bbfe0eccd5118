use crate::{
    errors::MalformedError,
    list::{Param, ParamValue, View},
};
use bytes::{BufMut, Bytes, BytesMut};
use tracing::{instrument, trace};

#[macro_use]
mod macros;

mod maps;
use maps::*;

#[inline]
pub fn is_tchar(b: u8) -> bool {
    // SAFETY: the map has an entry for every u8
    unsafe { *TOKEN_MAP.get_unchecked(b as usize) }
}

#[inline]
pub fn is_qdtext(b: u8) -> bool {
    // SAFETY: the map has an entry for every u8
    unsafe { *QDTEXT_MAP.get_unchecked(b as usize) }
}

#[inline]
pub fn is_quoted_pair(b: u8) -> bool {
    // SAFETY: the map has an entry for every u8
    unsafe { *QUOTED_PAIR_MAP.get_unchecked(b as usize) }
}

#[inline]
pub fn skip_whitespace(buf: &[u8], i: &mut usize) {
    while *i < buf.len() {
        let c_ref = unsafe { buf.get_unchecked(*i) };
        if !matches!(*c_ref, b' ' | b'\t') {
            break;
        }
        *i += 1;
    }
}

#[inline]
pub fn skip_char(buf: &[u8], i: &mut usize, c: u8) -> bool {
    if *i < buf.len() {
        let c_ref = unsafe { buf.get_unchecked(*i) };
        if *c_ref == c {
            *i += 1;
            return true;
        }
    }
    false
}

/// Returns the length of the `tchar` run starting at `start`.
#[inline]
pub fn scan_token(buf: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < buf.len() {
        let c_ref = unsafe { buf.get_unchecked(i) };
        if !is_tchar(*c_ref) {
            break;
        }
        i += 1;
    }
    i - start
}

/// Decodes a `quoted-string` starting at the opening `"` of `buf`.
///
/// Returns the number of input bytes consumed (both quotes included) and the
/// value with the quoted-pairs resolved.
#[instrument(level = "trace", skip(buf))]
pub fn decode_quoted_string(buf: &[u8]) -> Result<(usize, Bytes), MalformedError> {
    let (consumed, decoded) = decode_quoted_string_mut(buf)?;
    Ok((consumed, decoded.freeze()))
}

/// Validates up to the closing quote, then copies into a buffer of exactly
/// the decoded length.
fn decode_quoted_string_mut(buf: &[u8]) -> Result<(usize, BytesMut), MalformedError> {
    if buf.first() != Some(&b'"') {
        bail!(0, "no opening quote");
    }

    let mut decoded_len = 0;
    let mut i = 1;

    loop {
        let c = match buf.get(i) {
            Some(c) => *c,
            None => bail!(i, "unterminated quoted-string"),
        };
        i += 1;
        match c {
            b'"' => break,
            b'\\' => {
                let e = match buf.get(i) {
                    Some(e) => *e,
                    None => bail!(i, "dangling backslash"),
                };
                if !is_quoted_pair(e) {
                    bail!(i, "bad quoted-pair");
                }
                i += 1;
            }
            v if is_qdtext(v) => (),
            _ => bail!(i - 1, "bad qdtext"),
        }
        decoded_len += 1;
    }

    let mut decoded = BytesMut::with_capacity(decoded_len);
    let mut j = 1;
    // the closing quote is at i - 1; every backslash before it is followed by a byte
    while j < i - 1 {
        if buf[j] == b'\\' {
            j += 1;
        }
        decoded.put_u8(buf[j]);
        j += 1;
    }

    Ok((i, decoded))
}

/// Scans one `OWS ";" OWS param` group starting at `pos`.
///
/// `Ok(None)` is a clean end of the parameter list: the next non-OWS byte is
/// not a `;`. On success returns the offset right after the parameter value.
#[instrument(level = "trace", skip(buf))]
pub fn scan_param(buf: &[u8], pos: usize) -> Result<Option<(usize, Param<'_>)>, MalformedError> {
    let mut i = pos;

    skip_whitespace(buf, &mut i);
    if !skip_char(buf, &mut i, b';') {
        return Ok(None);
    }

    skip_whitespace(buf, &mut i);

    let name_len = scan_token(buf, i);
    if name_len == 0 {
        bail!(i, "empty parameter name");
    }
    let name = View::new(&buf[i..i + name_len]);
    i += name_len;

    skip_whitespace(buf, &mut i);

    if !skip_char(buf, &mut i, b'=') {
        bail!(i, "no equals");
    }

    skip_whitespace(buf, &mut i);

    let value = if buf.get(i) == Some(&b'"') {
        let (consumed, decoded) = decode_quoted_string(&buf[i..]).map_err(|e| e.shift(i))?;
        i += consumed;
        ParamValue::Quoted(decoded)
    } else {
        let value_len = scan_token(buf, i);
        if value_len == 0 {
            bail!(i, "empty parameter value");
        }
        let value = View::new(&buf[i..i + value_len]);
        i += value_len;
        ParamValue::Token(value)
    };

    Ok(Some((i, Param { name, value })))
}

/// Returns the offset right after the last parameter that scans cleanly,
/// stopping after at most `max` parameters.
pub fn param_list_end(buf: &[u8], pos: usize, max: usize) -> usize {
    let mut end = pos;
    let mut n = 0;
    while n < max {
        match scan_param(buf, end) {
            Ok(Some((next, _))) => {
                end = next;
                n += 1;
            }
            Ok(None) => break,
            Err(e) => {
                trace!(err = %e, "parameter list truncated");
                break;
            }
        }
    }
    end
}

/// Walks the `#rule` separators in front of the next list element.
///
/// Skips OWS and empty elements (`,`). Returns the offset of the first byte
/// of the next element's token, or `Ok(None)` at the end of the input.
/// `need_comma` is set once an element has been produced: another token is
/// then only accepted after a comma.
pub fn scan_list_element(
    buf: &[u8],
    pos: usize,
    mut need_comma: bool,
) -> Result<Option<usize>, MalformedError> {
    let mut i = pos;

    loop {
        skip_whitespace(buf, &mut i);
        let c = match buf.get(i) {
            Some(c) => *c,
            None => return Ok(None),
        };
        if is_tchar(c) {
            if need_comma {
                bail!(i, "no delimiter");
            }
            return Ok(Some(i));
        }
        if c != b',' {
            bail!(i, "unexpected character");
        }
        need_comma = false;
        i += 1;
    }
}

//! Zero-copy, lenient parsers for RFC 7230 header value lists.
//!
//! ```
//! use http_field_lists::{ExtList, TokenList};
//!
//! let te = ExtList::from("gzip;level=9, chunked");
//! assert!(te.exists("Chunked"));
//! assert_eq!(te.to_string(), "gzip;level=9,chunked");
//!
//! // parsing stops at the first malformed byte
//! let conn = TokenList::from("close x");
//! assert_eq!(conn.to_string(), "close");
//! ```

#[cfg(not(fuzzing))]
pub(crate) mod decoder;
#[cfg(fuzzing)]
pub mod decoder;
mod errors;
pub mod header;
pub mod list;

pub use errors::*;
pub use list::*;

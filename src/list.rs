//! Lazy parsers for the RFC 7230 list grammars found in header values.
//!
//! ```text
//! token-list  = *( "," OWS ) token *( OWS "," [ OWS token ] )
//! ext-list    = *( "," OWS ) ext *( OWS "," [ OWS ext ] )
//! ext         = token param-list
//! param-list  = *( OWS ";" OWS param )
//! param       = token OWS "=" OWS ( token / quoted-string )
//! ```
//!
//! Malformed input is never an error: iteration stops at the first byte that
//! cannot be parsed and yields the elements found before it.

mod config;
mod config_builder;
mod ext_list;
mod param_list;
mod token_list;
mod view;

pub use config::*;
pub use config_builder::*;
pub use ext_list::*;
pub use param_list::*;
pub use token_list::*;
pub use view::*;

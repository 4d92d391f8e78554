//! ReQL term AST: the query-term construction layer of a RethinkDB client.
//!
//! A query is a tree of immutable [`term::Term`] nodes. Each node carries
//! its [`term_type::TermType`] wire code, ordered positional arguments,
//! named options, and optionally the predecessor node it chains from.
//! [`encode`] linearizes a finished tree into the JSON-array wire format;
//! [`wire`] wraps it in the query frame the transport sends.
//!
//! The fluent construction surface lives in the `reql-builder` crate.

pub mod datum;
pub mod encode;
pub mod error;
pub mod term;
pub mod term_type;
pub mod wire;

pub mod prelude {
    pub use crate::datum::Datum;
    pub use crate::encode::to_wire;
    pub use crate::error::{ReqlError, Result};
    pub use crate::term::{Arg, Args, OptArgs, Term};
    pub use crate::term_type::TermType;
    pub use crate::wire::{QueryMessage, QueryType};
}

#[test]
fn it_compiles() {}

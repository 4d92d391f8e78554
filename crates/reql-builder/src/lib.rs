//! Fluent ReQL query construction.
//!
//! Wraps the `reql-ast` term model in the `r`-style chaining API the
//! query language is written in:
//!
//! ```
//! use reql_builder::prelude::*;
//!
//! let query = r.table("users").get(1).delete();
//! let wire = query.encode().unwrap();
//! ```

pub mod macros;
pub mod query;

pub mod prelude {
    pub use crate::query::{r, ReqlQuery};

    // The AST vocabulary the builder surface hands out.
    pub use reql_ast::datum::Datum;
    pub use reql_ast::error::{ReqlError, Result};
    pub use reql_ast::term::{Arg, Args, OptArgs, Term};
    pub use reql_ast::term_type::TermType;
    pub use reql_ast::wire::{QueryMessage, QueryType};

    pub use crate::{args, opt_args};
}

// Declare the tests module, only compiled when running tests
#[cfg(test)]
mod tests;

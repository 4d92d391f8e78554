//! Helper macros for heterogeneous argument lists and option maps.

/// Build an [`Args`](reql_ast::term::Args) list from mixed values.
///
/// # Example
/// ```
/// # use reql_builder::{args, prelude::*};
/// let list = args!["a", 1, true];
/// assert_eq!(list.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::prelude::Args::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut list = $crate::prelude::Args::new();
        $( list.push($value); )+
        list
    }};
}

/// Build an [`OptArgs`](reql_ast::term::OptArgs) map from `key: value`
/// pairs. Repeating a key keeps the last value.
///
/// # Example
/// ```
/// # use reql_builder::{opt_args, prelude::*};
/// let opts = opt_args! { durability: "soft", return_changes: true };
/// assert_eq!(opts.len(), 2);
/// ```
#[macro_export]
macro_rules! opt_args {
    () => {
        $crate::prelude::OptArgs::new()
    };
    ($($key:ident : $value:expr),+ $(,)?) => {{
        let mut opts = $crate::prelude::OptArgs::new();
        $( opts.insert(stringify!($key), $value); )+
        opts
    }};
}

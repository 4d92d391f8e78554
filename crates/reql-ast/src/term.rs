use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, FixedOffset, Utc};
use serde_json::Value as JsonValue;

use crate::datum::Datum;
use crate::error::{ReqlError, Result};
use crate::term_type::TermType;

/// A positional argument or option value: either a literal or a nested
/// sub-expression. This recursive shape is what allows arbitrary query
/// nesting.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Value(Datum),
    Term(Term),
}

impl From<Term> for Arg {
    fn from(term: Term) -> Self {
        Arg::Term(term)
    }
}

macro_rules! impl_arg_from_datum {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(value: $t) -> Self {
                Arg::Value(value.into())
            }
        })*
    };
}
impl_arg_from_datum!(
    Datum,
    (),
    bool,
    i8,
    u8,
    i16,
    u16,
    i32,
    u32,
    i64,
    u64,
    isize,
    usize,
    f32,
    f64,
    &str,
    String,
    JsonValue,
    DateTime<Utc>,
    DateTime<FixedOffset>
);

impl<T> From<Vec<T>> for Arg
where
    T: Into<Datum>,
{
    fn from(values: Vec<T>) -> Self {
        Arg::Value(values.into())
    }
}

impl<T> From<BTreeMap<String, T>> for Arg
where
    T: Into<Datum>,
{
    fn from(map: BTreeMap<String, T>) -> Self {
        Arg::Value(map.into())
    }
}

impl<T> From<HashMap<String, T>> for Arg
where
    T: Into<Datum>,
{
    fn from(map: HashMap<String, T>) -> Self {
        Arg::Value(map.into())
    }
}

/// Ordered positional arguments. Order is semantically significant: it
/// maps positionally onto the operation's parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args(Vec<Arg>);

impl Args {
    pub fn new() -> Self {
        Args::default()
    }

    /// A one-element list, the shape the single-argument term
    /// constructors produce.
    pub fn one(arg: impl Into<Arg>) -> Self {
        Args(vec![arg.into()])
    }

    pub fn push(&mut self, arg: impl Into<Arg>) {
        self.0.push(arg.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arg> {
        self.0.iter()
    }
}

impl<A> FromIterator<A> for Args
where
    A: Into<Arg>,
{
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Args(iter.into_iter().map(Into::into).collect())
    }
}

impl<A> Extend<A> for Args
where
    A: Into<Arg>,
{
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl From<Vec<Arg>> for Args {
    fn from(args: Vec<Arg>) -> Self {
        Args(args)
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Arg;
    type IntoIter = std::slice::Iter<'a, Arg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Args {
    type Item = Arg;
    type IntoIter = std::vec::IntoIter<Arg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Named options attached to a term. Keys are unique; inserting a key a
/// second time replaces the earlier value (last write wins), matching the
/// JSON object the options encode into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptArgs(BTreeMap<String, Arg>);

impl OptArgs {
    pub fn new() -> Self {
        OptArgs::default()
    }

    /// Consuming insert for fluent construction.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Arg>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert with key validation, for option names arriving from
    /// untrusted input. Accepts plain identifiers only.
    pub fn checked_insert(&mut self, key: impl Into<String>, value: impl Into<Arg>) -> Result<()> {
        let key = key.into();
        let valid = !key.is_empty()
            && !key.starts_with(|c: char| c.is_ascii_digit())
            && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(ReqlError::InvalidOptionKey(key));
        }
        self.insert(key, value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Arg> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, Arg> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for OptArgs
where
    K: Into<String>,
    V: Into<Arg>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        OptArgs(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One node of the query AST.
///
/// A term is immutable once constructed: building a query never mutates an
/// existing node, it only wraps one as the predecessor of a new node. A
/// fully built tree is therefore safe to encode or inspect from several
/// threads at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    kind: TermType,
    prev: Option<Box<Term>>,
    args: Args,
    opt_args: OptArgs,
}

impl Term {
    /// The canonical constructor. `args` and `opt_args` are stored as
    /// given; normalization happens in the conversions that build them.
    /// The predecessor is owned, never deep-copied.
    pub fn new(prev: Option<Term>, kind: TermType, args: Args, opt_args: OptArgs) -> Self {
        Term {
            kind,
            prev: prev.map(Box::new),
            args,
            opt_args,
        }
    }

    /// A term with no predecessor, the shape the driver entry points use.
    pub fn start(kind: TermType, args: Args, opt_args: OptArgs) -> Self {
        Term::new(None, kind, args, opt_args)
    }

    /// Single-argument convenience: wraps one raw value into a one-element
    /// argument list with no predecessor and no options.
    pub fn with_arg(kind: TermType, arg: impl Into<Arg>) -> Self {
        Term::start(kind, Args::one(arg), OptArgs::new())
    }

    /// Variadic factory: builds the argument list from a flat sequence of
    /// raw values, no predecessor, no options.
    pub fn from_args<I, A>(kind: TermType, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        Term::start(kind, args.into_iter().collect(), OptArgs::new())
    }

    /// A literal lifted into the AST, so that chained operations can hang
    /// off a plain value. Encodes as the bare literal on the wire.
    pub fn datum(value: impl Into<Datum>) -> Self {
        Term::with_arg(TermType::Datum, value.into())
    }

    /// Chain a new operation onto this node, consuming it as the
    /// predecessor.
    pub fn chain(self, kind: TermType, args: Args, opt_args: OptArgs) -> Self {
        Term::new(Some(self), kind, args, opt_args)
    }

    /// A copy of this node with one more option attached. The original is
    /// consumed; nothing is mutated in place.
    pub fn with_opt_arg(self, key: impl Into<String>, value: impl Into<Arg>) -> Self {
        let Term {
            kind,
            prev,
            args,
            opt_args,
        } = self;
        Term {
            kind,
            prev,
            args,
            opt_args: opt_args.with(key, value),
        }
    }

    pub fn kind(&self) -> TermType {
        self.kind
    }

    pub fn prev(&self) -> Option<&Term> {
        self.prev.as_deref()
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    pub fn opt_args(&self) -> &OptArgs {
        &self.opt_args
    }

    /// Serialize this tree to its wire representation.
    pub fn encode(&self) -> Result<JsonValue> {
        crate::encode::to_wire(self)
    }
}

//! The fluent query surface: the `r` entry point and the chainable
//! [`ReqlQuery`] wrapper.
//!
//! Every method here is a thin factory: it fixes one [`TermType`] and
//! hands its inputs to the canonical `Term` constructors, so a fluent
//! chain encodes identically to building the tree by hand.

use reql_ast::prelude::*;
use serde_json::Value as JsonValue;

/// The ReQL entry point, by driver convention spelled lowercase:
/// `r.table("users").get(1).delete()`.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
pub struct r;

/// A chainable query expression owning a finished term node.
///
/// Chaining consumes the expression and wraps its term as the
/// predecessor of the next node; nothing is ever mutated in place, so a
/// kept clone of any stage stays valid.
#[derive(Debug, Clone, PartialEq)]
pub struct ReqlQuery {
    term: Term,
}

impl From<ReqlQuery> for Term {
    fn from(query: ReqlQuery) -> Self {
        query.term
    }
}

impl From<Term> for ReqlQuery {
    fn from(term: Term) -> Self {
        ReqlQuery { term }
    }
}

impl From<ReqlQuery> for Arg {
    fn from(query: ReqlQuery) -> Self {
        Arg::Term(query.term)
    }
}

macro_rules! nullary_terms {
    ($($(#[$meta:meta])* $name:ident => $kind:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(self) -> ReqlQuery {
                self.chain(TermType::$kind, Args::new())
            }
        )*
    };
}

macro_rules! unary_terms {
    ($($(#[$meta:meta])* $name:ident => $kind:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(self, value: impl Into<Arg>) -> ReqlQuery {
                self.chain(TermType::$kind, Args::one(value))
            }
        )*
    };
}

impl r {
    /// Reference a database.
    pub fn db(self, name: impl Into<Arg>) -> ReqlQuery {
        Term::with_arg(TermType::Db, name).into()
    }

    /// Reference a table in the connection's default database.
    pub fn table(self, name: impl Into<Arg>) -> ReqlQuery {
        Term::with_arg(TermType::Table, name).into()
    }

    /// Lift a native value into the query language.
    pub fn expr(self, value: impl Into<Datum>) -> ReqlQuery {
        Term::datum(value).into()
    }

    /// The implicit row variable: `r.row().bracket("age").gt(30)`.
    pub fn row(self) -> ReqlQuery {
        Term::start(TermType::ImplicitVar, Args::new(), OptArgs::new()).into()
    }

    /// Splat an array of values into an operation's argument list
    /// server-side.
    pub fn args<I>(self, values: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        Term::with_arg(TermType::Args, Term::from_args(TermType::MakeArray, values)).into()
    }

    /// Logical AND over any number of expressions.
    pub fn and<I>(self, values: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        Term::from_args(TermType::And, values).into()
    }

    /// Logical OR over any number of expressions.
    pub fn or<I>(self, values: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        Term::from_args(TermType::Or, values).into()
    }

    /// Logical negation.
    pub fn not_(self, value: impl Into<Arg>) -> ReqlQuery {
        Term::with_arg(TermType::Not, value).into()
    }

    /// Server-side conditional.
    pub fn branch(
        self,
        condition: impl Into<Arg>,
        then: impl Into<Arg>,
        otherwise: impl Into<Arg>,
    ) -> ReqlQuery {
        Term::from_args(
            TermType::Branch,
            [condition.into(), then.into(), otherwise.into()],
        )
        .into()
    }

    /// Evaluate `function` with `arguments`. The function goes first on
    /// the wire.
    pub fn do_<I>(self, function: impl Into<Arg>, arguments: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let mut args = Args::one(function);
        args.extend(arguments);
        Term::start(TermType::Funcall, args, OptArgs::new()).into()
    }

    /// Raise a runtime error on the server.
    pub fn error(self, message: impl Into<Arg>) -> ReqlQuery {
        Term::with_arg(TermType::Error, message).into()
    }

    /// Embed a JavaScript expression.
    pub fn js(self, code: impl Into<Arg>) -> ReqlQuery {
        Term::with_arg(TermType::JavaScript, code).into()
    }

    /// Parse a JSON string server-side.
    pub fn json(self, source: impl Into<Arg>) -> ReqlQuery {
        Term::with_arg(TermType::Json, source).into()
    }

    /// The time of query evaluation.
    pub fn now(self) -> ReqlQuery {
        Term::start(TermType::Now, Args::new(), OptArgs::new()).into()
    }

    /// A server-generated UUID.
    pub fn uuid(self) -> ReqlQuery {
        Term::start(TermType::Uuid, Args::new(), OptArgs::new()).into()
    }

    /// A random number in `[low, high)`.
    pub fn random(self, low: impl Into<Arg>, high: impl Into<Arg>) -> ReqlQuery {
        Term::from_args(TermType::Random, [low.into(), high.into()]).into()
    }

    /// A stream counting from zero up to `end`.
    pub fn range(self, end: impl Into<Arg>) -> ReqlQuery {
        Term::with_arg(TermType::Range, end).into()
    }

    /// Protect an object from merge semantics.
    pub fn literal(self, value: impl Into<Arg>) -> ReqlQuery {
        Term::with_arg(TermType::Literal, value).into()
    }

    /// Build an object from alternating key/value arguments.
    pub fn object<I>(self, pairs: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        Term::from_args(TermType::Object, pairs).into()
    }

    /// A time from seconds since epoch.
    pub fn epoch_time(self, seconds: impl Into<Arg>) -> ReqlQuery {
        Term::with_arg(TermType::EpochTime, seconds).into()
    }

    /// A time from an ISO 8601 string.
    pub fn iso8601(self, source: impl Into<Arg>) -> ReqlQuery {
        Term::with_arg(TermType::Iso8601, source).into()
    }

    /// The smallest possible value, for open-ended `between`.
    pub fn minval(self) -> ReqlQuery {
        Term::start(TermType::Minval, Args::new(), OptArgs::new()).into()
    }

    /// The largest possible value, for open-ended `between`.
    pub fn maxval(self) -> ReqlQuery {
        Term::start(TermType::Maxval, Args::new(), OptArgs::new()).into()
    }

    /// Ascending ordering for `order_by`.
    pub fn asc(self, field: impl Into<Arg>) -> ReqlQuery {
        Term::with_arg(TermType::Asc, field).into()
    }

    /// Descending ordering for `order_by`.
    pub fn desc(self, field: impl Into<Arg>) -> ReqlQuery {
        Term::with_arg(TermType::Desc, field).into()
    }

    pub fn db_create(self, name: impl Into<Arg>) -> ReqlQuery {
        Term::with_arg(TermType::DbCreate, name).into()
    }

    pub fn db_drop(self, name: impl Into<Arg>) -> ReqlQuery {
        Term::with_arg(TermType::DbDrop, name).into()
    }

    pub fn db_list(self) -> ReqlQuery {
        Term::start(TermType::DbList, Args::new(), OptArgs::new()).into()
    }

    /// Grant permissions at the cluster level.
    pub fn grant(self, user: impl Into<Arg>, permissions: impl Into<Arg>) -> ReqlQuery {
        Term::from_args(TermType::Grant, [user.into(), permissions.into()]).into()
    }
}

impl ReqlQuery {
    fn chain(self, kind: TermType, args: Args) -> ReqlQuery {
        self.term.chain(kind, args, OptArgs::new()).into()
    }

    fn chain_iter<I>(self, kind: TermType, values: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.chain(kind, values.into_iter().collect())
    }

    /// The underlying term node.
    pub fn term(&self) -> &Term {
        &self.term
    }

    pub fn into_term(self) -> Term {
        self.term
    }

    /// Serialize to the wire representation.
    pub fn encode(&self) -> Result<JsonValue> {
        self.term.encode()
    }

    /// Wrap this query in a `Start` frame for the transport.
    pub fn into_frame(self) -> QueryMessage {
        QueryMessage::start(self.term)
    }

    /// Attach a named option to the most recent operation.
    pub fn opt_arg(self, key: impl Into<String>, value: impl Into<Arg>) -> ReqlQuery {
        self.term.with_opt_arg(key, value).into()
    }

    // -- selection --------------------------------------------------------

    unary_terms! {
        /// Reference a table in this database.
        table => Table,
        /// Fetch a single document by primary key.
        get => Get,
        /// Keep the documents matching a predicate object or row
        /// expression.
        filter => Filter,
    }

    /// Fetch documents by key; pass the index via `opt_arg("index", ..)`.
    pub fn get_all<I>(self, keys: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.chain_iter(TermType::GetAll, keys)
    }

    /// Documents with key between `lower` and `upper`.
    pub fn between(self, lower: impl Into<Arg>, upper: impl Into<Arg>) -> ReqlQuery {
        self.chain_iter(TermType::Between, [lower.into(), upper.into()])
    }

    // -- writes -----------------------------------------------------------

    unary_terms! {
        /// Insert a document or a sequence of documents.
        insert => Insert,
        /// Update matching documents with a partial document.
        update => Update,
        /// Replace matching documents wholesale.
        replace => Replace,
    }

    nullary_terms! {
        /// Delete the selected documents.
        delete => Delete,
        /// Flush soft-durability writes to disk.
        sync => Sync,
    }

    // -- transformations --------------------------------------------------

    unary_terms! {
        /// Order by a field or an `r.asc(..)` / `r.desc(..)` wrapper.
        order_by => OrderBy,
        /// Drop the first `n` elements.
        skip => Skip,
        /// Keep at most `n` elements.
        limit => Limit,
        /// The nth element, negative indexes counting from the end.
        nth => Nth,
        /// Concatenate with another sequence.
        union => Union,
        /// Uniformly sample `n` elements.
        sample => Sample,
        /// Merge another object (or row function result) over this one.
        merge => Merge,
        /// Append a value to an array.
        append => Append,
        /// Prepend a value to an array.
        prepend => Prepend,
        /// Remove the given value's occurrences from an array.
        difference => Difference,
        /// Set-semantics insert.
        set_insert => SetInsert,
        /// Set-semantics union.
        set_union => SetUnion,
        /// Set-semantics intersection.
        set_intersection => SetIntersection,
        /// Set-semantics difference.
        set_difference => SetDifference,
    }

    nullary_terms! {
        /// Remove duplicate elements.
        distinct => Distinct,
        /// Interleave the left/right fields of a joined sequence.
        zip => Zip,
    }

    /// Elements from `start` (inclusive) to `end` (exclusive).
    pub fn slice(self, start: impl Into<Arg>, end: impl Into<Arg>) -> ReqlQuery {
        self.chain_iter(TermType::Slice, [start.into(), end.into()])
    }

    /// Keep only the named fields.
    pub fn pluck<I>(self, fields: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.chain_iter(TermType::Pluck, fields)
    }

    /// Drop the named fields.
    pub fn without<I>(self, fields: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.chain_iter(TermType::Without, fields)
    }

    /// Keep elements that have all the named fields, plucked.
    pub fn with_fields<I>(self, fields: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.chain_iter(TermType::WithFields, fields)
    }

    /// Insert `value` at `offset`.
    pub fn insert_at(self, offset: impl Into<Arg>, value: impl Into<Arg>) -> ReqlQuery {
        self.chain_iter(TermType::InsertAt, [offset.into(), value.into()])
    }

    /// Remove the element at `offset`.
    pub fn delete_at(self, offset: impl Into<Arg>) -> ReqlQuery {
        self.chain(TermType::DeleteAt, Args::one(offset))
    }

    /// Replace the element at `offset`.
    pub fn change_at(self, offset: impl Into<Arg>, value: impl Into<Arg>) -> ReqlQuery {
        self.chain_iter(TermType::ChangeAt, [offset.into(), value.into()])
    }

    /// Splice an array in at `offset`.
    pub fn splice_at(self, offset: impl Into<Arg>, values: impl Into<Arg>) -> ReqlQuery {
        self.chain_iter(TermType::SpliceAt, [offset.into(), values.into()])
    }

    // -- aggregation ------------------------------------------------------

    nullary_terms! {
        /// The number of elements.
        count => Count,
        /// Sum of a sequence of numbers.
        sum => Sum,
        /// Average of a sequence of numbers.
        avg => Avg,
        /// Minimum element.
        min => Min,
        /// Maximum element.
        max => Max,
        /// Collapse a grouped stream back to a plain array.
        ungroup => Ungroup,
    }

    unary_terms! {
        /// Group by a field.
        group => Group,
    }

    // -- document access --------------------------------------------------

    unary_terms! {
        /// Index into a field or array element; `query["field"]` in the
        /// dynamic drivers.
        bracket => Bracket,
        /// Fetch a single field.
        get_field => GetField,
    }

    nullary_terms! {
        /// The keys of an object.
        keys => Keys,
        /// The values of an object.
        values => Values,
    }

    /// True when all named fields are present.
    pub fn has_fields<I>(self, fields: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.chain_iter(TermType::HasFields, fields)
    }

    /// True when the sequence contains every given value.
    pub fn contains<I>(self, values: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.chain_iter(TermType::Contains, values)
    }

    // -- predicates and arithmetic ---------------------------------------

    unary_terms! {
        eq => Eq,
        ne => Ne,
        lt => Lt,
        le => Le,
        gt => Gt,
        ge => Ge,
        add => Add,
        sub => Sub,
        mul => Mul,
        div => Div,
        /// Modulo; named with a trailing underscore to dodge the keyword.
        mod_ => Mod,
        /// Fall back to `value` when this expression is null or missing.
        default => Default,
        /// Cast to another type by name: `"string"`, `"number"`, …
        coerce_to => CoerceTo,
        /// Match against a RE2 regular expression.
        match_ => Match,
        /// Split a string on a separator.
        split => Split,
    }

    nullary_terms! {
        not_ => Not,
        floor => Floor,
        ceil => Ceil,
        round => Round,
        is_empty => IsEmpty,
        /// The name of this value's type.
        type_of => TypeOf,
        /// Server metadata about this value.
        info => Info,
        upcase => Upcase,
        downcase => Downcase,
    }

    /// Logical AND with further expressions.
    pub fn and<I>(self, others: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.chain_iter(TermType::And, others)
    }

    /// Logical OR with further expressions.
    pub fn or<I>(self, others: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.chain_iter(TermType::Or, others)
    }

    /// Server-side conditional on this expression.
    pub fn branch(self, then: impl Into<Arg>, otherwise: impl Into<Arg>) -> ReqlQuery {
        self.chain_iter(TermType::Branch, [then.into(), otherwise.into()])
    }

    // -- administration ---------------------------------------------------

    unary_terms! {
        /// Create a table in this database.
        table_create => TableCreate,
        /// Drop a table from this database.
        table_drop => TableDrop,
        /// Create a secondary index.
        index_create => IndexCreate,
        /// Drop a secondary index.
        index_drop => IndexDrop,
    }

    nullary_terms! {
        /// List the tables of this database.
        table_list => TableList,
        /// List this table's secondary indexes.
        index_list => IndexList,
        /// This table or database's configuration document.
        config => Config,
        /// This table or database's status document.
        status => Status,
        /// Block until ready.
        wait => Wait,
        /// Rebalance shards.
        rebalance => Rebalance,
        /// An infinite changefeed on this selection.
        changes => Changes,
    }

    /// Status documents for the named indexes (all when empty).
    pub fn index_status<I>(self, indexes: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.chain_iter(TermType::IndexStatus, indexes)
    }

    /// Block until the named indexes are ready (all when empty).
    pub fn index_wait<I>(self, indexes: I) -> ReqlQuery
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.chain_iter(TermType::IndexWait, indexes)
    }

    pub fn index_rename(self, old_name: impl Into<Arg>, new_name: impl Into<Arg>) -> ReqlQuery {
        self.chain_iter(TermType::IndexRename, [old_name.into(), new_name.into()])
    }

    /// Grant permissions on this table or database.
    pub fn grant(self, user: impl Into<Arg>, permissions: impl Into<Arg>) -> ReqlQuery {
        self.chain_iter(TermType::Grant, [user.into(), permissions.into()])
    }
}

//! Linearization of a term tree into the JSON-array wire format.
//!
//! Encoding is pure: it never mutates the tree and the same tree always
//! produces structurally identical output, so a frame can be re-sent
//! byte-for-byte on retry.

use serde_json::{json, Map, Value as JsonValue};
use tracing::trace;

use crate::datum::Datum;
use crate::error::{ReqlError, Result};
use crate::term::{Arg, OptArgs, Term};
use crate::term_type::TermType;

/// Encode a term tree to its wire representation:
/// `[code, args]`, or `[code, args, optargs]` when options are set.
///
/// The predecessor, if any, becomes the first encoded argument, so a
/// chain `table.filter(..).delete()` nests front-to-back the way the
/// pipeline reads.
pub fn to_wire(term: &Term) -> Result<JsonValue> {
    trace!(kind = ?term.kind(), "encoding term tree");
    encode_term(term)
}

fn encode_term(term: &Term) -> Result<JsonValue> {
    // A lifted literal encodes as the bare value; the wire has no node
    // wrapper for datums.
    if term.kind() == TermType::Datum && term.prev().is_none() && term.opt_args().is_empty() {
        if let [Arg::Value(datum)] = term.args().iter().as_slice() {
            return encode_datum(datum);
        }
    }

    let mut args = Vec::with_capacity(term.args().len() + usize::from(term.prev().is_some()));
    if let Some(prev) = term.prev() {
        args.push(encode_term(prev)?);
    }
    for arg in term.args() {
        args.push(encode_arg(arg)?);
    }

    let mut parts = vec![json!(term.kind().code()), JsonValue::Array(args)];
    if !term.opt_args().is_empty() {
        parts.push(encode_opt_args(term.opt_args())?);
    }
    Ok(JsonValue::Array(parts))
}

fn encode_arg(arg: &Arg) -> Result<JsonValue> {
    match arg {
        Arg::Value(datum) => encode_datum(datum),
        Arg::Term(term) => encode_term(term),
    }
}

pub(crate) fn encode_opt_args(opt_args: &OptArgs) -> Result<JsonValue> {
    let mut fields = Map::with_capacity(opt_args.len());
    for (key, value) in opt_args.iter() {
        fields.insert(key.clone(), encode_arg(value)?);
    }
    Ok(JsonValue::Object(fields))
}

fn encode_datum(datum: &Datum) -> Result<JsonValue> {
    match datum {
        Datum::Null => Ok(JsonValue::Null),
        Datum::Bool(b) => Ok(json!(b)),
        Datum::Number(n) => encode_number(*n),
        Datum::String(s) => Ok(json!(s)),
        // A bare JSON array means a term on this wire, so literal arrays
        // are sent as MAKE_ARRAY.
        Datum::Array(items) => {
            let encoded: Result<Vec<JsonValue>> = items.iter().map(encode_datum).collect();
            Ok(json!([TermType::MakeArray.code(), encoded?]))
        }
        Datum::Object(fields) => {
            let mut out = Map::with_capacity(fields.len());
            for (key, value) in fields {
                out.insert(key.clone(), encode_datum(value)?);
            }
            Ok(JsonValue::Object(out))
        }
    }
}

fn encode_number(n: f64) -> Result<JsonValue> {
    if !n.is_finite() {
        return Err(ReqlError::UnencodableValue(format!("non-finite number {n}")));
    }
    // Integral values go out as JSON integers, the shape the official
    // drivers send for whole numbers.
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        Ok(json!(n as i64))
    } else {
        Ok(json!(n))
    }
}

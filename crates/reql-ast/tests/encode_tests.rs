//! Wire-shape tests for the term encoder.

use pretty_assertions::assert_eq;
use serde_json::json;

use reql_ast::prelude::*;

fn users_table() -> Term {
    Term::with_arg(TermType::Table, "users")
}

#[test]
fn chained_selection_nests_predecessor_first() {
    let query = users_table()
        .chain(TermType::Get, Args::one(1), OptArgs::new())
        .chain(TermType::Delete, Args::new(), OptArgs::new());

    assert_eq!(
        query.encode().unwrap(),
        json!([54, [[16, [[15, ["users"]], 1]]]])
    );
}

#[test]
fn predecessor_becomes_first_encoded_arg() {
    let a = users_table();
    let encoded_a = a.encode().unwrap();

    let b = a.chain(
        TermType::Filter,
        Args::one(Datum::from(serde_json::json!({"admin": true}))),
        OptArgs::new(),
    );
    let encoded_b = b.encode().unwrap();

    assert_eq!(encoded_b[1][0], encoded_a);
    assert_eq!(encoded_b[1][1], json!({"admin": true}));
}

#[test]
fn empty_opt_args_are_omitted() {
    let encoded = users_table().encode().unwrap();
    assert_eq!(encoded.as_array().map(Vec::len), Some(2));
}

#[test]
fn opt_args_encode_as_trailing_object() {
    let insert = users_table()
        .chain(
            TermType::Insert,
            Args::one(Datum::from(json!({"id": 1}))),
            OptArgs::new().with("durability", "soft").with("return_changes", true),
        );

    assert_eq!(
        insert.encode().unwrap(),
        json!([56, [[15, ["users"]], {"id": 1}],
               {"durability": "soft", "return_changes": true}])
    );
}

#[test]
fn encoding_is_idempotent() {
    let query = users_table()
        .chain(TermType::Filter, Args::one(Datum::from(json!({"age": 30}))), OptArgs::new())
        .chain(TermType::Count, Args::new(), OptArgs::new());

    assert_eq!(query.encode().unwrap(), query.encode().unwrap());
}

#[test]
fn lifted_datum_encodes_as_bare_literal() {
    assert_eq!(Term::datum(5).encode().unwrap(), json!(5));
    assert_eq!(Term::datum("hello").encode().unwrap(), json!("hello"));
    assert_eq!(Term::datum(()).encode().unwrap(), json!(null));
}

#[test]
fn literal_arrays_become_make_array_terms() {
    assert_eq!(
        Term::datum(vec![1, 2, 3]).encode().unwrap(),
        json!([2, [1, 2, 3]])
    );

    // The wrapping applies recursively, including under object fields.
    assert_eq!(
        Term::datum(Datum::from(json!({"tags": ["a", "b"]})))
            .encode()
            .unwrap(),
        json!({"tags": [2, ["a", "b"]]})
    );
}

#[test]
fn integral_numbers_encode_as_json_integers() {
    assert_eq!(Term::datum(5.0).encode().unwrap(), json!(5));
    assert_eq!(Term::datum(1.5).encode().unwrap(), json!(1.5));
    assert_eq!(Term::datum(-3i64).encode().unwrap(), json!(-3));
}

#[test]
fn non_finite_numbers_fail_encoding_as_a_whole() {
    let query = users_table().chain(
        TermType::Filter,
        Args::one(Datum::Number(f64::NAN)),
        OptArgs::new(),
    );
    assert!(matches!(
        query.encode(),
        Err(ReqlError::UnencodableValue(_))
    ));

    // Buried inside a literal collection it still poisons the encode.
    let nested = Term::datum(Datum::Array(vec![
        Datum::Number(1.0),
        Datum::Object(
            [("x".to_string(), Datum::Number(f64::INFINITY))]
                .into_iter()
                .collect(),
        ),
    ]));
    assert!(matches!(
        nested.encode(),
        Err(ReqlError::UnencodableValue(_))
    ));
}

#[test]
fn time_pseudo_type_survives_encoding() {
    use chrono::TimeZone;
    let dt = chrono::Utc.with_ymd_and_hms(2015, 5, 6, 12, 0, 0).unwrap();
    let encoded = Term::datum(dt).encode().unwrap();

    assert_eq!(encoded["$reql_type$"], json!("TIME"));
    assert_eq!(encoded["timezone"], json!("+00:00"));
    assert_eq!(encoded["epoch_time"], json!(1430913600));
}

#[test]
fn nested_term_in_opt_args_encodes_recursively() {
    let order_by = users_table().chain(
        TermType::OrderBy,
        Args::new(),
        OptArgs::new().with("index", Term::with_arg(TermType::Desc, "age")),
    );

    assert_eq!(
        order_by.encode().unwrap(),
        json!([41, [[15, ["users"]]], {"index": [74, ["age"]]}])
    );
}

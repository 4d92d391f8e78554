use crate::prelude::*;

use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn fluent_chain_matches_canonical_construction() {
    let fluent = r.table("users").get(1).delete();

    let canonical = Term::with_arg(TermType::Table, "users")
        .chain(TermType::Get, Args::one(1), OptArgs::new())
        .chain(TermType::Delete, Args::new(), OptArgs::new());

    assert_eq!(fluent.term(), &canonical);
    assert_eq!(fluent.encode().unwrap(), canonical.encode().unwrap());
}

#[test]
fn filter_by_example_object() {
    let query = r
        .table("users")
        .filter(Datum::from(json!({"age": 30, "admin": true})));

    assert_eq!(
        query.encode().unwrap(),
        json!([39, [[15, ["users"]], {"admin": true, "age": 30}]])
    );
}

#[test]
fn get_all_with_index_option() {
    let query = r
        .table("users")
        .get_all(["alice", "bob"])
        .opt_arg("index", "name");

    assert_eq!(
        query.encode().unwrap(),
        json!([78, [[15, ["users"]], "alice", "bob"], {"index": "name"}])
    );
}

#[test]
fn between_with_open_bounds() {
    let query = r.table("scores").between(r.minval(), r.maxval());

    assert_eq!(
        query.encode().unwrap(),
        json!([182, [[15, ["scores"]], [180, []], [181, []]]])
    );
}

#[test]
fn insert_with_write_options() {
    let query = r
        .table("users")
        .insert(Datum::from(json!({"id": 1, "name": "alice"})))
        .opt_arg("durability", "soft")
        .opt_arg("return_changes", true);

    assert_eq!(
        query.encode().unwrap(),
        json!([56, [[15, ["users"]], {"id": 1, "name": "alice"}],
               {"durability": "soft", "return_changes": true}])
    );
}

#[test]
fn order_by_descending_index_field() {
    let query = r.table("users").order_by(r.desc("age"));

    assert_eq!(
        query.encode().unwrap(),
        json!([41, [[15, ["users"]], [74, ["age"]]]])
    );
}

#[test]
fn arithmetic_chains_left_to_right() {
    let query = r.expr(2).add(3).mul(4);

    assert_eq!(query.encode().unwrap(), json!([26, [[24, [2, 3]], 4]]));
}

#[test]
fn row_expression_predicates() {
    let query = r.table("users").filter(r.row().bracket("age").gt(30));

    assert_eq!(
        query.encode().unwrap(),
        json!([39, [[15, ["users"]], [21, [[170, [[13, []], "age"]], 30]]]])
    );
}

#[test]
fn branch_entry_point_and_method_form_agree() {
    let from_r = r.branch(r.row().bracket("admin"), "staff", "visitor");
    let from_method = r.row().bracket("admin").branch("staff", "visitor");

    assert_eq!(from_r.encode().unwrap(), from_method.encode().unwrap());
}

#[test]
fn do_puts_the_function_first_on_the_wire() {
    let query = r.do_(r.js("(function(a, b) { return a + b; })"), [1, 2]);

    assert_eq!(
        query.encode().unwrap(),
        json!([64, [[11, ["(function(a, b) { return a + b; })"]], 1, 2]])
    );
}

#[test]
fn args_splat_wraps_values_in_make_array() {
    let query = r.table("users").get_all([r.args(["alice", "bob"])]);

    assert_eq!(
        query.encode().unwrap(),
        json!([78, [[15, ["users"]], [154, [[2, ["alice", "bob"]]]]]])
    );
}

#[test]
fn and_or_combine_subqueries() {
    let query = r.and([r.expr(true), r.row().bracket("admin").not_()]);

    assert_eq!(
        query.encode().unwrap(),
        json!([67, [true, [23, [[170, [[13, []], "admin"]]]]]])
    );
}

#[test]
fn table_admin_under_a_database() {
    let query = r
        .db("test")
        .table_create("users")
        .opt_arg("primary_key", "uid");

    assert_eq!(
        query.encode().unwrap(),
        json!([60, [[14, ["test"]], "users"], {"primary_key": "uid"}])
    );
}

#[test]
fn index_admin_chain() {
    let status = r.table("users").index_status(["name"]);
    assert_eq!(
        status.encode().unwrap(),
        json!([139, [[15, ["users"]], "name"]])
    );

    let renamed = r.table("users").index_rename("name", "full_name");
    assert_eq!(
        renamed.encode().unwrap(),
        json!([156, [[15, ["users"]], "name", "full_name"]])
    );
}

#[test]
fn expr_lifts_datetimes_to_time_pseudo_type() {
    use chrono::TimeZone;
    let dt = chrono::Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let encoded = r.expr(dt).encode().unwrap();

    assert_eq!(encoded["$reql_type$"], json!("TIME"));
    assert_eq!(encoded["epoch_time"], json!(1577836800));
}

#[test]
fn args_macro_accepts_mixed_values() {
    let list = args!["name", 1, true, r.now()];
    assert_eq!(list.len(), 4);

    assert_eq!(args!().len(), 0);
}

#[test]
fn opt_args_macro_last_write_wins() {
    let opts = opt_args! { index: "name", index: "id" };
    assert_eq!(opts.len(), 1);
    assert_eq!(opts.get("index"), Some(&Arg::Value(Datum::String("id".into()))));
}
